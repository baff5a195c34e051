//! Mock API for testing the workflows without a server.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use vidyamitra_core::error::CoachError;
use vidyamitra_core::model::{
    HealthStatus, InterviewAnswer, InterviewFeedback, InterviewQuestion, InterviewStartRequest,
    JobQuery, JobRecommendation, ProgressReport, QuizQuestion, QuizRequest, QuizResult,
    QuizSubmission, ResumeAnalysis, SkillEvaluation, SkillEvaluationRequest, TrainingPlan,
    TrainingPlanRequest,
};
use vidyamitra_core::traits::{CareerApi, ResumeUpload};

/// A `CareerApi` implementation backed by canned responses.
///
/// Records every payload it receives so tests can assert exact wire shapes,
/// counts calls, and can inject a one-shot transport failure or gate the
/// finalize calls behind a semaphore to exercise in-flight behavior.
pub struct MockApi {
    quiz_questions: Vec<QuizQuestion>,
    quiz_result: QuizResult,
    interview_questions: Vec<InterviewQuestion>,
    feedback: InterviewFeedback,
    /// When set, the next call fails with a 500 before doing anything else.
    fail_next: AtomicBool,
    /// When set, finalize calls wait for a permit before responding.
    finalize_gate: Mutex<Option<Arc<Semaphore>>>,
    call_count: AtomicU32,
    quiz_requests: Mutex<Vec<QuizRequest>>,
    submissions: Mutex<Vec<QuizSubmission>>,
    start_requests: Mutex<Vec<InterviewStartRequest>>,
    feedback_payloads: Mutex<Vec<Vec<InterviewAnswer>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            quiz_questions: Vec::new(),
            quiz_result: QuizResult {
                score: 1,
                total: 2,
                feedback: "Review the explanations and try again.".into(),
            },
            interview_questions: vec![
                InterviewQuestion {
                    id: 1,
                    question: "Tell me about a recent project.".into(),
                    hint: Some("Focus on impact and your specific contribution.".into()),
                },
                InterviewQuestion {
                    id: 2,
                    question: "Describe a difficult technical challenge.".into(),
                    hint: None,
                },
            ],
            feedback: InterviewFeedback {
                score: 8,
                strengths: vec!["Clear structure".into()],
                improvements: vec!["Add measurable outcomes".into()],
            },
            fail_next: AtomicBool::new(false),
            finalize_gate: Mutex::new(None),
            call_count: AtomicU32::new(0),
            quiz_requests: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            start_requests: Mutex::new(Vec::new()),
            feedback_payloads: Mutex::new(Vec::new()),
        }
    }

    /// Serve this fixed question set instead of synthesizing one per request.
    pub fn with_quiz_questions(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.quiz_questions = questions;
        self
    }

    pub fn with_interview_questions(mut self, questions: Vec<InterviewQuestion>) -> Self {
        self.interview_questions = questions;
        self
    }

    pub fn with_quiz_result(mut self, result: QuizResult) -> Self {
        self.quiz_result = result;
        self
    }

    pub fn with_feedback(mut self, feedback: InterviewFeedback) -> Self {
        self.feedback = feedback;
        self
    }

    /// Make the next call fail with HTTP 500.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Gate finalize calls (`submit_quiz`, `interview_feedback`) behind the
    /// returned semaphore; each call consumes one permit before responding.
    pub fn gate_finalize(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.finalize_gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn quiz_requests(&self) -> Vec<QuizRequest> {
        self.quiz_requests.lock().unwrap().clone()
    }

    /// Every `POST /quiz/submit` payload received, in order.
    pub fn submissions(&self) -> Vec<QuizSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn start_requests(&self) -> Vec<InterviewStartRequest> {
        self.start_requests.lock().unwrap().clone()
    }

    /// Every `POST /interview/feedback` payload received, in order.
    pub fn feedback_payloads(&self) -> Vec<Vec<InterviewAnswer>> {
        self.feedback_payloads.lock().unwrap().clone()
    }

    fn begin(&self, operation: &'static str) -> Result<(), CoachError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CoachError::Api {
                operation,
                status: 500,
            });
        }
        Ok(())
    }

    async fn pass_gate(&self) {
        let gate = self.finalize_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let permit = gate.acquire().await.expect("finalize gate closed");
            permit.forget();
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CareerApi for MockApi {
    async fn parse_resume(&self, upload: &ResumeUpload) -> Result<ResumeAnalysis, CoachError> {
        self.begin("resume parsing")?;
        Ok(ResumeAnalysis {
            summary: format!("Parsed {} ({} bytes)", upload.file_name, upload.content.len()),
            detected_skills: vec!["SQL".into()],
            missing_skills: vec!["Cloud Fundamentals".into()],
            suggested_improvements: vec!["Quantify impact".into()],
        })
    }

    async fn evaluate_skills(
        &self,
        request: &SkillEvaluationRequest,
    ) -> Result<SkillEvaluation, CoachError> {
        self.begin("skill evaluation")?;
        Ok(SkillEvaluation {
            role: request.target_role.clone(),
            strengths: request.current_skills.clone(),
            gaps: Vec::new(),
            summary: "Solid foundations.".into(),
        })
    }

    async fn training_plan(
        &self,
        request: &TrainingPlanRequest,
    ) -> Result<TrainingPlan, CoachError> {
        self.begin("plan generation")?;
        Ok(TrainingPlan {
            role: request.target_role.clone(),
            duration_weeks: request.weeks_available,
            plan: Vec::new(),
        })
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Vec<QuizQuestion>, CoachError> {
        self.begin("quiz generation")?;
        self.quiz_requests.lock().unwrap().push(request.clone());
        if !self.quiz_questions.is_empty() {
            return Ok(self.quiz_questions.clone());
        }
        // Synthesize the requested number of questions, ids starting at 1.
        Ok((1..=request.num_questions as u32)
            .map(|id| QuizQuestion {
                id,
                question: format!("Question {id} on {}", request.domain),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_index: 0,
            })
            .collect())
    }

    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, CoachError> {
        self.pass_gate().await;
        self.begin("quiz submission")?;
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(self.quiz_result.clone())
    }

    async fn start_interview(
        &self,
        request: &InterviewStartRequest,
    ) -> Result<Vec<InterviewQuestion>, CoachError> {
        self.begin("interview start")?;
        self.start_requests.lock().unwrap().push(request.clone());
        Ok(self.interview_questions.clone())
    }

    async fn interview_feedback(
        &self,
        answers: &[InterviewAnswer],
    ) -> Result<InterviewFeedback, CoachError> {
        self.pass_gate().await;
        self.begin("interview feedback")?;
        self.feedback_payloads.lock().unwrap().push(answers.to_vec());
        Ok(self.feedback.clone())
    }

    async fn match_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecommendation>, CoachError> {
        self.begin("job matching")?;
        let location = query
            .location_preference
            .clone()
            .unwrap_or_else(|| "Remote".into());
        Ok(vec![JobRecommendation {
            title: query.target_role.clone(),
            company: "Vidyamitra Labs".into(),
            location,
            match_score: 87,
        }])
    }

    async fn progress(&self) -> Result<ProgressReport, CoachError> {
        self.begin("progress lookup")?;
        Ok(ProgressReport {
            items: vec![
                vidyamitra_core::model::ProgressItem {
                    module: "Quizzes".into(),
                    completed: 3,
                    total: 10,
                },
                vidyamitra_core::model::ProgressItem {
                    module: "Mock Interviews".into(),
                    completed: 1,
                    total: 4,
                },
            ],
        })
    }

    async fn health(&self) -> Result<HealthStatus, CoachError> {
        self.begin("health check")?;
        Ok(HealthStatus {
            status: "ok".into(),
            message: "Vidyamitra API is running".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidyamitra_core::model::Difficulty;

    #[tokio::test]
    async fn synthesizes_the_requested_question_count() {
        let api = MockApi::new();
        let questions = api
            .generate_quiz(&QuizRequest {
                domain: "rust".into(),
                difficulty: Difficulty::Medium,
                num_questions: 7,
            })
            .await
            .unwrap();
        assert_eq!(questions.len(), 7);
        assert_eq!(questions[0].id, 1);
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_injection_is_one_shot() {
        let api = MockApi::new();
        api.fail_next_call();

        let err = api.progress().await.unwrap_err();
        assert!(matches!(err, CoachError::Api { status: 500, .. }));

        api.progress().await.unwrap();
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn records_submissions() {
        let api = MockApi::new();
        api.submit_quiz(&QuizSubmission {
            answers: vec![2, -1],
        })
        .await
        .unwrap();
        assert_eq!(api.submissions()[0].answers, vec![2, -1]);
    }
}

//! The transport trait between workflows and the Vidyamitra service.
//!
//! `CareerApi` has one method per endpoint. The HTTP implementation lives in
//! `vidyamitra-client`; tests use that crate's `MockApi`.

use async_trait::async_trait;

use crate::error::CoachError;
use crate::model::{
    HealthStatus, InterviewAnswer, InterviewFeedback, InterviewQuestion, InterviewStartRequest,
    JobQuery, JobRecommendation, ProgressReport, QuizQuestion, QuizRequest, QuizResult,
    QuizSubmission, ResumeAnalysis, SkillEvaluation, SkillEvaluationRequest, TrainingPlan,
    TrainingPlanRequest,
};

/// A resume file staged for the multipart `POST /resume/parse` call.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// Original file name, sent as the part's file name.
    pub file_name: String,
    /// Raw file bytes.
    pub content: Vec<u8>,
}

/// Typed access to the Vidyamitra API.
///
/// Every method maps to exactly one request; a non-2xx status or an
/// undecodable body is a transport failure, surfaced verbatim with no retry.
#[async_trait]
pub trait CareerApi: Send + Sync {
    /// `POST /resume/parse` (multipart form, field `file`).
    async fn parse_resume(&self, upload: &ResumeUpload) -> Result<ResumeAnalysis, CoachError>;

    /// `POST /evaluate`.
    async fn evaluate_skills(
        &self,
        request: &SkillEvaluationRequest,
    ) -> Result<SkillEvaluation, CoachError>;

    /// `POST /plan`.
    async fn training_plan(
        &self,
        request: &TrainingPlanRequest,
    ) -> Result<TrainingPlan, CoachError>;

    /// `POST /quiz/generate`.
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Vec<QuizQuestion>, CoachError>;

    /// `POST /quiz/submit`.
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, CoachError>;

    /// `POST /interview/start`.
    async fn start_interview(
        &self,
        request: &InterviewStartRequest,
    ) -> Result<Vec<InterviewQuestion>, CoachError>;

    /// `POST /interview/feedback`.
    async fn interview_feedback(
        &self,
        answers: &[InterviewAnswer],
    ) -> Result<InterviewFeedback, CoachError>;

    /// `POST /jobs`.
    async fn match_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecommendation>, CoachError>;

    /// `GET /progress`.
    async fn progress(&self) -> Result<ProgressReport, CoachError>;

    /// `GET /` on the service root (outside the API base path).
    async fn health(&self) -> Result<HealthStatus, CoachError>;
}

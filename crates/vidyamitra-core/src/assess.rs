//! Single-shot assessment operations.
//!
//! Each is a stateless request/response pair: validate the required input,
//! call the transport, hand back the typed result. Validation failures block
//! the call before any network I/O.

use crate::error::CoachError;
use crate::model::{
    AssessmentProfile, HealthStatus, JobQuery, JobRecommendation, ProgressReport, ResumeAnalysis,
    SkillEvaluation, SkillEvaluationRequest, TrainingPlan, TrainingPlanRequest,
};
use crate::traits::{CareerApi, ResumeUpload};

/// Upload a resume for analysis. Requires a named, non-empty file.
pub async fn analyze_resume(
    api: &dyn CareerApi,
    file_name: &str,
    content: Vec<u8>,
) -> Result<ResumeAnalysis, CoachError> {
    if file_name.trim().is_empty() {
        return Err(CoachError::Validation("no resume file selected".into()));
    }
    if content.is_empty() {
        return Err(CoachError::Validation(format!(
            "resume file '{file_name}' is empty"
        )));
    }
    api.parse_resume(&ResumeUpload {
        file_name: file_name.to_string(),
        content,
    })
    .await
}

/// Evaluate current skills against a target role.
pub async fn evaluate_skills(
    api: &dyn CareerApi,
    profile: &AssessmentProfile,
) -> Result<SkillEvaluation, CoachError> {
    if profile.target_role.is_empty() {
        return Err(CoachError::Validation("target role must not be empty".into()));
    }
    if profile.quantity < 0.0 || !profile.quantity.is_finite() {
        return Err(CoachError::Validation(format!(
            "experience years must be zero or more, got {}",
            profile.quantity
        )));
    }
    api.evaluate_skills(&SkillEvaluationRequest {
        target_role: profile.target_role.clone(),
        current_skills: profile.skills.clone(),
        experience_years: profile.quantity,
    })
    .await
}

/// Generate a week-by-week training plan for the given gaps.
pub async fn build_training_plan(
    api: &dyn CareerApi,
    profile: &AssessmentProfile,
) -> Result<TrainingPlan, CoachError> {
    if profile.target_role.is_empty() {
        return Err(CoachError::Validation("target role must not be empty".into()));
    }
    let weeks = profile.quantity as u32;
    if weeks < 1 || profile.quantity.fract() != 0.0 {
        return Err(CoachError::Validation(format!(
            "weeks available must be a whole number of at least 1, got {}",
            profile.quantity
        )));
    }
    api.training_plan(&TrainingPlanRequest {
        target_role: profile.target_role.clone(),
        gaps: profile.skills.clone(),
        weeks_available: weeks,
    })
    .await
}

/// Fetch job recommendations for a role, optionally scoped to a location.
pub async fn recommend_jobs(
    api: &dyn CareerApi,
    target_role: &str,
    location: Option<&str>,
) -> Result<Vec<JobRecommendation>, CoachError> {
    let target_role = target_role.trim();
    if target_role.is_empty() {
        return Err(CoachError::Validation("target role must not be empty".into()));
    }
    let location_preference = location
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string);
    api.match_jobs(&JobQuery {
        target_role: target_role.to_string(),
        location_preference,
    })
    .await
}

/// Fetch the learner's module-by-module progress.
pub async fn fetch_progress(api: &dyn CareerApi) -> Result<ProgressReport, CoachError> {
    api.progress().await
}

/// Ping the service health endpoint.
pub async fn check_health(api: &dyn CareerApi) -> Result<HealthStatus, CoachError> {
    api.health().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        InterviewAnswer, InterviewFeedback, InterviewQuestion, InterviewStartRequest,
        QuizQuestion, QuizRequest, QuizResult, QuizSubmission,
    };
    use async_trait::async_trait;

    /// Validation must block the call before any network I/O; every
    /// transport method here panics to prove it was never reached.
    struct UnreachableApi;

    #[async_trait]
    impl CareerApi for UnreachableApi {
        async fn parse_resume(&self, _: &ResumeUpload) -> Result<ResumeAnalysis, CoachError> {
            panic!("unexpected I/O")
        }
        async fn evaluate_skills(
            &self,
            _: &SkillEvaluationRequest,
        ) -> Result<SkillEvaluation, CoachError> {
            panic!("unexpected I/O")
        }
        async fn training_plan(
            &self,
            _: &TrainingPlanRequest,
        ) -> Result<TrainingPlan, CoachError> {
            panic!("unexpected I/O")
        }
        async fn generate_quiz(&self, _: &QuizRequest) -> Result<Vec<QuizQuestion>, CoachError> {
            panic!("unexpected I/O")
        }
        async fn submit_quiz(&self, _: &QuizSubmission) -> Result<QuizResult, CoachError> {
            panic!("unexpected I/O")
        }
        async fn start_interview(
            &self,
            _: &InterviewStartRequest,
        ) -> Result<Vec<InterviewQuestion>, CoachError> {
            panic!("unexpected I/O")
        }
        async fn interview_feedback(
            &self,
            _: &[InterviewAnswer],
        ) -> Result<InterviewFeedback, CoachError> {
            panic!("unexpected I/O")
        }
        async fn match_jobs(&self, _: &JobQuery) -> Result<Vec<JobRecommendation>, CoachError> {
            panic!("unexpected I/O")
        }
        async fn progress(&self) -> Result<ProgressReport, CoachError> {
            panic!("unexpected I/O")
        }
        async fn health(&self) -> Result<HealthStatus, CoachError> {
            panic!("unexpected I/O")
        }
    }

    #[tokio::test]
    async fn resume_requires_a_selected_file() {
        let err = analyze_resume(&UnreachableApi, "  ", b"content".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }

    #[tokio::test]
    async fn resume_rejects_empty_content() {
        let err = analyze_resume(&UnreachableApi, "resume.pdf", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }

    #[tokio::test]
    async fn evaluation_requires_a_role() {
        let profile = AssessmentProfile::new("   ", vec!["SQL".into()], 2.0);
        let err = evaluate_skills(&UnreachableApi, &profile).await.unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }

    #[tokio::test]
    async fn evaluation_rejects_negative_experience() {
        let profile = AssessmentProfile::new("Data Analyst", vec![], -0.5);
        let err = evaluate_skills(&UnreachableApi, &profile).await.unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }

    #[tokio::test]
    async fn plan_requires_at_least_one_week() {
        let profile = AssessmentProfile::new("Data Analyst", vec!["Cloud".into()], 0.0);
        let err = build_training_plan(&UnreachableApi, &profile)
            .await
            .unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }

    #[tokio::test]
    async fn jobs_require_a_role() {
        let err = recommend_jobs(&UnreachableApi, "", Some("Remote"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoachError::Validation(_)));
    }
}

//! reqwest implementation of `CareerApi`.
//!
//! One request per call, no retry, no caching. A non-2xx status is reported
//! as `Api { operation, status }` with the status code as the only authority;
//! a body that fails to decode as the expected JSON shape is a `Decode`
//! failure, never a success with null content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use vidyamitra_core::error::CoachError;
use vidyamitra_core::model::{
    HealthStatus, InterviewAnswer, InterviewFeedback, InterviewQuestion, InterviewStartRequest,
    JobQuery, JobRecommendation, ProgressReport, QuizQuestion, QuizRequest, QuizResult,
    QuizSubmission, ResumeAnalysis, SkillEvaluation, SkillEvaluationRequest, TrainingPlan,
    TrainingPlanRequest,
};
use vidyamitra_core::traits::{CareerApi, ResumeUpload};

use crate::config::ClientConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the Vidyamitra API.
pub struct ApiClient {
    api_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Convenience constructor with the default timeout.
    pub fn from_url(api_url: &str) -> Self {
        Self::new(&ClientConfig {
            api_url: api_url.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// The service root. The health route is mounted on the application
    /// itself, outside the `/api` base path.
    fn root_endpoint(&self) -> String {
        let root = self.api_url.strip_suffix("/api").unwrap_or(&self.api_url);
        format!("{root}/")
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, CoachError> {
        let response = builder.send().await.map_err(|e| CoachError::Network {
            operation,
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(CoachError::Api { operation, status });
        }

        response.json().await.map_err(|e| CoachError::Decode {
            operation,
            message: e.to_string(),
        })
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, CoachError> {
        self.execute(operation, self.client.post(self.endpoint(path)).json(body))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: String,
    ) -> Result<T, CoachError> {
        self.execute(operation, self.client.get(url)).await
    }
}

#[async_trait]
impl CareerApi for ApiClient {
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name))]
    async fn parse_resume(&self, upload: &ResumeUpload) -> Result<ResumeAnalysis, CoachError> {
        let part = multipart::Part::bytes(upload.content.clone())
            .file_name(upload.file_name.clone());
        let form = multipart::Form::new().part("file", part);
        self.execute(
            "resume parsing",
            self.client.post(self.endpoint("/resume/parse")).multipart(form),
        )
        .await
    }

    #[instrument(skip(self, request), fields(target_role = %request.target_role))]
    async fn evaluate_skills(
        &self,
        request: &SkillEvaluationRequest,
    ) -> Result<SkillEvaluation, CoachError> {
        self.post_json("skill evaluation", "/evaluate", request).await
    }

    #[instrument(skip(self, request), fields(target_role = %request.target_role))]
    async fn training_plan(
        &self,
        request: &TrainingPlanRequest,
    ) -> Result<TrainingPlan, CoachError> {
        self.post_json("plan generation", "/plan", request).await
    }

    #[instrument(skip(self, request), fields(domain = %request.domain))]
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Vec<QuizQuestion>, CoachError> {
        self.post_json("quiz generation", "/quiz/generate", request).await
    }

    #[instrument(skip(self, submission), fields(answers = submission.answers.len()))]
    async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizResult, CoachError> {
        self.post_json("quiz submission", "/quiz/submit", submission).await
    }

    #[instrument(skip(self, request), fields(target_role = %request.target_role))]
    async fn start_interview(
        &self,
        request: &InterviewStartRequest,
    ) -> Result<Vec<InterviewQuestion>, CoachError> {
        self.post_json("interview start", "/interview/start", request).await
    }

    #[instrument(skip(self, answers), fields(answers = answers.len()))]
    async fn interview_feedback(
        &self,
        answers: &[InterviewAnswer],
    ) -> Result<InterviewFeedback, CoachError> {
        self.post_json("interview feedback", "/interview/feedback", answers)
            .await
    }

    #[instrument(skip(self, query), fields(target_role = %query.target_role))]
    async fn match_jobs(&self, query: &JobQuery) -> Result<Vec<JobRecommendation>, CoachError> {
        self.post_json("job matching", "/jobs", query).await
    }

    #[instrument(skip(self))]
    async fn progress(&self) -> Result<ProgressReport, CoachError> {
        self.get_json("progress lookup", self.endpoint("/progress")).await
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<HealthStatus, CoachError> {
        self.get_json("health check", self.root_endpoint()).await
    }
}

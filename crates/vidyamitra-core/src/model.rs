//! Wire types for the Vidyamitra API.
//!
//! Field names mirror the service contract exactly; everything here is
//! immutable once received. The two answer-submission shapes are intentionally
//! asymmetric: quiz answers travel as a bare positional array, interview
//! answers re-attach the question id. Do not unify them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel marking an unanswered quiz slot.
pub const UNANSWERED: i32 = -1;

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

/// A multiple-choice question issued by `POST /quiz/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Server-issued question id.
    pub id: u32,
    /// Prompt text.
    pub question: String,
    /// Ordered option texts.
    pub options: Vec<String>,
    /// Index of the correct option. Authoritative only server-side; delivered
    /// so the client can bounds-check against the option count.
    pub correct_index: usize,
}

/// Request body for `POST /quiz/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub domain: String,
    pub difficulty: Difficulty,
    pub num_questions: usize,
}

/// Request body for `POST /quiz/submit`: chosen option indices, positionally
/// aligned with the issued questions. Unanswered slots carry [`UNANSWERED`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<i32>,
}

/// Response body of `POST /quiz/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub feedback: String,
}

/// Quiz difficulty, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Mock interview
// ---------------------------------------------------------------------------

/// A free-text question issued by `POST /interview/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    /// Server-issued question id; re-sent with the answer.
    pub id: u32,
    /// Prompt text.
    pub question: String,
    /// Optional coaching hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// Request body for `POST /interview/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewStartRequest {
    pub target_role: String,
    pub experience_years: f64,
}

/// One element of the `POST /interview/feedback` payload. Unlike the quiz
/// path, identity is carried explicitly: answers are matched server-side by
/// id, not by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewAnswer {
    pub question_id: u32,
    pub answer: String,
}

/// Response body of `POST /interview/feedback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewFeedback {
    /// 0–10 by contract; rendered verbatim, never rescaled client-side.
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

// ---------------------------------------------------------------------------
// Single-shot assessments
// ---------------------------------------------------------------------------

/// Response body of `POST /resume/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub summary: String,
    pub detected_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggested_improvements: Vec<String>,
}

/// Request body for `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEvaluationRequest {
    pub target_role: String,
    pub current_skills: Vec<String>,
    pub experience_years: f64,
}

/// One skill gap in a [`SkillEvaluation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub level: String,
    pub priority: String,
}

/// Response body of `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEvaluation {
    pub role: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<SkillGap>,
    pub summary: String,
}

/// Request body for `POST /plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlanRequest {
    pub target_role: String,
    pub gaps: Vec<String>,
    pub weeks_available: u32,
}

/// One week of a [`TrainingPlan`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanWeek {
    pub week: u32,
    pub focus: String,
    pub resources: Vec<String>,
}

/// Response body of `POST /plan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub role: String,
    pub duration_weeks: u32,
    pub plan: Vec<PlanWeek>,
}

/// Request body for `POST /jobs`. `location_preference` is omitted from the
/// JSON entirely when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobQuery {
    pub target_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_preference: Option<String>,
}

/// One recommendation from `POST /jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub location: String,
    pub match_score: u32,
}

/// One module row of `GET /progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressItem {
    pub module: String,
    pub completed: u32,
    pub total: u32,
}

/// Response body of `GET /progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    pub items: Vec<ProgressItem>,
}

/// Response body of the service health check (`GET /` on the service root).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Assessment profile
// ---------------------------------------------------------------------------

/// Learner input shared by the skill-evaluation and planning assessments:
/// a target role plus a deduplicated, order-irrelevant skill (or gap) set
/// and one numeric parameter (years of experience or weeks available).
#[derive(Debug, Clone)]
pub struct AssessmentProfile {
    pub target_role: String,
    pub skills: Vec<String>,
    pub quantity: f64,
}

impl AssessmentProfile {
    pub fn new(target_role: &str, skills: Vec<String>, quantity: f64) -> Self {
        Self {
            target_role: target_role.trim().to_string(),
            skills: normalize_skills(skills),
            quantity,
        }
    }
}

/// Trim, drop empties, and deduplicate case-insensitively, keeping the first
/// spelling and first-seen order.
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_display_and_parse() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_lowercase_on_wire() {
        let req = QuizRequest {
            domain: "backend".into(),
            difficulty: Difficulty::Hard,
            num_questions: 5,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["difficulty"], "hard");
        assert_eq!(json["num_questions"], 5);
    }

    #[test]
    fn quiz_submission_is_a_bare_positional_array() {
        let submission = QuizSubmission {
            answers: vec![2, UNANSWERED],
        };
        assert_eq!(
            serde_json::to_string(&submission).unwrap(),
            r#"{"answers":[2,-1]}"#
        );
    }

    #[test]
    fn interview_answers_carry_question_ids() {
        let payload = vec![
            InterviewAnswer {
                question_id: 7,
                answer: "a".into(),
            },
            InterviewAnswer {
                question_id: 9,
                answer: "b".into(),
            },
        ];
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"[{"question_id":7,"answer":"a"},{"question_id":9,"answer":"b"}]"#
        );
    }

    #[test]
    fn interview_question_hint_is_optional() {
        let q: InterviewQuestion =
            serde_json::from_str(r#"{"id": 2, "question": "Describe a challenge."}"#).unwrap();
        assert_eq!(q.id, 2);
        assert!(q.hint.is_none());
    }

    #[test]
    fn job_query_omits_absent_location() {
        let query = JobQuery {
            target_role: "Data Analyst".into(),
            location_preference: None,
        };
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"target_role":"Data Analyst"}"#
        );
    }

    #[test]
    fn skill_normalization_deduplicates_case_insensitively() {
        let skills = normalize_skills(vec![
            " Python ".into(),
            "SQL".into(),
            "python".into(),
            "".into(),
            "sql ".into(),
            "React".into(),
        ]);
        assert_eq!(skills, vec!["Python", "SQL", "React"]);
    }
}

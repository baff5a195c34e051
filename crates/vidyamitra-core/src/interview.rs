//! Mock-interview workflow controller.
//!
//! Same machine shape as the quiz workflow with two deliberate differences:
//! answers are free text defaulting to the empty string, and the finalize
//! payload re-attaches each question's id because the service matches
//! interview answers by identity, not position. The asymmetry with the quiz
//! wire format is part of the external contract.

use std::sync::{Arc, Mutex};

use tracing::instrument;

use crate::error::CoachError;
use crate::model::{
    InterviewAnswer, InterviewFeedback, InterviewQuestion, InterviewStartRequest,
};
use crate::quiz::Phase;
use crate::session::AnswerSheet;
use crate::traits::CareerApi;

#[derive(Debug)]
struct InterviewState {
    phase: Phase,
    generation: u64,
    /// Generation of the feedback request currently outstanding, if any.
    in_flight: Option<u64>,
    questions: Vec<InterviewQuestion>,
    answers: AnswerSheet<String>,
    feedback: Option<InterviewFeedback>,
}

/// One learner's mock-interview session, from issue to feedback.
pub struct InterviewWorkflow {
    api: Arc<dyn CareerApi>,
    state: Mutex<InterviewState>,
}

impl InterviewWorkflow {
    pub fn new(api: Arc<dyn CareerApi>) -> Self {
        Self {
            api,
            state: Mutex::new(InterviewState {
                phase: Phase::Idle,
                generation: 0,
                in_flight: None,
                questions: Vec::new(),
                answers: AnswerSheet::new(0, String::new()),
                feedback: None,
            }),
        }
    }

    /// Request a fresh interview question set, replacing any prior session.
    /// Failure leaves the prior session untouched.
    #[instrument(skip(self))]
    pub async fn start(
        &self,
        target_role: &str,
        experience_years: f64,
    ) -> Result<Vec<InterviewQuestion>, CoachError> {
        let target_role = target_role.trim();
        if target_role.is_empty() {
            return Err(CoachError::Validation("target role must not be empty".into()));
        }
        if experience_years < 0.0 || !experience_years.is_finite() {
            return Err(CoachError::Validation(format!(
                "experience years must be zero or more, got {experience_years}"
            )));
        }

        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.generation
        };

        let request = InterviewStartRequest {
            target_role: target_role.to_string(),
            experience_years,
        };
        let questions = self.api.start_interview(&request).await?;

        let mut state = self.state.lock().unwrap();
        if state.generation != generation {
            tracing::debug!(generation, "discarding stale interview question set");
            return Err(CoachError::Superseded);
        }
        state.answers = AnswerSheet::new(questions.len(), String::new());
        state.questions = questions.clone();
        state.feedback = None;
        state.in_flight = None;
        state.phase = Phase::Issued;
        Ok(questions)
    }

    /// Record the free-text answer for one question. Overwrite semantics,
    /// no length limit enforced client-side. Once feedback has been scored
    /// the sheet is consumed and no longer writable.
    pub fn record_answer(&self, question: usize, text: &str) -> Result<(), CoachError> {
        let mut state = self.state.lock().unwrap();
        if state.questions.is_empty() || state.phase == Phase::Scored {
            return Err(CoachError::NotReady("interview"));
        }
        state.answers.set(question, text.to_string())?;
        if state.phase == Phase::Issued {
            state.phase = Phase::Answering;
        }
        Ok(())
    }

    /// Zip the stored question ids with the answer sheet positionally and
    /// send the `{question_id, answer}` pairs for scoring. Unanswered slots
    /// travel as empty strings; partial sheets are valid input.
    #[instrument(skip(self))]
    pub async fn request_feedback(&self) -> Result<InterviewFeedback, CoachError> {
        let (generation, prior_phase, payload) = {
            let mut state = self.state.lock().unwrap();
            if state.questions.is_empty() || state.phase == Phase::Scored {
                return Err(CoachError::NotReady("interview"));
            }
            if state.in_flight.is_some() {
                return Err(CoachError::Busy);
            }
            state.in_flight = Some(state.generation);
            let prior = state.phase;
            state.phase = Phase::Submitted;
            let payload: Vec<InterviewAnswer> = state
                .questions
                .iter()
                .zip(state.answers.snapshot())
                .map(|(q, answer)| InterviewAnswer {
                    question_id: q.id,
                    answer,
                })
                .collect();
            (state.generation, prior, payload)
        };

        let outcome = self.api.interview_feedback(&payload).await;

        let mut state = self.state.lock().unwrap();
        let stale = state.generation != generation;
        if state.in_flight == Some(generation) {
            // Still our session: a successful superseding start would have
            // installed fresh state and cleared the flag. If the response is
            // stale, the superseding start failed in transport, so the old
            // sheet is still in place and gets its prior phase back.
            state.in_flight = None;
            if stale {
                state.phase = prior_phase;
            }
        }
        if stale {
            tracing::debug!(generation, "discarding stale interview feedback");
            return Err(CoachError::Superseded);
        }
        match outcome {
            Ok(feedback) => {
                state.phase = Phase::Scored;
                state.feedback = Some(feedback.clone());
                Ok(feedback)
            }
            Err(e) => {
                state.phase = prior_phase;
                Err(e)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().unwrap().phase
    }

    /// The issued question sequence, in service order.
    pub fn questions(&self) -> Vec<InterviewQuestion> {
        self.state.lock().unwrap().questions.clone()
    }

    /// Current answer sheet snapshot (empty string marks unanswered slots).
    pub fn answers(&self) -> Vec<String> {
        self.state.lock().unwrap().answers.snapshot()
    }

    /// How many questions have a recorded answer.
    pub fn answered(&self) -> usize {
        self.state.lock().unwrap().answers.answered()
    }

    pub fn feedback(&self) -> Option<InterviewFeedback> {
        self.state.lock().unwrap().feedback.clone()
    }
}

//! Quiz workflow controller.
//!
//! Drives the two-phase quiz protocol: issue a question set, collect answers
//! into an index-aligned sheet, then submit the whole sheet positionally.
//! Question identity is never re-sent on submit; the service scores by
//! position. A transport failure rolls the session back to the phase it was
//! in before the failed action.

use std::sync::{Arc, Mutex};

use tracing::instrument;

use crate::error::CoachError;
use crate::model::{Difficulty, QuizQuestion, QuizRequest, QuizResult, QuizSubmission, UNANSWERED};
use crate::session::AnswerSheet;
use crate::traits::CareerApi;

/// Smallest question count the reference UI offers.
pub const MIN_QUESTIONS: usize = 1;
/// Largest question count the reference UI offers. The service remains the
/// source of truth for how many questions actually come back.
pub const MAX_QUESTIONS: usize = 10;

/// Where a workflow session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Issued,
    Answering,
    Submitted,
    Scored,
}

#[derive(Debug)]
struct QuizState {
    phase: Phase,
    /// Bumped on every issue; responses carrying an older generation are
    /// stale and get discarded instead of installed.
    generation: u64,
    /// Generation of the submit currently outstanding, if any. Guards
    /// against a second submit while one is in flight, and lets a stale
    /// response tell whether the session it left behind is still installed.
    in_flight: Option<u64>,
    questions: Vec<QuizQuestion>,
    answers: AnswerSheet<i32>,
    result: Option<QuizResult>,
}

/// One learner's quiz session, from issue to scoring.
///
/// All mutation goes through this controller; the lock is never held across
/// an `.await`, so unrelated actions stay responsive while a request is in
/// flight.
pub struct QuizWorkflow {
    api: Arc<dyn CareerApi>,
    state: Mutex<QuizState>,
}

impl QuizWorkflow {
    pub fn new(api: Arc<dyn CareerApi>) -> Self {
        Self {
            api,
            state: Mutex::new(QuizState {
                phase: Phase::Idle,
                generation: 0,
                in_flight: None,
                questions: Vec::new(),
                answers: AnswerSheet::new(0, UNANSWERED),
                result: None,
            }),
        }
    }

    /// Request a fresh question set, replacing any prior session.
    ///
    /// On success the answer sheet is reset to sentinels and any previous
    /// score is discarded. On failure the prior session is left exactly as it
    /// was. Starting a new generate abandons the eventual result of any
    /// request still in flight for the old session.
    #[instrument(skip(self))]
    pub async fn generate(
        &self,
        domain: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, CoachError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(CoachError::Validation("quiz domain must not be empty".into()));
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
            return Err(CoachError::Validation(format!(
                "question count must be between {MIN_QUESTIONS} and {MAX_QUESTIONS}, got {count}"
            )));
        }

        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.generation
        };

        let request = QuizRequest {
            domain: domain.to_string(),
            difficulty,
            num_questions: count,
        };
        let questions = self.api.generate_quiz(&request).await?;

        let mut state = self.state.lock().unwrap();
        if state.generation != generation {
            tracing::debug!(generation, "discarding stale quiz question set");
            return Err(CoachError::Superseded);
        }
        state.answers = AnswerSheet::new(questions.len(), UNANSWERED);
        state.questions = questions.clone();
        state.result = None;
        state.in_flight = None;
        state.phase = Phase::Issued;
        Ok(questions)
    }

    /// Record the chosen option for one question, leaving all other slots
    /// untouched. Both indices are bounds-checked; the option check is
    /// defensive only and does not change what goes on the wire. Once the
    /// sheet has been scored it is consumed and no longer writable.
    pub fn select_answer(&self, question: usize, option: usize) -> Result<(), CoachError> {
        let mut state = self.state.lock().unwrap();
        if state.questions.is_empty() || state.phase == Phase::Scored {
            return Err(CoachError::NotReady("quiz"));
        }
        let option_count = state
            .questions
            .get(question)
            .ok_or(CoachError::IndexOutOfRange {
                index: question,
                len: state.questions.len(),
            })?
            .options
            .len();
        if option >= option_count {
            return Err(CoachError::IndexOutOfRange {
                index: option,
                len: option_count,
            });
        }
        state.answers.set(question, option as i32)?;
        if state.phase == Phase::Issued {
            state.phase = Phase::Answering;
        }
        Ok(())
    }

    /// Submit the full answer sheet positionally and store the score.
    ///
    /// Partial sheets (sentinels present) are valid input. Fails with
    /// `NotReady` before any questions are issued and after the sheet has
    /// already been consumed; a second submit while one is outstanding fails
    /// with `Busy` without touching state.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<QuizResult, CoachError> {
        let (generation, prior_phase, submission) = {
            let mut state = self.state.lock().unwrap();
            if state.questions.is_empty() || state.phase == Phase::Scored {
                return Err(CoachError::NotReady("quiz"));
            }
            if state.in_flight.is_some() {
                return Err(CoachError::Busy);
            }
            state.in_flight = Some(state.generation);
            let prior = state.phase;
            state.phase = Phase::Submitted;
            (
                state.generation,
                prior,
                QuizSubmission {
                    answers: state.answers.snapshot(),
                },
            )
        };

        let outcome = self.api.submit_quiz(&submission).await;

        let mut state = self.state.lock().unwrap();
        let stale = state.generation != generation;
        if state.in_flight == Some(generation) {
            // Still our session: a successful superseding generate would have
            // installed fresh state and cleared the flag. If the response is
            // stale, the superseding generate failed in transport, so the old
            // sheet is still in place and gets its prior phase back.
            state.in_flight = None;
            if stale {
                state.phase = prior_phase;
            }
        }
        if stale {
            tracing::debug!(generation, "discarding stale quiz score");
            return Err(CoachError::Superseded);
        }
        match outcome {
            Ok(result) => {
                state.phase = Phase::Scored;
                state.result = Some(result.clone());
                Ok(result)
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
    pub fn questions(&self) -> Vec<QuizQuestion> {
        self.state.lock().unwrap().questions.clone()
    }

    /// Current answer sheet snapshot (`-1` marks unanswered slots).
    pub fn answers(&self) -> Vec<i32> {
        self.state.lock().unwrap().answers.snapshot()
    }

    /// How many questions have a recorded answer.
    pub fn answered(&self) -> usize {
        self.state.lock().unwrap().answers.answered()
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.state.lock().unwrap().result.clone()
    }
}

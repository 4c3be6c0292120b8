//! Run Session use case
//!
//! Orchestrates one timed quiz session: walk the problem set in order,
//! racing each wait for an answer against a single session-wide
//! deadline, and stop the moment the set is exhausted or the deadline
//! fires.
//!
//! The deadline is deliberately global. One `sleep` is created when the
//! session starts and re-polled across iterations, so a slow first
//! answer eats into the time available for every later one. Creating a
//! fresh timer per problem would change the game entirely.

use crate::ports::answer_source::AnswerSource;
use crate::ports::observer::{NoObserver, SessionObserver};
use drill_domain::{ProblemSet, SessionOutcome, SessionReport};
use rand::seq::SliceRandom;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur when starting a session
///
/// Nothing that happens mid-session is an error: wrong answers simply
/// don't count, and deadline expiry is a normal terminal state. Only a
/// configuration-level mistake is surfaced.
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error("Session deadline must be greater than zero")]
    InvalidDeadline,
}

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// The problems to present, in order
    pub problems: ProblemSet,
    /// Session-wide deadline (must be > 0)
    pub deadline: Duration,
}

impl RunSessionInput {
    pub fn new(problems: impl Into<ProblemSet>, deadline: Duration) -> Self {
        Self {
            problems: problems.into(),
            deadline,
        }
    }

    /// Randomize the presentation order
    pub fn shuffled(self) -> Self {
        self.shuffled_with(&mut rand::rng())
    }

    /// Randomize the presentation order with a caller-supplied RNG
    pub fn shuffled_with<R: rand::Rng>(mut self, rng: &mut R) -> Self {
        let mut problems = self.problems.into_inner();
        problems.shuffle(rng);
        self.problems = ProblemSet::new(problems);
        self
    }
}

/// Use case for running a deadline-bounded quiz session
///
/// Generic over the [`AnswerSource`] port; the production adapter wraps
/// a background stdin reader, tests script the answers directly.
///
/// The use case owns a [`CancellationToken`] that it cancels on every
/// terminal path. Hand a clone of it to whatever feeds the answer
/// source, and the feeder is shut down the moment the session ends —
/// no reader task outlives the quiz.
pub struct RunSessionUseCase<S: AnswerSource> {
    source: S,
    cancel: CancellationToken,
}

impl<S: AnswerSource> RunSessionUseCase<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cancel: CancellationToken::new(),
        }
    }

    /// Use an externally created cancellation token
    ///
    /// The token is cancelled when the session reaches a terminal state,
    /// so the same token can be shared with the input-producing task.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// The token cancelled when the session ends
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for a start signal: one line, contents ignored
    ///
    /// The deadline is created in [`execute`](Self::execute), so time
    /// spent waiting here is free — the clock only starts once the user
    /// says they are ready. Returns `false` if the input stream closed
    /// before a line arrived (the session will then end immediately
    /// with a zero score).
    pub async fn wait_for_start(&mut self) -> bool {
        self.source.next_answer().await.is_some()
    }

    /// Execute the session without presentation
    pub async fn execute(
        &mut self,
        input: RunSessionInput,
    ) -> Result<SessionReport, RunSessionError> {
        self.execute_with_observer(input, &NoObserver).await
    }

    /// Execute the session, presenting prompts through the observer
    pub async fn execute_with_observer(
        &mut self,
        input: RunSessionInput,
        observer: &dyn SessionObserver,
    ) -> Result<SessionReport, RunSessionError> {
        if input.deadline.is_zero() {
            return Err(RunSessionError::InvalidDeadline);
        }

        let total = input.problems.len();
        info!(
            "Starting session: {} problems, deadline {:?}",
            total, input.deadline
        );

        // One timer for the whole session. Pinned so the same sleep is
        // re-polled across loop iterations instead of being recreated.
        let deadline = tokio::time::sleep(input.deadline);
        tokio::pin!(deadline);

        let mut correct = 0;
        let mut presented = 0;
        let mut outcome = SessionOutcome::Exhausted;

        for (index, problem) in input.problems.iter().enumerate() {
            observer.on_prompt(index, problem);
            presented += 1;

            tokio::select! {
                // Biased so an already-expired deadline always wins the
                // race against a buffered answer.
                biased;

                _ = &mut deadline => {
                    debug!("Deadline fired at problem {}", index);
                    observer.on_deadline();
                    outcome = SessionOutcome::DeadlineExpired;
                    break;
                }

                answer = self.source.next_answer() => {
                    match answer {
                        Some(answer) => {
                            let is_correct = problem.is_correct(&answer);
                            if is_correct {
                                correct += 1;
                            }
                            debug!(
                                "Problem {} answered ({})",
                                index,
                                if is_correct { "correct" } else { "wrong" }
                            );
                            observer.on_answer(index, is_correct);
                        }
                        None => {
                            debug!("Answer stream closed at problem {}", index);
                            outcome = SessionOutcome::InputClosed;
                            break;
                        }
                    }
                }
            }
        }

        // Terminal state reached: stop the input producer.
        self.cancel.cancel();

        let report = SessionReport::new(correct, presented, total, outcome);
        info!("Session over: {} ({:?})", report, report.outcome);
        Ok(report)
    }
}

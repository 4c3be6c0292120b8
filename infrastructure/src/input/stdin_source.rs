//! Background input producer feeding the answer-source port
//!
//! A spawned task reads the input stream one line at a time and forwards
//! each line through a capacity-1 channel. The single slot is the only
//! buffering between the keyboard and the driver: a second answer blocks
//! the producer until the driver consumes the first, so no typed answer
//! is ever silently dropped. An answer typed before the first prompt
//! appears sits in the slot and still satisfies that prompt.
//!
//! The producer owns no shutdown logic of its own; it stops when the
//! shared [`CancellationToken`] is cancelled (the driver cancels it on
//! every terminal path), when the stream reaches EOF, or when the
//! receiving side is dropped.

use async_trait::async_trait;
use drill_application::AnswerSource;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Answer source backed by a background line reader
///
/// Production use wraps stdin; tests feed any `AsyncBufRead`.
pub struct StdinAnswerSource {
    rx: mpsc::Receiver<String>,
    reader_task: JoinHandle<()>,
}

impl StdinAnswerSource {
    /// Spawn a producer reading from the process stdin
    pub fn spawn(token: CancellationToken) -> Self {
        Self::spawn_from(BufReader::new(tokio::io::stdin()), token)
    }

    /// Spawn a producer reading from an arbitrary buffered stream
    pub fn spawn_from<R>(reader: R, token: CancellationToken) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        let reader_task = tokio::spawn(read_loop(reader, tx, token));
        Self { rx, reader_task }
    }

    /// Wait for the producer task to finish (test hook)
    #[cfg(test)]
    async fn join(mut self) {
        let _ = (&mut self.reader_task).await;
    }
}

impl Drop for StdinAnswerSource {
    fn drop(&mut self) {
        // The task also exits on its own once it observes the closed
        // channel or the cancelled token; aborting just skips the wait
        // on a reader blocked in next_line.
        self.reader_task.abort();
    }
}

#[async_trait]
impl AnswerSource for StdinAnswerSource {
    async fn next_answer(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

/// Producer loop: read a line, publish it, repeat until cancelled
async fn read_loop<R>(reader: R, tx: mpsc::Sender<String>, token: CancellationToken)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Input producer cancelled");
                break;
            }
            line = lines.next_line() => line,
        };

        match line {
            Ok(Some(line)) => {
                // Full slot: wait here until the driver consumes the
                // buffered answer, unless the session ends first.
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("Input producer cancelled");
                        break;
                    }
                    sent = tx.send(line) => {
                        if sent.is_err() {
                            debug!("Answer receiver dropped, stopping producer");
                            break;
                        }
                    }
                }
            }
            Ok(None) => {
                debug!("Input stream closed");
                break;
            }
            Err(e) => {
                // Transient read failure: report and keep reading
                warn!("Failed to read input line: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_application::{RunSessionInput, RunSessionUseCase};
    use drill_domain::{Problem, ProblemSet, SessionOutcome};
    use std::time::Duration;

    #[tokio::test]
    async fn test_lines_forwarded_in_order() {
        let token = CancellationToken::new();
        let mut source = StdinAnswerSource::spawn_from(&b"4\nParis\n"[..], token);

        assert_eq!(source.next_answer().await.as_deref(), Some("4"));
        assert_eq!(source.next_answer().await.as_deref(), Some("Paris"));
        assert_eq!(source.next_answer().await, None);
    }

    #[tokio::test]
    async fn test_no_answer_lost_under_backpressure() {
        // Three lines arrive before the consumer reads anything; the
        // single slot blocks the producer rather than dropping lines.
        let token = CancellationToken::new();
        let mut source = StdinAnswerSource::spawn_from(&b"a\nb\nc\n"[..], token);

        tokio::task::yield_now().await;

        assert_eq!(source.next_answer().await.as_deref(), Some("a"));
        assert_eq!(source.next_answer().await.as_deref(), Some("b"));
        assert_eq!(source.next_answer().await.as_deref(), Some("c"));
        assert_eq!(source.next_answer().await, None);
    }

    #[tokio::test]
    async fn test_answer_typed_before_first_prompt_is_kept() {
        let token = CancellationToken::new();
        let mut source = StdinAnswerSource::spawn_from(&b"early\n"[..], token);

        // Give the producer time to park the line in the slot
        tokio::task::yield_now().await;

        assert_eq!(source.next_answer().await.as_deref(), Some("early"));
    }

    #[tokio::test]
    async fn test_cancellation_stops_producer() {
        // A pending stream: the producer sits in next_line until the
        // token fires.
        let (_writer, read_half) = tokio::io::duplex(64);
        let token = CancellationToken::new();
        let source = StdinAnswerSource::spawn_from(BufReader::new(read_half), token.clone());

        token.cancel();
        source.join().await;
    }

    #[tokio::test]
    async fn test_cancellation_unblocks_full_slot() {
        // Producer has one line buffered and a second in flight; nobody
        // consumes. Cancelling must still end the task.
        let token = CancellationToken::new();
        let source = StdinAnswerSource::spawn_from(&b"a\nb\n"[..], token.clone());

        tokio::task::yield_now().await;
        token.cancel();
        source.join().await;
    }

    #[tokio::test]
    async fn test_start_gate_wired_to_line_producer() {
        // First line is the enter-to-start keystroke; the answers that
        // follow still line up with the problems.
        let problems = ProblemSet::new(vec![
            Problem::new("2+2", "4").unwrap(),
            Problem::new("capital of France", "Paris").unwrap(),
        ]);

        let token = CancellationToken::new();
        let source = StdinAnswerSource::spawn_from(&b"\n4\nParis\n"[..], token.clone());
        let mut use_case = RunSessionUseCase::new(source).with_cancellation(token);

        assert!(use_case.wait_for_start().await);

        let input = RunSessionInput::new(problems, Duration::from_secs(10));
        let report = use_case.execute(input).await.unwrap();

        assert_eq!(report.correct, 2);
        assert_eq!(report.outcome, SessionOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_session_wired_to_line_producer() {
        let problems = ProblemSet::new(vec![
            Problem::new("2+2", "4").unwrap(),
            Problem::new("capital of France", "Paris").unwrap(),
        ]);

        let token = CancellationToken::new();
        let source = StdinAnswerSource::spawn_from(&b"4\nParis\n"[..], token.clone());
        let mut use_case = RunSessionUseCase::new(source).with_cancellation(token.clone());

        let input = RunSessionInput::new(problems, Duration::from_secs(10));
        let report = use_case.execute(input).await.unwrap();

        assert_eq!(report.correct, 2);
        assert_eq!(report.outcome, SessionOutcome::Exhausted);
        assert!(token.is_cancelled());
    }
}

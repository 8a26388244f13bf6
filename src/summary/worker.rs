//! Background summary generation.
//!
//! A summary is fire-and-forget: [`SummaryWorker::spawn`] moves the request to
//! its own thread and returns immediately. The caller polls the worker for a
//! [`SummaryEvent`] whenever convenient; dropping the worker simply discards
//! the result.

use super::{SummaryError, SummaryProvider, SummaryRequest};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use rust_i18n::t;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Outcome of a summary request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryEvent {
    /// The provider returned text
    Completed(String),
    /// The provider failed, panicked or the worker went away
    Failed {
        /// Localized message for display
        message: String,
        /// Underlying error text
        detail: String,
    },
}

impl SummaryEvent {
    fn failed(error: &SummaryError) -> Self {
        SummaryEvent::Failed {
            message: t!("summary_error").to_string(),
            detail: error.to_string(),
        }
    }
}

/// Handle to a summary running in the background
///
/// Exactly one event is delivered per worker. A worker thread that ends
/// without sending is reported as [`SummaryEvent::Failed`].
pub struct SummaryWorker {
    receiver: Receiver<SummaryEvent>,
    delivered: AtomicBool,
}

impl SummaryWorker {
    /// Start generating a summary on a background thread
    pub fn spawn(provider: Arc<dyn SummaryProvider>, request: SummaryRequest) -> Self {
        let (sender, receiver) = bounded(1);

        std::thread::spawn(move || {
            tracing::debug!(
                "Requesting summary from {} with {} of {} record(s)",
                request.model.id(),
                request.sample.len(),
                request.total_records
            );

            let outcome = catch_unwind(AssertUnwindSafe(|| {
                request
                    .prompt()
                    .and_then(|prompt| provider.generate(request.model, &prompt))
            }))
            .unwrap_or_else(|panic| Err(SummaryError::Provider(panic_message(&*panic))));

            let event = match outcome {
                Ok(text) if text.trim().is_empty() => {
                    SummaryEvent::Completed(t!("summary_empty").to_string())
                }
                Ok(text) => SummaryEvent::Completed(text),
                Err(e) => {
                    tracing::warn!("Summary generation failed: {}", e);
                    SummaryEvent::failed(&e)
                }
            };

            // The receiver may be gone; the result is simply dropped then.
            let _ = sender.send(event);
        });

        Self::from_receiver(receiver)
    }

    fn from_receiver(receiver: Receiver<SummaryEvent>) -> Self {
        Self {
            receiver,
            delivered: AtomicBool::new(false),
        }
    }

    /// Take the result if it is ready
    ///
    /// `None` means the summary is still running, or its event was already taken.
    pub fn try_recv(&self) -> Option<SummaryEvent> {
        match self.receiver.try_recv() {
            Ok(event) => self.deliver(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.deliver_disconnected(),
        }
    }

    /// Wait up to `timeout` for the result
    ///
    /// `None` means the timeout elapsed, or the event was already taken.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<SummaryEvent> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => self.deliver(event),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => self.deliver_disconnected(),
        }
    }

    /// Whether the event has been handed out
    pub fn is_finished(&self) -> bool {
        self.delivered.load(Ordering::Acquire)
    }

    fn deliver(&self, event: SummaryEvent) -> Option<SummaryEvent> {
        self.delivered.store(true, Ordering::Release);
        Some(event)
    }

    fn deliver_disconnected(&self) -> Option<SummaryEvent> {
        if self.delivered.swap(true, Ordering::AcqRel) {
            return None;
        }
        tracing::warn!("Summary worker exited without a result");
        Some(SummaryEvent::failed(&SummaryError::Disconnected))
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    let text = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    format!("provider panicked: {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{MockSummaryProvider, SummaryError, SummaryModel};
    use crate::types::{fields, Record};
    use serial_test::serial;
    use std::sync::atomic::AtomicUsize;

    fn request() -> SummaryRequest {
        let records = vec![Record::new().with(fields::SUPPLIER_ID, "S1")];
        SummaryRequest::new(&records, "Summarize", SummaryModel::Gemini3Flash, 50).unwrap()
    }

    #[test]
    #[serial]
    fn test_completed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut provider = MockSummaryProvider::new();
        provider
            .expect_generate()
            .withf(|model, prompt| {
                *model == SummaryModel::Gemini3Flash && prompt.starts_with("Summarize")
            })
            .returning(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("Two suppliers dominate.".to_string())
            });

        let worker = SummaryWorker::spawn(Arc::new(provider), request());
        let event = worker.wait_timeout(Duration::from_secs(5));
        assert_eq!(
            event,
            Some(SummaryEvent::Completed("Two suppliers dominate.".to_string()))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(worker.is_finished());
        assert_eq!(worker.try_recv(), None);
    }

    #[test]
    #[serial]
    fn test_failure_is_reported_not_raised() {
        crate::i18n::set_language(crate::i18n::Language::English);
        let mut provider = MockSummaryProvider::new();
        provider
            .expect_generate()
            .returning(|_, _| Err(SummaryError::Provider("invalid API key".to_string())));

        let worker = SummaryWorker::spawn(Arc::new(provider), request());
        match worker.wait_timeout(Duration::from_secs(5)) {
            Some(SummaryEvent::Failed { message, detail }) => {
                assert!(message.contains("API key"));
                assert!(detail.contains("invalid API key"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_empty_text_replaced() {
        crate::i18n::set_language(crate::i18n::Language::English);
        let mut provider = MockSummaryProvider::new();
        provider.expect_generate().returning(|_, _| Ok("  ".to_string()));

        let worker = SummaryWorker::spawn(Arc::new(provider), request());
        assert_eq!(
            worker.wait_timeout(Duration::from_secs(5)),
            Some(SummaryEvent::Completed("No summary generated.".to_string()))
        );
    }

    #[test]
    #[serial]
    fn test_panicking_provider_reports_failure() {
        crate::i18n::set_language(crate::i18n::Language::English);
        let mut provider = MockSummaryProvider::new();
        provider
            .expect_generate()
            .returning(|_, _| panic!("connection pool poisoned"));

        let worker = SummaryWorker::spawn(Arc::new(provider), request());
        match worker.wait_timeout(Duration::from_secs(5)) {
            Some(SummaryEvent::Failed { message, detail }) => {
                assert!(message.contains("API key"));
                assert!(detail.contains("connection pool poisoned"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(worker.try_recv(), None);
    }

    #[test]
    #[serial]
    fn test_vanished_worker_reports_failure_once() {
        crate::i18n::set_language(crate::i18n::Language::English);
        let (sender, receiver) = bounded::<SummaryEvent>(1);
        drop(sender);

        let worker = SummaryWorker::from_receiver(receiver);
        match worker.try_recv() {
            Some(SummaryEvent::Failed { detail, .. }) => {
                assert_eq!(detail, SummaryError::Disconnected.to_string());
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(worker.is_finished());
        assert_eq!(worker.try_recv(), None);
        assert_eq!(worker.wait_timeout(Duration::from_millis(10)), None);
    }

    #[test]
    fn test_pending_worker_is_not_a_failure() {
        let (_sender, receiver) = bounded::<SummaryEvent>(1);
        let worker = SummaryWorker::from_receiver(receiver);
        assert_eq!(worker.try_recv(), None);
        assert_eq!(worker.wait_timeout(Duration::from_millis(10)), None);
        assert!(!worker.is_finished());
    }
}

//! Client-side chat session.
//!
//! Owns the append-only message log and the busy flag, the only
//! concurrency control on the client: at most one relay call is in
//! flight per session, and concurrent submissions are rejected rather
//! than queued. State is observed through snapshots (model to view);
//! nothing here is global.

pub mod relay;

pub use relay::HttpRelay;

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::search::{SearchError, VideoResult};

/// Fixed apology appended for any failed submission.
pub const APOLOGY: &str = "I couldn't find suitable videos. Try rephrasing your question.";

/// One entry in the conversation log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    /// Text submitted by the user.
    User {
        /// The submitted text, trimmed.
        text: String,
    },
    /// Response produced for a submission.
    Assistant {
        /// Lead-in text shown above the results.
        text: String,
        /// Ranked videos to embed; empty on error.
        videos: Vec<VideoResult>,
        /// True when the submission failed.
        is_error: bool,
    },
}

/// Abstraction over the search relay so the session can be driven
/// against a mock in tests.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos matching `query`.
    async fn search(&self, query: &str) -> Result<Vec<VideoResult>, SearchError>;
}

/// Outcome of a [`ChatSession::submit`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// A relay call was made and a response appended to the log.
    Completed,
    /// Input was blank or a request was already in flight.
    Ignored,
}

#[derive(Default)]
struct SessionState {
    messages: Vec<Message>,
    busy: bool,
}

/// A single client conversation.
///
/// The log is append-only: messages are never edited or removed, and
/// the whole session is discarded when the client goes away.
pub struct ChatSession<R> {
    relay: R,
    state: Mutex<SessionState>,
}

impl<R: VideoSearch> ChatSession<R> {
    /// Create an empty session backed by the given relay.
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submit user text.
    ///
    /// No-op when the text trims empty or a request is already in
    /// flight. Otherwise appends the user message, calls the relay
    /// exactly once, and appends the assistant response. The busy flag
    /// is cleared on both the success and the failure path.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let query = text.trim().to_string();
        if query.is_empty() {
            return SubmitOutcome::Ignored;
        }

        {
            let mut state = self.lock();
            if state.busy {
                return SubmitOutcome::Ignored;
            }
            state.busy = true;
            state.messages.push(Message::User {
                text: query.clone(),
            });
        }

        // Lock is not held across the await.
        let result = self.relay.search(&query).await;

        let mut state = self.lock();
        match result {
            Ok(videos) => state.messages.push(Message::Assistant {
                text: format!("Top videos for \"{query}\" (sorted by views):"),
                videos,
                is_error: false,
            }),
            Err(err) => {
                tracing::warn!("submission failed: {err}");
                state.messages.push(Message::Assistant {
                    text: APOLOGY.to_string(),
                    videos: Vec::new(),
                    is_error: true,
                });
            }
        }
        state.busy = false;

        SubmitOutcome::Completed
    }

    /// Snapshot of the log in append order.
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.lock().messages.clone()
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    #[derive(Clone, Default)]
    struct MockRelay {
        calls: Arc<AtomicUsize>,
        fail: bool,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl VideoSearch for MockRelay {
        async fn search(&self, _query: &str) -> Result<Vec<VideoResult>, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                return Err(SearchError::UpstreamStatus {
                    status: 500,
                    detail: "boom".to_string(),
                });
            }
            Ok(vec![VideoResult {
                id: "abc123".to_string(),
                title: "Gravity Explained".to_string(),
                description: String::new(),
                thumbnail_url: String::new(),
            }])
        }
    }

    #[tokio::test]
    async fn test_successful_submit_appends_user_then_assistant() {
        let relay = MockRelay::default();
        let session = ChatSession::new(relay);

        let outcome = session.submit("what is gravity").await;
        assert_eq!(outcome, SubmitOutcome::Completed);
        assert!(!session.is_busy());

        let log = session.messages();
        assert_eq!(log.len(), 2);
        assert_eq!(
            log[0],
            Message::User {
                text: "what is gravity".to_string()
            }
        );
        match &log[1] {
            Message::Assistant {
                text,
                videos,
                is_error,
            } => {
                assert_eq!(text, "Top videos for \"what is gravity\" (sorted by views):");
                assert_eq!(videos.len(), 1);
                assert!(!is_error);
            }
            Message::User { .. } => panic!("expected assistant message"),
        }
    }

    #[tokio::test]
    async fn test_failed_submit_appends_apology() {
        let relay = MockRelay {
            fail: true,
            ..MockRelay::default()
        };
        let session = ChatSession::new(relay);

        session.submit("what is gravity").await;
        assert!(!session.is_busy());

        let log = session.messages();
        assert_eq!(log.len(), 2);
        match &log[1] {
            Message::Assistant {
                text,
                videos,
                is_error,
            } => {
                assert_eq!(text, APOLOGY);
                assert!(videos.is_empty());
                assert!(is_error);
            }
            Message::User { .. } => panic!("expected assistant message"),
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let relay = MockRelay::default();
        let calls = Arc::clone(&relay.calls);
        let session = ChatSession::new(relay);

        assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
        assert_eq!(session.submit("   \n").await, SubmitOutcome::Ignored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_a_no_op() {
        let gate = Arc::new(Notify::new());
        let relay = MockRelay {
            gate: Some(Arc::clone(&gate)),
            ..MockRelay::default()
        };
        let calls = Arc::clone(&relay.calls);
        let session = Arc::new(ChatSession::new(relay));

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit("what is gravity").await })
        };

        // Let the first submission reach the relay and block on the gate.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert!(session.is_busy());

        assert_eq!(session.submit("second").await, SubmitOutcome::Ignored);

        gate.notify_one();
        let outcome = first.await.expect("task completes");
        assert_eq!(outcome, SubmitOutcome::Completed);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!session.is_busy());
        // Only the first submission reached the log.
        assert_eq!(session.messages().len(), 2);
    }
}

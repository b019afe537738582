//! # Resource loader state
//!
//! [`LoaderState`] is the view-side half of every read: the last snapshot the
//! page rendered, whether a request is in flight, and the last error.
//!
//! A read is split into [`begin`](LoaderState::begin) and
//! [`settle`](LoaderState::settle) so it can be driven from a UI task that must
//! not hold a borrow across the `await`. Each `begin` hands out a [`Ticket`];
//! only the most recent ticket may settle. A slow response that arrives after
//! a newer request was started is dropped instead of overwriting fresher
//! state.
//!
//! On success the snapshot is replaced verbatim. On failure the previous
//! snapshot stays and the error is recorded. Nothing is retried.

use crate::error::ClientError;

/// Handle for one in-flight read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ClientError>,
    generation: u64,
}

impl<T> Default for LoaderState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> LoaderState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a read. Any ticket handed out before this one becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply the outcome of a read. Returns `false` when the ticket was stale
    /// and the outcome was discarded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, ClientError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Load failed: {e}");
                self.error = Some(e);
            }
        }
        true
    }

    /// `begin`, await `fetch`, `settle` in one call.
    #[cfg(test)]
    pub(crate) async fn run<F>(&mut self, fetch: F) -> bool
    where
        F: std::future::Future<Output = Result<T, ClientError>>,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.settle(ticket, result)
    }

    /// The snapshot, if one has been loaded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// True until the first read settles, successfully or not.
    pub fn is_pending(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    /// Whether a page should show its loading placeholder: a read is in
    /// flight, or none has settled yet (including before the first `begin`).
    pub fn is_loading(&self) -> bool {
        self.loading || self.is_pending()
    }
}

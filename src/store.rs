//! Resource state machine
//!
//! Every store slice wraps its data in a [`Resource`]. A request is started with
//! [`Resource::begin`], which hands back a [`Ticket`], and settled with
//! [`Resource::fulfil`] or [`Resource::reject`].
//!
//! Requests are sequenced per channel: beginning a new request on a channel
//! supersedes any request already in flight on it, and the superseded request's
//! outcome is discarded when it eventually arrives. `loading` stays true while
//! any channel has a request in flight.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Outcome of the most recent request on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No request has been made yet.
    #[default]
    Idle,

    /// At least one request is in flight.
    Pending,

    /// The last settled request succeeded.
    Fulfilled,

    /// The last settled request failed.
    Rejected,
}

const NOT_FOUND: u16 = 404;

/// Normalized request failure kept in a store's `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    /// HTTP status code, when the server answered.
    pub status: Option<u16>,

    /// Human-readable message, server-provided when available.
    pub message: String,
}

impl Failure {
    /// Failure without a server status (transport or decoding problems).
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Failure reported by the server with the given status code.
    #[must_use]
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Returns true if the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Some(NOT_FOUND)
    }
}

/// Handle for a request started with [`Resource::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    channel: K,
    seq: u64,
}

impl<K: Copy> Ticket<K> {
    /// Channel the request writes to.
    pub fn channel(&self) -> K {
        self.channel
    }
}

/// Server-derived data plus its request lifecycle.
#[derive(Debug, Clone)]
pub struct Resource<T, K = ()> {
    data: T,
    outcome: Status,
    error: Option<Failure>,
    in_flight: FxHashMap<K, u64>,
    next_seq: u64,
}

impl<T: Default, K> Default for Resource<T, K> {
    fn default() -> Self {
        Self {
            data: T::default(),
            outcome: Status::Idle,
            error: None,
            in_flight: FxHashMap::default(),
            next_seq: 0,
        }
    }
}

impl<T, K> Resource<T, K>
where
    K: Copy + Eq + Hash,
{
    /// Create an idle resource holding `data`.
    pub fn new(data: T) -> Self {
        Self {
            data,
            outcome: Status::Idle,
            error: None,
            in_flight: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Start a request on `channel`: marks the resource as loading and clears
    /// any previous error.
    pub fn begin(&mut self, channel: K) -> Ticket<K> {
        let seq = self.next_seq;

        self.next_seq += 1;
        self.in_flight.insert(channel, seq);
        self.error = None;

        Ticket { channel, seq }
    }

    /// Settle a request successfully, applying `apply` to the data.
    ///
    /// Returns `false`, leaving the data untouched, if the ticket was
    /// superseded by a newer request on the same channel.
    pub fn fulfil(&mut self, ticket: Ticket<K>, apply: impl FnOnce(&mut T)) -> bool {
        if !self.settle(ticket) {
            return false;
        }

        apply(&mut self.data);
        self.outcome = Status::Fulfilled;

        true
    }

    /// Settle a request with a failure. Data is left untouched.
    ///
    /// Returns `false` if the ticket was superseded.
    pub fn reject(&mut self, ticket: Ticket<K>, failure: Failure) -> bool {
        if !self.settle(ticket) {
            return false;
        }

        self.error = Some(failure);
        self.outcome = Status::Rejected;

        true
    }

    /// Returns true if a request on `channel` is in flight.
    pub fn is_in_flight(&self, channel: K) -> bool {
        self.in_flight.contains_key(&channel)
    }

    fn settle(&mut self, ticket: Ticket<K>) -> bool {
        match self.in_flight.get(&ticket.channel) {
            Some(&seq) if seq == ticket.seq => {
                self.in_flight.remove(&ticket.channel);
                true
            }
            _ => false,
        }
    }
}

impl<T, K> Resource<T, K> {
    /// Current data.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Apply a local, synchronous change (e.g. clearing a selection).
    pub fn update(&mut self, apply: impl FnOnce(&mut T)) {
        apply(&mut self.data);
    }

    /// Returns true while any request is in flight.
    pub fn loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Error from the last rejected request, if not cleared since.
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    /// Dismiss the current error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Lifecycle status.
    pub fn status(&self) -> Status {
        if self.loading() {
            Status::Pending
        } else {
            self.outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Channel {
        List,
        Current,
    }

    #[test]
    fn only_404_counts_as_not_found() {
        assert!(Failure::with_status(404, "Restaurant not found").is_not_found());
        assert!(!Failure::with_status(500, "boom").is_not_found());
        assert!(!Failure::new("connection refused").is_not_found());
    }

    #[test]
    fn new_resource_is_idle() {
        let resource: Resource<Vec<u32>> = Resource::default();

        assert_eq!(resource.status(), Status::Idle);
        assert!(!resource.loading());
        assert!(resource.error().is_none());
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        let mut resource: Resource<Vec<u32>> = Resource::default();

        let ticket = resource.begin(());
        resource.reject(ticket, Failure::new("boom"));
        assert!(resource.error().is_some());

        resource.begin(());

        assert!(resource.loading());
        assert_eq!(resource.status(), Status::Pending);
        assert!(resource.error().is_none());
    }

    #[test]
    fn fulfil_replaces_data() {
        let mut resource = Resource::new(vec![1]);

        let ticket = resource.begin(());
        let applied = resource.fulfil(ticket, |data| *data = vec![2, 3]);

        assert!(applied);
        assert_eq!(resource.data(), &vec![2, 3]);
        assert_eq!(resource.status(), Status::Fulfilled);
        assert!(!resource.loading());
    }

    #[test]
    fn reject_keeps_prior_data_and_records_error() {
        let mut resource = Resource::new(vec![1, 2]);

        let ticket = resource.begin(());
        resource.reject(ticket, Failure::with_status(500, "server exploded"));

        assert_eq!(resource.data(), &vec![1, 2]);
        assert_eq!(resource.status(), Status::Rejected);
        assert!(!resource.loading());
        assert_eq!(
            resource.error(),
            Some(&Failure::with_status(500, "server exploded"))
        );
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut resource = Resource::new(0_u32);

        let older = resource.begin(());
        let newer = resource.begin(());

        assert!(resource.fulfil(newer, |data| *data = 2));
        assert!(!resource.fulfil(older, |data| *data = 1));

        assert_eq!(*resource.data(), 2);
        assert!(!resource.loading());
    }

    #[test]
    fn superseded_failure_does_not_surface() {
        let mut resource = Resource::new(0_u32);

        let older = resource.begin(());
        let newer = resource.begin(());

        assert!(!resource.reject(older, Failure::new("late failure")));
        assert!(resource.error().is_none());
        assert!(resource.loading(), "newer request is still in flight");

        resource.fulfil(newer, |data| *data = 5);

        assert_eq!(*resource.data(), 5);
    }

    #[test]
    fn channels_are_sequenced_independently() {
        let mut resource: Resource<(u32, u32), Channel> = Resource::new((0, 0));

        let list = resource.begin(Channel::List);
        let current = resource.begin(Channel::Current);

        assert!(resource.fulfil(current, |data| data.1 = 9));
        assert!(resource.loading(), "list request is still in flight");
        assert!(resource.is_in_flight(Channel::List));

        assert!(resource.fulfil(list, |data| data.0 = 4));

        assert_eq!(*resource.data(), (4, 9));
        assert!(!resource.loading());
    }

    #[test]
    fn clear_error_dismisses_failure() {
        let mut resource: Resource<()> = Resource::default();

        let ticket = resource.begin(());
        resource.reject(ticket, Failure::new("nope"));
        resource.clear_error();

        assert!(resource.error().is_none());
    }
}

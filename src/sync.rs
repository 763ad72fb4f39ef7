//! Saved-Flag Synchronizer
//!
//! Serializes save/unfavorite toggles so the flag that ends up persisted is
//! always the last one the user asked for. At most one PATCH is in flight;
//! toggles arriving while one is pending coalesce into a single trailing
//! PATCH, and responses for superseded requests are discarded.

/// Decision returned by [`SaveSync::request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Issue a PATCH for this sequence number and flag now
    Send { seq: u64, saved: bool },
    /// A PATCH is already in flight; the new intent is queued behind it
    Queued,
}

/// Decision returned by [`SaveSync::complete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Response belongs to a superseded request; drop it
    Stale,
    /// The persisted flag matches the latest intent
    Settled { saved: bool },
    /// Intent changed while the PATCH was in flight; send again
    Resend { seq: u64, saved: bool },
}

#[derive(Debug, Default)]
pub struct SaveSync {
    next_seq: u64,
    in_flight: Option<InFlight>,
    desired: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    seq: u64,
    saved: bool,
}

impl SaveSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the next toggle would set: the opposite of the latest pending
    /// intent, or of the persisted flag when nothing is pending.
    pub fn next_flag(&self, persisted: bool) -> bool {
        !self.desired.unwrap_or(persisted)
    }

    /// Record a toggle intent
    pub fn request(&mut self, saved: bool) -> Request {
        self.desired = Some(saved);
        match self.in_flight {
            Some(_) => Request::Queued,
            None => {
                let seq = self.bump();
                self.in_flight = Some(InFlight { seq, saved });
                Request::Send { seq, saved }
            }
        }
    }

    /// Settle the response for `seq`
    pub fn complete(&mut self, seq: u64) -> Completion {
        let Some(current) = self.in_flight else {
            return Completion::Stale;
        };
        if current.seq != seq {
            return Completion::Stale;
        }
        self.in_flight = None;
        match self.desired {
            Some(want) if want != current.saved => {
                let next = self.bump();
                self.in_flight = Some(InFlight { seq: next, saved: want });
                Completion::Resend { seq: next, saved: want }
            }
            _ => {
                self.desired = None;
                Completion::Settled { saved: current.saved }
            }
        }
    }

    /// Abandon the in-flight PATCH after a failure so later toggles can run
    pub fn abort(&mut self, seq: u64) {
        if self.in_flight.map(|flight| flight.seq) == Some(seq) {
            self.in_flight = None;
            self.desired = None;
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_toggle_sends_immediately() {
        let mut sync = SaveSync::new();
        assert_eq!(sync.request(true), Request::Send { seq: 1, saved: true });
        assert_eq!(sync.complete(1), Completion::Settled { saved: true });
    }

    #[test]
    fn rapid_double_toggle_persists_the_last_intent() {
        let mut sync = SaveSync::new();
        // persisted flag starts false; first click wants true
        assert_eq!(sync.next_flag(false), true);
        assert_eq!(sync.request(true), Request::Send { seq: 1, saved: true });
        // second click lands before the response and flips the intent back
        assert_eq!(sync.next_flag(false), false);
        assert_eq!(sync.request(false), Request::Queued);
        // settling the first PATCH issues a trailing one for the latest intent
        assert_eq!(sync.complete(1), Completion::Resend { seq: 2, saved: false });
        assert_eq!(sync.complete(2), Completion::Settled { saved: false });
    }

    #[test]
    fn toggling_back_to_the_in_flight_value_needs_no_resend() {
        let mut sync = SaveSync::new();
        sync.request(true);
        sync.request(false);
        sync.request(true);
        assert_eq!(sync.complete(1), Completion::Settled { saved: true });
    }

    #[test]
    fn superseded_responses_are_discarded() {
        let mut sync = SaveSync::new();
        sync.request(true);
        sync.request(false);
        assert_eq!(sync.complete(1), Completion::Resend { seq: 2, saved: false });
        // a late duplicate for the first request must not settle anything
        assert_eq!(sync.complete(1), Completion::Stale);
        assert_eq!(sync.complete(2), Completion::Settled { saved: false });
        assert_eq!(sync.complete(2), Completion::Stale);
    }

    #[test]
    fn abort_unblocks_future_toggles() {
        let mut sync = SaveSync::new();
        sync.request(true);
        sync.abort(1);
        assert_eq!(sync.request(true), Request::Send { seq: 2, saved: true });
    }

    #[test]
    fn abort_of_a_superseded_request_is_ignored() {
        let mut sync = SaveSync::new();
        sync.request(true);
        sync.request(false);
        assert_eq!(sync.complete(1), Completion::Resend { seq: 2, saved: false });
        sync.abort(1);
        assert_eq!(sync.complete(2), Completion::Settled { saved: false });
    }
}

//! Main-thread guard for requests to the seed worker.
//!
//! The worker protocol carries no correlation identifiers, so replies can
//! only be matched to requests by there being at most one outstanding
//! exchange. `SeedClient` makes that single-flight rule an enforced
//! contract instead of an implicit assumption: a second request while one
//! is in flight is rejected with [`RequestError::Busy`].

use thiserror::Error;

#[cfg(test)]
#[path = "seed_client_test.rs"]
mod seed_client_test;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("a seed request is already in flight")]
    Busy,
}

/// Single-flight request guard. One per worker handle.
#[derive(Debug, Default)]
pub struct SeedClient {
    in_flight: bool,
}

impl SeedClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claim the in-flight slot before posting a request to the worker.
    pub fn begin(&mut self) -> Result<(), RequestError> {
        if self.in_flight {
            log::warn!("seed request rejected: previous request still in flight");
            return Err(RequestError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Release the slot when the worker's reply arrives.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

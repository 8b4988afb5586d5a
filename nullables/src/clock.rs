//! Nullable clock: deterministic block time for testing.

use std::cell::Cell;

use atomone_types::Timestamp;

/// Block time of a test chain.
///
/// Nothing moves unless the test calls [`NullClock::advance`]; each advance
/// is one block, so the height counts how often time moved.
#[derive(Debug)]
pub struct NullClock {
    time: Cell<Timestamp>,
    height: Cell<u64>,
}

impl NullClock {
    pub fn new(genesis_time: Timestamp) -> Self {
        Self {
            time: Cell::new(genesis_time),
            height: Cell::new(0),
        }
    }

    /// Time of the current block.
    pub fn now(&self) -> Timestamp {
        self.time.get()
    }

    pub fn height(&self) -> u64 {
        self.height.get()
    }

    /// Produce the next block, `secs` after the current one.
    pub fn advance(&self, secs: u64) {
        self.time.set(self.time.get().plus_secs(secs));
        self.height.set(self.height.get() + 1);
    }
}

impl Default for NullClock {
    /// Starts at 2023-11-14T22:13:20Z, height 0.
    fn default() -> Self {
        Self::new(Timestamp::new(1_700_000_000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_time_and_height() {
        let clock = NullClock::default();
        let start = clock.now();
        clock.advance(6);
        clock.advance(6);
        assert_eq!(clock.now(), start.plus_secs(12));
        assert_eq!(clock.height(), 2);
    }

    #[test]
    fn test_stands_still_otherwise() {
        let clock = NullClock::new(Timestamp::EPOCH);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.height(), 0);
    }
}

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::task::TaskId;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(err) => {
                warn!(error = %err, "system clock is before the unix epoch");
                0
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(start: i64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

// strict mode bumps a stale reading past the last issued id
#[derive(Debug)]
pub struct IdMinter<C> {
    clock: C,
    strict_monotonic: bool,
    last: Option<i64>,
}

impl<C: Clock> IdMinter<C> {
    pub fn new(clock: C, strict_monotonic: bool) -> Self {
        Self {
            clock,
            strict_monotonic,
            last: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn next_id(&mut self) -> TaskId {
        let reading = self.clock.now_millis();
        let id = match self.last {
            Some(last) if self.strict_monotonic && reading <= last => {
                debug!(reading, last, "clock did not advance; bumping task id");
                last.checked_add(1).unwrap_or_else(|| {
                    warn!(last, "task id space exhausted; reusing the largest id");
                    last
                })
            }
            _ => reading,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, IdMinter, ManualClock, SystemClock};
    use crate::task::TaskId;

    #[test]
    fn strict_minter_never_repeats_within_a_millisecond() {
        let mut minter = IdMinter::new(ManualClock::new(1_000), true);
        assert_eq!(minter.next_id(), TaskId(1_000));
        assert_eq!(minter.next_id(), TaskId(1_001));
        assert_eq!(minter.next_id(), TaskId(1_002));

        minter.clock().set(5_000);
        assert_eq!(minter.next_id(), TaskId(5_000));
    }

    #[test]
    fn strict_minter_survives_clock_going_backwards() {
        let mut minter = IdMinter::new(ManualClock::new(2_000), true);
        assert_eq!(minter.next_id(), TaskId(2_000));
        minter.clock().set(1_500);
        assert_eq!(minter.next_id(), TaskId(2_001));
    }

    #[test]
    fn strict_minter_saturates_at_the_top_of_the_range() {
        let mut minter = IdMinter::new(ManualClock::new(i64::MAX - 1), true);
        assert_eq!(minter.next_id(), TaskId(i64::MAX - 1));
        assert_eq!(minter.next_id(), TaskId(i64::MAX));
        assert_eq!(minter.next_id(), TaskId(i64::MAX));
    }

    #[test]
    fn raw_minter_keeps_timestamp_collisions() {
        let mut minter = IdMinter::new(ManualClock::new(42), false);
        assert_eq!(minter.next_id(), minter.next_id());
    }

    #[test]
    fn system_clock_reports_a_post_epoch_time() {
        assert!(SystemClock.now_millis() > 0);
    }
}

//! Fixed-interval polling bounded by a deadline, for browser globals that
//! arrive with `async` scripts.

#[derive(Clone, Copy, Debug)]
pub struct PollBudget {
    interval_ms: u32,
    remaining_ms: u32,
}

impl PollBudget {
    pub const fn new(interval_ms: u32, deadline_ms: u32) -> Self {
        Self {
            interval_ms,
            remaining_ms: deadline_ms,
        }
    }

    /// Delay before the next attempt, or `None` once the deadline is spent.
    pub fn next_delay(&mut self) -> Option<u32> {
        if self.interval_ms == 0 || self.remaining_ms == 0 {
            return None;
        }
        let delay = self.interval_ms.min(self.remaining_ms);
        self.remaining_ms -= delay;
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spends_the_deadline_in_intervals() {
        let mut budget = PollBudget::new(200, 500);
        assert_eq!(budget.next_delay(), Some(200));
        assert_eq!(budget.next_delay(), Some(200));
        assert_eq!(budget.next_delay(), Some(100));
        assert_eq!(budget.next_delay(), None);
        assert_eq!(budget.next_delay(), None);
    }

    #[test]
    fn zero_budget_never_waits() {
        assert_eq!(PollBudget::new(200, 0).next_delay(), None);
        assert_eq!(PollBudget::new(0, 1_000).next_delay(), None);
    }
}

use std::time::Duration;

/// Call allowance for one process lifetime.
///
/// The Solax user guide caps a token at a fixed number of calls per day. The counter
/// here never resets: a process that outlives a calendar day keeps counting against
/// the same allowance until it is restarted.
#[derive(Copy, Clone, Debug)]
pub struct CallBudget {
    daily_limit: u32,
    calls_made: u32,
}

impl CallBudget {
    #[must_use]
    pub const fn new(daily_limit: u32) -> Self {
        Self { daily_limit, calls_made: 0 }
    }

    /// Only successful calls are charged, so failed attempts never spend the budget.
    pub const fn charge(&mut self) {
        self.calls_made += 1;
    }

    #[must_use]
    pub const fn is_spent(self) -> bool {
        self.calls_made >= self.daily_limit
    }

    #[must_use]
    pub const fn calls_made(self) -> u32 {
        self.calls_made
    }
}

/// Minimum delay between consecutive poll attempts.
#[must_use]
pub fn pacing_interval(max_calls_per_minute: u32) -> Duration {
    Duration::from_secs_f64(60.0 / f64::from(max_calls_per_minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_spends_at_limit() {
        let mut budget = CallBudget::new(2);
        assert!(!budget.is_spent());
        budget.charge();
        assert!(!budget.is_spent());
        budget.charge();
        assert!(budget.is_spent());
        assert_eq!(budget.calls_made(), 2);
    }

    #[test]
    fn zero_limit_is_spent_immediately() {
        assert!(CallBudget::new(0).is_spent());
    }

    #[test]
    fn six_calls_per_minute_pace_ten_seconds_apart() {
        assert_eq!(pacing_interval(6), Duration::from_secs(10));
    }

    #[test]
    fn sixty_calls_per_minute_pace_one_second_apart() {
        assert_eq!(pacing_interval(60), Duration::from_secs(1));
    }
}

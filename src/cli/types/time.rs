//! Week numbers as they appear in roster and stat tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for Week numbers
///
/// ```rust
/// use nfl_edge::Week;
///
/// let week = Week::new(6);
/// assert_eq!(week.window_start(3), Week::new(4));
/// assert_eq!(Week::new(1).window_start(3), Week::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// First week of an inclusive trailing window of `len` weeks ending at `self`.
    pub fn window_start(&self, len: u16) -> Week {
        Week(self.0.saturating_sub(len.saturating_sub(1)))
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_start_inclusive() {
        assert_eq!(Week::new(6).window_start(3), Week::new(4));
        assert_eq!(Week::new(2).window_start(3), Week::new(0));
        assert_eq!(Week::new(9).window_start(1), Week::new(9));
    }

    #[test]
    fn test_week_ordering() {
        assert!(Week::new(5) > Week::new(4));
        assert_eq!(
            [Week::new(3), Week::new(17), Week::new(1)].iter().max(),
            Some(&Week::new(17))
        );
    }
}

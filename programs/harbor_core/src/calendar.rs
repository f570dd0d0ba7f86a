// programs/harbor_core/src/calendar.rs

use crate::SECONDS_IN_A_DAY;

/// Seconds elapsed between two unix timestamps.
///
/// Returns `None` when `end` precedes `start`; callers surface that as an
/// invalid-time-range error rather than clocking negative accrual.
pub fn seconds_between(start: i64, end: i64) -> Option<u64> {
    if end < start {
        return None;
    }
    Some((end - start) as u64)
}

/// Whole days elapsed between two unix timestamps, floor division.
pub fn days_between(start: i64, end: i64) -> Option<u64> {
    seconds_between(start, end).map(|secs| secs / SECONDS_IN_A_DAY)
}

// ==================== UNIT TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_between_forward() {
        assert_eq!(seconds_between(100, 400), Some(300));
        assert_eq!(seconds_between(0, 0), Some(0));
    }

    #[test]
    fn test_seconds_between_reversed_is_none() {
        assert_eq!(seconds_between(400, 100), None);
        assert_eq!(seconds_between(1, 0), None);
    }

    #[test]
    fn test_seconds_between_negative_timestamps() {
        // Pre-epoch start, post-epoch end
        assert_eq!(seconds_between(-100, 100), Some(200));
    }

    #[test]
    fn test_days_between_floors() {
        assert_eq!(days_between(0, SECONDS_IN_A_DAY as i64), Some(1));
        assert_eq!(days_between(0, SECONDS_IN_A_DAY as i64 - 1), Some(0));
        assert_eq!(days_between(0, 3 * SECONDS_IN_A_DAY as i64 + 5), Some(3));
    }

    #[test]
    fn test_days_between_reversed_is_none() {
        assert_eq!(days_between(SECONDS_IN_A_DAY as i64, 0), None);
    }
}

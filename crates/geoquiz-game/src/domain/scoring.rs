//! Points awarded for a correct capital.

/// Points every correct capital is worth.
pub const BASE_POINTS: u32 = 10;

/// Bonus for the first question; it drops by one per question answered.
pub const EARLY_BONUS: u32 = 5;

/// Points for a correct capital on the zero-based question `index`.
#[must_use]
pub fn question_score(index: u32) -> u32 {
    BASE_POINTS + EARLY_BONUS.saturating_sub(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_question_is_worth_fifteen() {
        assert_eq!(question_score(0), 15);
    }

    #[test]
    fn test_bonus_decays_to_zero_by_fifth_index() {
        assert_eq!(question_score(1), 14);
        assert_eq!(question_score(4), 11);
        assert_eq!(question_score(5), 10);
    }

    #[test]
    fn test_bonus_never_goes_negative() {
        assert_eq!(question_score(6), 10);
        assert_eq!(question_score(u32::MAX), 10);
    }
}

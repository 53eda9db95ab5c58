//! Round scoring.
//!
//! A roll is classified by the first matching rule, in this order:
//! - **All same**: every die shows one value (60 + sum)
//! - **N minus one**: one die differs from all the others (40 + sum)
//! - **Run**: the dice form a gapless sequence (20 + sum)
//! - **All different**: no repeats, but not a run (sum)
//! - **No score**: anything else (0)

pub mod rules;

use serde::{Deserialize, Serialize};

/// The scoring category a roll falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Every die shows the same value.
    AllSame,
    /// All dice but one share a value.
    NMinusOne,
    /// The dice form a run of consecutive values.
    Run,
    /// Every die differs, without forming a run.
    AllDifferent,
    /// Partial ties that match no other category.
    NoScore,
}

impl Category {
    /// Bonus added to the roll's sum, or `None` when the roll scores nothing.
    pub fn bonus(self) -> Option<i64> {
        match self {
            Self::AllSame => Some(60),
            Self::NMinusOne => Some(40),
            Self::Run => Some(20),
            Self::AllDifferent => Some(0),
            Self::NoScore => None,
        }
    }

    /// Points for a roll in this category with the given sum.
    ///
    /// Saturates instead of overflowing for sums near `i64::MAX`.
    pub fn points(self, sum: i64) -> i64 {
        self.bonus().map_or(0, |bonus| bonus.saturating_add(sum))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllSame => write!(f, "All Same"),
            Self::NMinusOne => write!(f, "N Minus One"),
            Self::Run => write!(f, "Run"),
            Self::AllDifferent => write!(f, "All Different"),
            Self::NoScore => write!(f, "No Score"),
        }
    }
}

/// The scored outcome of one roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Which rule matched.
    pub category: Category,
    /// Points awarded.
    pub points: i64,
}

/// Classify a roll and compute its points.
///
/// `sum` is the precomputed total of `roll`. The roll is copied before
/// sorting; the caller's order is left untouched.
pub fn score(roll: &[i32], sum: i64) -> Score {
    let category = classify(roll);
    let points = category.points(sum);
    log::debug!("scored {roll:?} (sum {sum}) as {category}: {points} points");
    Score { category, points }
}

/// Points for a roll; shorthand for `score(roll, sum).points`.
pub fn points(roll: &[i32], sum: i64) -> i64 {
    score(roll, sum).points
}

/// Sum of a roll, widened so any number of `i32` faces fits.
pub fn roll_sum(roll: &[i32]) -> i64 {
    roll.iter().map(|&face| i64::from(face)).sum()
}

/// Find the first matching category for a roll.
pub fn classify(roll: &[i32]) -> Category {
    let mut sorted = roll.to_vec();
    sorted.sort_unstable();

    if rules::all_same(&sorted) {
        Category::AllSame
    } else if rules::n_minus_one(&sorted) {
        Category::NMinusOne
    } else if rules::is_run(&sorted) {
        Category::Run
    } else if rules::all_different(&sorted) {
        Category::AllDifferent
    } else {
        Category::NoScore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(roll: &[i32], category: Category, points: i64) {
        let sum = roll_sum(roll);
        assert_eq!(score(roll, sum), Score { category, points }, "roll {roll:?}");
    }

    #[test]
    fn three_of_a_kind() {
        check(&[4, 4, 4], Category::AllSame, 72);
    }

    #[test]
    fn pair_with_high_outlier() {
        check(&[2, 2, 5], Category::NMinusOne, 49);
    }

    #[test]
    fn pair_with_low_outlier_in_any_order() {
        check(&[3, 1, 1], Category::NMinusOne, 45);
        check(&[1, 3, 1], Category::NMinusOne, 45);
        check(&[1, 1, 3], Category::NMinusOne, 45);
    }

    #[test]
    fn run_of_three() {
        check(&[2, 3, 4], Category::Run, 29);
        check(&[4, 2, 3], Category::Run, 29);
    }

    #[test]
    fn all_different_without_run() {
        check(&[1, 3, 5], Category::AllDifferent, 9);
    }

    #[test]
    fn partial_tie_falls_back_to_zero() {
        check(&[1, 1, 2, 3], Category::NoScore, 0);
        check(&[2, 2, 5, 5], Category::NoScore, 0);
    }

    #[test]
    fn two_dice_always_match_an_early_rule() {
        check(&[6, 6], Category::AllSame, 72);
        // Two distinct values with one each counts as one die out.
        check(&[3, 4], Category::NMinusOne, 47);
    }

    #[test]
    fn single_die_is_all_same() {
        check(&[5], Category::AllSame, 65);
    }

    #[test]
    fn caller_roll_is_not_reordered() {
        let roll = vec![5, 1, 3];
        let _ = score(&roll, 9);
        assert_eq!(roll, vec![5, 1, 3]);
    }

    #[test]
    fn sorts_numerically() {
        // Faces 9 and 10 are adjacent numerically but not as strings.
        check(&[10, 9, 8], Category::Run, 47);
    }

    #[test]
    fn uses_the_sum_it_is_given() {
        assert_eq!(points(&[4, 4, 4], 100), 160);
    }

    #[test]
    fn extreme_faces_do_not_overflow() {
        let max = i64::from(i32::MAX);
        check(&[i32::MIN, 0, i32::MAX], Category::AllDifferent, -1);
        check(&[i32::MAX - 1, i32::MAX], Category::NMinusOne, 40 + 2 * max - 1);
        check(
            &[i32::MAX - 2, i32::MAX - 1, i32::MAX, i32::MIN],
            Category::AllDifferent,
            3 * max - 3 + i64::from(i32::MIN),
        );
        check(
            &[i32::MAX - 2, i32::MAX - 1, i32::MAX],
            Category::Run,
            20 + 3 * max - 3,
        );
        check(&[i32::MAX; 3], Category::AllSame, 60 + 3 * max);
    }

    #[test]
    fn huge_sum_saturates() {
        assert_eq!(points(&[1, 1, 1], i64::MAX - 10), i64::MAX);
        assert_eq!(points(&[1, 3, 5], i64::MAX), i64::MAX);
    }

    #[test]
    fn roll_sum_widens() {
        assert_eq!(roll_sum(&[i32::MAX, 1, 1]), 2_147_483_649);
        assert_eq!(roll_sum(&[]), 0);
    }

    #[test]
    fn bonus_table() {
        assert_eq!(Category::AllSame.bonus(), Some(60));
        assert_eq!(Category::NMinusOne.bonus(), Some(40));
        assert_eq!(Category::Run.bonus(), Some(20));
        assert_eq!(Category::AllDifferent.bonus(), Some(0));
        assert_eq!(Category::NoScore.bonus(), None);
        assert_eq!(Category::NoScore.points(12), 0);
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::NMinusOne.to_string(), "N Minus One");
        assert_eq!(Category::NoScore.to_string(), "No Score");
    }
}

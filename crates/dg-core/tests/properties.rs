//! Property tests for rolling and scoring.

use dg_core::scoring::{self, Category};
use dg_core::{Dice, Die};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn roll_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1..=6i32, 1..=6)
}

proptest! {
    #[test]
    fn score_ignores_dice_order(roll in roll_strategy(), seed in any::<u64>()) {
        let sum = scoring::roll_sum(&roll);
        let mut shuffled = roll.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        rand::seq::SliceRandom::shuffle(shuffled.as_mut_slice(), &mut rng);

        prop_assert_eq!(scoring::score(&roll, sum), scoring::score(&shuffled, sum));
    }

    #[test]
    fn points_follow_category(roll in roll_strategy()) {
        let sum = scoring::roll_sum(&roll);
        let score = scoring::score(&roll, sum);
        let expected = match score.category {
            Category::AllSame => 60 + sum,
            Category::NMinusOne => 40 + sum,
            Category::Run => 20 + sum,
            Category::AllDifferent => sum,
            Category::NoScore => 0,
        };
        prop_assert_eq!(score.points, expected);
    }

    #[test]
    fn score_leaves_input_untouched(roll in roll_strategy()) {
        let before = roll.clone();
        let _ = scoring::score(&roll, 0);
        prop_assert_eq!(roll, before);
    }

    #[test]
    fn dice_roll_has_one_in_range_value_per_die(
        count in 1usize..=10,
        lower in -20i32..20,
        span in 1i32..30,
        seed in any::<u64>(),
    ) {
        let upper = lower + span;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dice = Dice::new(count, lower, upper).unwrap();
        dice.roll_all(&mut rng);

        prop_assert_eq!(dice.last_roll().len(), count);
        prop_assert!(dice.last_roll().iter().all(|v| (lower..=upper).contains(v)));
        prop_assert_eq!(dice.sum_values(), scoring::roll_sum(dice.last_roll()));
    }

    #[test]
    fn die_requires_strict_bounds(lower in -50i32..50, upper in -50i32..50) {
        prop_assert_eq!(Die::new(lower, upper).is_ok(), lower < upper);
    }
}

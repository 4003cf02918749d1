//! Daily aging rules.
//!
//! The per-day transition for a single item: category-dispatched, pure, and
//! total. `sell_in` counts days to the sell-by date (0 is the last day before
//! expiry, negative is expired); `quality` stays within [0, 50] for every
//! category except legendary, which this module never touches.

use crate::item::{Category, MAX_QUALITY, MIN_QUALITY};

/// Advance one item by exactly one elapsed day.
///
/// Returns the next `(sell_in, quality)` pair. Deterministic and total: every
/// input produces an output. Calling it twice advances two days.
pub fn advance_one_day(category: Category, sell_in: i32, quality: i32) -> (i32, i32) {
    if category.is_legendary() {
        return (sell_in, quality);
    }

    // The sell-by countdown moves first; every quality branch below sees the
    // post-decrement value.
    let sell_in = sell_in - 1;
    (sell_in, next_quality(category, sell_in, quality))
}

fn next_quality(category: Category, sell_in: i32, quality: i32) -> i32 {
    let delta = match category {
        Category::Legendary => return quality,
        Category::Ordinary if sell_in < 0 => -2,
        Category::Ordinary => -1,
        Category::Aged if sell_in < 0 => 2,
        Category::Aged => 1,
        Category::BackstagePass => {
            if sell_in < 0 {
                // Once the concert has happened the pass is worthless: a hard
                // reset, not a decrement.
                return 0;
            }
            if sell_in < 5 {
                3
            } else if sell_in < 10 {
                2
            } else {
                1
            }
        }
    };

    (quality + delta).clamp(MIN_QUALITY, MAX_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_loses_one_quality_and_one_day() {
        assert_eq!(advance_one_day(Category::Ordinary, 4, 3), (3, 2));
        assert_eq!(advance_one_day(Category::Ordinary, 3, 2), (2, 1));
    }

    #[test]
    fn ordinary_quality_never_goes_negative() {
        assert_eq!(advance_one_day(Category::Ordinary, 0, 0), (-1, 0));
        assert_eq!(advance_one_day(Category::Ordinary, -5, 1), (-6, 0));
    }

    #[test]
    fn ordinary_degrades_twice_as_fast_after_sell_by() {
        assert_eq!(advance_one_day(Category::Ordinary, -3, 10), (-4, 8));
    }

    #[test]
    fn sell_by_boundary_doubles_the_rate_the_same_day() {
        // sell_in 0 decrements to -1 before quality is computed.
        assert_eq!(advance_one_day(Category::Ordinary, 0, 10), (-1, 8));
        assert_eq!(advance_one_day(Category::Aged, 0, 10), (-1, 12));
    }

    #[test]
    fn aged_gains_quality() {
        assert_eq!(advance_one_day(Category::Aged, 5, 10), (4, 11));
    }

    #[test]
    fn aged_quality_is_capped_at_fifty() {
        assert_eq!(advance_one_day(Category::Aged, 5, 50), (4, 50));
        assert_eq!(advance_one_day(Category::Aged, -1, 49), (-2, 50));
    }

    #[test]
    fn legendary_is_frozen() {
        assert_eq!(advance_one_day(Category::Legendary, 2, 100), (2, 100));
        assert_eq!(advance_one_day(Category::Legendary, 2, 80), (2, 80));
        assert_eq!(
            advance_one_day(Category::Legendary, i32::MIN, i32::MAX),
            (i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn backstage_gains_accelerate_near_the_concert() {
        // 11+ days out: +1; 10 to 6 days: +2; 5 to 1 days: +3.
        assert_eq!(advance_one_day(Category::BackstagePass, 12, 20), (11, 21));
        assert_eq!(advance_one_day(Category::BackstagePass, 11, 20), (10, 21));
        assert_eq!(advance_one_day(Category::BackstagePass, 10, 20), (9, 22));
        assert_eq!(advance_one_day(Category::BackstagePass, 6, 20), (5, 22));
        assert_eq!(advance_one_day(Category::BackstagePass, 5, 20), (4, 23));
        assert_eq!(advance_one_day(Category::BackstagePass, 1, 20), (0, 23));
    }

    #[test]
    fn backstage_is_worthless_after_the_concert() {
        assert_eq!(advance_one_day(Category::BackstagePass, 0, 45), (-1, 0));
        assert_eq!(advance_one_day(Category::BackstagePass, -3, 50), (-4, 0));
    }

    #[test]
    fn backstage_quality_is_capped_at_fifty() {
        assert_eq!(advance_one_day(Category::BackstagePass, 3, 49), (2, 50));
        assert_eq!(advance_one_day(Category::BackstagePass, 10, 50), (9, 50));
    }
}

//! Random demo data drawn from the beverage table.

use crate::model::review::{MAX_SCORE, MIN_COUNT, MIN_SCORE};
use crate::seed::beverages::{demo_category_names, BEVERAGES};
use crate::seed::{SeedReview, SeedSource};
use chrono::{Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEMO_REVIEWS_MIN: usize = 20;
pub const DEMO_REVIEWS_MAX: usize = 49;
const DEMO_MAX_COUNT: u32 = 15;

/// Random demo generator.
///
/// Review count is 20..=49. Each review draws beverage and category together
/// from [`BEVERAGES`], a date uniformly from `[1930-01-01, today)`, a score
/// of 1..=5 and a tasting count of 1..=15.
#[derive(Debug, Clone)]
pub struct DemoSeed<R = StdRng> {
    rng: R,
    today: NaiveDate,
}

impl DemoSeed<StdRng> {
    /// Entropy-seeded generator anchored at today's local date.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Local::now().date_naive())
    }

    /// Reproducible generator for a fixed seed value.
    pub fn from_seed(seed: u64, today: NaiveDate) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), today)
    }
}

impl Default for DemoSeed<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DemoSeed<R> {
    pub fn with_rng(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    fn random_date(&mut self) -> NaiveDate {
        let first = first_demo_date();
        let first_day = first.num_days_from_ce();
        let last_day = self.today.num_days_from_ce();
        if last_day <= first_day {
            return first;
        }
        let day = self.rng.gen_range(first_day..last_day);
        NaiveDate::from_num_days_from_ce_opt(day).unwrap_or(first)
    }
}

impl<R: Rng> SeedSource for DemoSeed<R> {
    fn category_names(&self) -> Vec<String> {
        demo_category_names()
    }

    fn reviews(&mut self) -> Vec<SeedReview> {
        let total = self.rng.gen_range(DEMO_REVIEWS_MIN..=DEMO_REVIEWS_MAX);
        (0..total)
            .map(|_| {
                let (beverage, category) = BEVERAGES[self.rng.gen_range(0..BEVERAGES.len())];
                let date = self.random_date();
                SeedReview {
                    beverage: beverage.to_string(),
                    category: category.to_string(),
                    score: self.rng.gen_range(MIN_SCORE..=MAX_SCORE),
                    count: self.rng.gen_range(MIN_COUNT..=DEMO_MAX_COUNT),
                    date,
                }
            })
            .collect()
    }
}

fn first_demo_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1930, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::{first_demo_date, DemoSeed, DEMO_REVIEWS_MAX, DEMO_REVIEWS_MIN};
    use crate::seed::{SeedSource, BEVERAGES};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn same_seed_produces_same_reviews() {
        let first = DemoSeed::from_seed(42, today()).reviews();
        let second = DemoSeed::from_seed(42, today()).reviews();
        assert_eq!(first, second);
    }

    #[test]
    fn generated_values_stay_in_bounds() {
        for seed in 0..20 {
            let reviews = DemoSeed::from_seed(seed, today()).reviews();
            assert!((DEMO_REVIEWS_MIN..=DEMO_REVIEWS_MAX).contains(&reviews.len()));

            for review in reviews {
                assert!((1..=5).contains(&review.score));
                assert!((1..=15).contains(&review.count));
                assert!(review.date >= first_demo_date());
                assert!(review.date < today());
                assert!(BEVERAGES
                    .iter()
                    .any(|(beverage, category)| *beverage == review.beverage
                        && *category == review.category));
            }
        }
    }

    #[test]
    fn date_collapses_to_first_day_when_today_is_earlier() {
        let early = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let reviews = DemoSeed::from_seed(7, early).reviews();
        assert!(reviews.iter().all(|review| review.date == first_demo_date()));
    }
}

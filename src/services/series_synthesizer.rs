use crate::structs::category_progress::CategoryProgress;
use crate::structs::category_series::CategorySeries;
use crate::structs::daily_completion::DailyCompletion;

/// Splits the aggregate daily trend into per-category series by scaling
/// each day's total with the category's success percentage.
///
/// The result is an approximation: values of one day need not add up to
/// that day's total.
pub struct SeriesSynthesizer;

impl SeriesSynthesizer {
    pub fn synthesize(trend: &[DailyCompletion], progress: &CategoryProgress) -> CategorySeries {
        let mut series = CategorySeries::new();

        for (category, rate) in progress.iter() {
            let values = trend
                .iter()
                .map(|day| Self::apportion(day.completions, rate))
                .collect();
            series.push(category, values);
        }

        series
    }

    /// `round(completions * rate / 100)`, ties away from zero.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn apportion(completions: i64, rate: f64) -> i64 {
        (completions as f64 * rate / 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(SeriesSynthesizer::apportion(10, 25.0), 3);
        assert_eq!(SeriesSynthesizer::apportion(1, 50.0), 1);
        assert_eq!(SeriesSynthesizer::apportion(-10, 25.0), -3);
        assert_eq!(SeriesSynthesizer::apportion(3, 50.0), 2);
    }

    #[test]
    fn out_of_range_inputs_pass_through_arithmetic() {
        assert_eq!(SeriesSynthesizer::apportion(4, 150.0), 6);
        assert_eq!(SeriesSynthesizer::apportion(4, -50.0), -2);
        assert_eq!(SeriesSynthesizer::apportion(0, 75.0), 0);
    }

    #[test]
    fn empty_trend_gives_empty_series_per_category() {
        let progress = CategoryProgress::new().with("health", 50.0).with("fitness", 25.0);
        let series = SeriesSynthesizer::synthesize(&[], &progress);

        assert_eq!(series.categories(), vec!["health", "fitness"]);
        assert!(series.iter().all(|(_, values)| values.is_empty()));
    }
}

//! Property tests for month bucketing.

use chrono::Datelike;
use proptest::prelude::*;
use sales_report_common::series_total;
use sales_report_common::test_utils::property_testing::daily_totals_strategy;
use sales_report_config::{AggregationConfig, MonthLabelStyle};
use sales_report_data::{bucket_by_month, fill_empty_months, monthly_series, DailySales};
use std::collections::BTreeSet;

fn to_daily(raw: &[(chrono::NaiveDate, f64)]) -> Vec<DailySales> {
    raw.iter().map(|&(date, total)| DailySales::new(date, total)).collect()
}

proptest! {
    #[test]
    fn bucketing_preserves_the_grand_total(raw in daily_totals_strategy(60)) {
        let daily = to_daily(&raw);
        let expected: f64 = daily.iter().map(|d| d.total_sales).sum();
        let buckets = bucket_by_month(&daily);
        let actual: f64 = buckets.iter().map(|b| b.total).sum();
        prop_assert!((expected - actual).abs() < 1e-6);
    }

    #[test]
    fn one_bucket_per_distinct_month_in_order(raw in daily_totals_strategy(60)) {
        let daily = to_daily(&raw);
        let months: BTreeSet<(i32, u32)> = daily
            .iter()
            .map(|d| (d.sale_date.year(), d.sale_date.month()))
            .collect();

        let buckets = bucket_by_month(&daily);
        let keys: Vec<_> = buckets.iter().map(|b| (b.year, b.month)).collect();
        prop_assert_eq!(keys, months.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn filling_adds_only_zero_months(raw in daily_totals_strategy(40)) {
        let buckets = bucket_by_month(&to_daily(&raw));
        let filled = fill_empty_months(&buckets);

        prop_assert!(filled.len() >= buckets.len());
        for bucket in &buckets {
            prop_assert!(filled.contains(bucket));
        }
        for bucket in filled.iter().filter(|b| !buckets.contains(b)) {
            prop_assert_eq!(bucket.total, 0.0);
        }
        for pair in filled.windows(2) {
            let (y, m) = (pair[0].year, pair[0].month);
            let next = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
            prop_assert_eq!((pair[1].year, pair[1].month), next);
        }
    }

    #[test]
    fn series_total_matches_input(raw in daily_totals_strategy(60)) {
        let daily = to_daily(&raw);
        let config = AggregationConfig {
            fill_empty_months: true,
            month_labels: MonthLabelStyle::WithYear,
            ..AggregationConfig::default()
        };
        let series = monthly_series(&daily, &config);
        let expected: f64 = daily.iter().map(|d| d.total_sales).sum();
        prop_assert!((series_total(&series) - expected).abs() < 1e-6);
    }
}

//! Month bucketing of daily totals.

use crate::queries::DailySales;
use chrono::Datelike;
use sales_report_common::{ReportData, SeriesPoint};
use sales_report_config::{AggregationConfig, MonthLabelStyle};
use std::collections::BTreeMap;

/// Summed sales for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyBucket {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Sum of the daily totals falling in the month.
    pub total: f64,
}

impl MonthlyBucket {
    /// Display label for the bucket.
    pub fn label(&self, style: MonthLabelStyle) -> String {
        let abbr = month_abbr(self.month);
        match style {
            MonthLabelStyle::Abbreviated => abbr.to_string(),
            MonthLabelStyle::WithYear => format!("{abbr} {}", self.year),
        }
    }

    const fn next_month(year: i32, month: u32) -> (i32, u32) {
        if month >= 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }
}

fn month_abbr(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
        5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Dec",
        _ => "???",
    }
}

/// Groups daily totals by `(year, month)`, oldest month first.
pub fn bucket_by_month(daily: &[DailySales]) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for day in daily {
        *months
            .entry((day.sale_date.year(), day.sale_date.month()))
            .or_insert(0.0) += day.total_sales;
    }

    months
        .into_iter()
        .map(|((year, month), total)| MonthlyBucket { year, month, total })
        .collect()
}

/// Inserts zero-valued buckets for every month missing between the first and last bucket.
pub fn fill_empty_months(buckets: &[MonthlyBucket]) -> Vec<MonthlyBucket> {
    let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
        return Vec::new();
    };

    let mut filled = Vec::with_capacity(buckets.len());
    let mut present = buckets.iter().peekable();
    let (mut year, mut month) = (first.year, first.month);

    while (year, month) <= (last.year, last.month) {
        match present.peek() {
            Some(bucket) if (bucket.year, bucket.month) == (year, month) => {
                filled.push(**bucket);
                present.next();
            }
            _ => filled.push(MonthlyBucket {
                year,
                month,
                total: 0.0,
            }),
        }
        (year, month) = MonthlyBucket::next_month(year, month);
    }

    filled
}

/// Builds the monthly chart series from daily totals.
pub fn monthly_series(daily: &[DailySales], config: &AggregationConfig) -> Vec<SeriesPoint> {
    let mut buckets = bucket_by_month(daily);
    if config.fill_empty_months {
        buckets = fill_empty_months(&buckets);
    }

    buckets
        .iter()
        .map(|bucket| SeriesPoint::new(bucket.label(config.month_labels), bucket.total))
        .collect()
}

/// Assembles the three chart series. Product and customer rows pass through unchanged.
pub fn build_report_data(
    daily: &[DailySales],
    products: Vec<SeriesPoint>,
    customers: Vec<SeriesPoint>,
    config: &AggregationConfig,
) -> ReportData {
    ReportData {
        monthly: monthly_series(daily, config),
        products,
        customers,
    }
}

//! Aggregate statistics shown by the stats view.

use super::record::FeedbackRecord;

/// Count and average rating of a set of records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackStats {
    pub count: usize,
    /// Rounded to one decimal place; `0.0` for an empty board.
    pub average: f64,
}

impl FeedbackStats {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        Self {
            count: records.len(),
            average: average_rating(records),
        }
    }

    /// `"4 Reviews"`.
    pub fn count_label(&self) -> String {
        format!("{} Reviews", self.count)
    }

    /// `"7.3"`, or `"8"` when the decimal is zero.
    pub fn average_label(&self) -> String {
        format_average(self.average)
    }
}

/// Mean rating rounded half away from zero to one decimal.
pub fn average_rating(records: &[FeedbackRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: u32 = records.iter().map(|r| u32::from(r.rating.get())).sum();
    let mean = f64::from(sum) / records.len() as f64;
    (mean * 10.0).round() / 10.0
}

pub fn format_average(average: f64) -> String {
    let formatted = format!("{:.1}", average);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

//! Date value generators.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use seedgen_core::FieldValue;

/// Generate today's date plus a random day offset in `[min_days, max_days]`,
/// inclusive.
///
/// Schema validation rejects offsets that cannot land on a representable
/// date; should one slip through anyway, the value degrades to today
/// instead of panicking.
pub fn generate_date_offset<R: Rng>(rng: &mut R, min_days: i64, max_days: i64) -> FieldValue {
    let today = Utc::now().date_naive();

    let offset = if min_days >= max_days {
        min_days
    } else {
        rng.gen_range(min_days..=max_days)
    };

    let date = Duration::try_days(offset)
        .and_then(|d| today.checked_add_signed(d))
        .unwrap_or(today);
    FieldValue::Date(date)
}

/// Generate a random date in the inclusive window `[start, end]`.
pub fn generate_date_range<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> FieldValue {
    if start >= end {
        return FieldValue::Date(start);
    }

    let span = (end - start).num_days();
    let offset = rng.gen_range(0..=span);
    FieldValue::Date(start + Duration::days(offset))
}

//! Mood aggregation over the record store.
//!
//! All helpers take an explicit reference date instead of reading the clock,
//! so "current week" and "current month" are testable. Bucketing uses the
//! same local-calendar rule as the store's day and month queries.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::catalog::{mood_for_intensity, Mood};
use crate::store::DreamStore;

/// Reporting period for predominant-mood statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// The Sunday-first calendar week containing the reference date.
    Week,
    /// The calendar month containing the reference date.
    Month,
}

/// Arithmetic mean of mood intensity over the month containing `month`.
///
/// `None` when the month has no entries.
pub fn average_mood_for_month(store: &DreamStore, month: NaiveDate) -> Option<f64> {
    let entries = store.entries_in_month(month);
    if entries.is_empty() {
        return None;
    }

    let total: f64 = entries.iter().map(|e| e.mood_intensity).sum();
    Some(total / entries.len() as f64)
}

/// Mood intensity of the most recent entry on `day`, if any.
pub fn mood_for_day(store: &DreamStore, day: NaiveDate) -> Option<f64> {
    store
        .entries_on_day(day)
        .first()
        .map(|entry| entry.mood_intensity)
}

/// The most frequent integral mood intensity over the period containing
/// `today`, mapped into the mood catalog.
///
/// A frequency tie goes to the higher intensity, so the result is
/// deterministic. `None` when the period has no entries or the winning
/// intensity falls outside the catalog's 0..=4 scale.
pub fn predominant_mood(store: &DreamStore, period: Period, today: NaiveDate) -> Option<&'static Mood> {
    let entries = match period {
        Period::Week => {
            let (start, end) = week_bounds(today);
            store
                .all_entries()
                .into_iter()
                .filter(|e| {
                    let day = crate::store::local_day(e.occurred_at);
                    day >= start && day < end
                })
                .collect::<Vec<_>>()
        }
        Period::Month => store.entries_in_month(today),
    };

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for entry in &entries {
        *counts.entry(entry.mood_intensity.trunc() as i64).or_insert(0) += 1;
    }

    let winner = counts
        .into_iter()
        .max_by_key(|&(intensity, count)| (count, intensity))
        .map(|(intensity, _)| intensity)?;

    mood_for_intensity(winner)
}

/// Half-open [start, end) bounds of the Sunday-first week containing `day`.
fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Duration::days(day.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(7))
}

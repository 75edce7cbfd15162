//! Shaping: the pure transformation from a fetched document to the
//! date-aligned [`Timeline`].
//!
//! Upstream emits three nested `date → cumulative count` mappings and, by
//! convention only, keeps their key sets identical and in chronological
//! order. Nothing here trusts that convention:
//!
//! - every series is re-keyed by its parsed calendar date
//! - the date axis is the chronological union of all keys
//! - a series missing a date contributes a 0 for that day
//!
//! For well-formed documents the output axis reproduces the key sequence of
//! `timeline.cases` exactly. No I/O, no side effects: shaping the same
//! document twice yields equal output.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::disease_sh::RawTimeline;
use crate::domain::Timeline;
use crate::error::AppError;

/// Date-key format used by disease.sh, e.g. `3/1/21`.
const LABEL_FORMAT: &str = "%m/%d/%y";

/// Re-keyed series: parsed date → (original label, count).
type Rekeyed = BTreeMap<NaiveDate, (String, u64)>;

/// Shape a raw historical document into a date-aligned timeline.
///
/// Returns `AppError::Shape` if any date key fails to parse as `M/D/YY`.
pub fn shape_timeline(raw: &RawTimeline) -> Result<Timeline, AppError> {
    let cases = rekey_series(&raw.timeline.cases, "cases")?;
    let deaths = rekey_series(&raw.timeline.deaths, "deaths")?;
    let recovered = rekey_series(&raw.timeline.recovered, "recovered")?;

    // Chronological union of all keys. Insertion order below means the label
    // spelling from `cases` wins when a date appears in several series.
    let mut axis: BTreeMap<NaiveDate, String> = BTreeMap::new();
    for series in [&recovered, &deaths, &cases] {
        for (date, (label, _)) in series {
            axis.insert(*date, label.clone());
        }
    }

    let mut dates = Vec::with_capacity(axis.len());
    let mut cases_out = Vec::with_capacity(axis.len());
    let mut deaths_out = Vec::with_capacity(axis.len());
    let mut recovered_out = Vec::with_capacity(axis.len());

    for (date, label) in &axis {
        dates.push(label.clone());
        cases_out.push(value_at(&cases, date));
        deaths_out.push(value_at(&deaths, date));
        recovered_out.push(value_at(&recovered, date));
    }

    Ok(Timeline {
        country: raw.country.clone(),
        dates,
        cases: cases_out,
        deaths: deaths_out,
        recovered: recovered_out,
    })
}

fn rekey_series(series: &BTreeMap<String, u64>, name: &str) -> Result<Rekeyed, AppError> {
    let mut out = Rekeyed::new();
    for (key, &value) in series {
        let date = NaiveDate::parse_from_str(key, LABEL_FORMAT)
            .map_err(|e| AppError::Shape(format!("Invalid {name} date key '{key}': {e}")))?;
        out.insert(date, (key.clone(), value));
    }
    Ok(out)
}

fn value_at(series: &Rekeyed, date: &NaiveDate) -> u64 {
    series.get(date).map(|&(_, value)| value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::disease_sh::RawSeries;

    fn series(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    fn raw(cases: &[(&str, u64)], deaths: &[(&str, u64)], recovered: &[(&str, u64)]) -> RawTimeline {
        RawTimeline {
            country: "Indonesia".to_string(),
            timeline: RawSeries {
                cases: series(cases),
                deaths: series(deaths),
                recovered: series(recovered),
            },
        }
    }

    #[test]
    fn golden_document_shapes_exactly() {
        let raw = raw(
            &[("3/1/21", 100), ("3/2/21", 120)],
            &[("3/1/21", 5), ("3/2/21", 6)],
            &[("3/1/21", 50), ("3/2/21", 60)],
        );

        let timeline = shape_timeline(&raw).unwrap();

        assert_eq!(
            timeline,
            Timeline {
                country: "Indonesia".to_string(),
                dates: vec!["3/1/21".to_string(), "3/2/21".to_string()],
                cases: vec![100, 120],
                deaths: vec![5, 6],
                recovered: vec![50, 60],
            }
        );
    }

    #[test]
    fn aligned_input_keeps_equal_lengths_and_cases_key_sequence() {
        // Dates straddling a year boundary: lexicographic string order would
        // put "1/1/21" first, chronological order must not.
        let days = [("12/30/20", 1), ("12/31/20", 2), ("1/1/21", 3)];
        let raw = raw(&days, &days, &days);

        let timeline = shape_timeline(&raw).unwrap();

        assert_eq!(timeline.dates, vec!["12/30/20", "12/31/20", "1/1/21"]);
        assert_eq!(timeline.dates.len(), timeline.cases.len());
        assert_eq!(timeline.dates.len(), timeline.deaths.len());
        assert_eq!(timeline.dates.len(), timeline.recovered.len());
        assert_eq!(timeline.cases, vec![1, 2, 3]);
    }

    #[test]
    fn shaping_is_idempotent() {
        let raw = raw(
            &[("3/1/21", 100), ("3/2/21", 120)],
            &[("3/1/21", 5), ("3/2/21", 6)],
            &[("3/1/21", 50), ("3/2/21", 60)],
        );

        let first = shape_timeline(&raw).unwrap();
        let second = shape_timeline(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn misaligned_series_fill_gaps_with_zero() {
        // `deaths` is missing 3/2 and carries an extra day 3/3.
        let raw = raw(
            &[("3/1/21", 100), ("3/2/21", 120)],
            &[("3/1/21", 5), ("3/3/21", 7)],
            &[("3/1/21", 50), ("3/2/21", 60)],
        );

        let timeline = shape_timeline(&raw).unwrap();

        assert_eq!(timeline.dates, vec!["3/1/21", "3/2/21", "3/3/21"]);
        assert_eq!(timeline.cases, vec![100, 120, 0]);
        assert_eq!(timeline.deaths, vec![5, 0, 7]);
        assert_eq!(timeline.recovered, vec![50, 60, 0]);
    }

    #[test]
    fn unparseable_date_key_is_a_shape_error() {
        let raw = raw(&[("not-a-date", 1)], &[], &[]);
        let err = shape_timeline(&raw).unwrap_err();
        assert!(matches!(err, AppError::Shape(_)), "got {err:?}");
    }

    #[test]
    fn empty_document_shapes_to_empty_timeline() {
        let timeline = shape_timeline(&raw(&[], &[], &[])).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(timeline.country, "Indonesia");
    }
}

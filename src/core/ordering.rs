use crate::domain::model::ExperienceEntry;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Display order for the experience timeline.
///
/// Two entries with explicit `order` compare ascending by it. Two entries
/// without compare by start date, newest first, where a missing or
/// unparsable date counts as the Unix epoch. When only one of the pair has an
/// `order`, that entry comes first, so the whole list has a total order.
pub fn compare_experience(a: &ExperienceEntry, b: &ExperienceEntry) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let date_a = parse_start_date(a.start_date.as_deref());
            let date_b = parse_start_date(b.start_date.as_deref());
            date_b.cmp(&date_a)
        }
    }
}

/// Stable sort, so entries that compare equal keep the API's order.
pub fn sort_experiences(entries: &mut [ExperienceEntry]) {
    entries.sort_by(compare_experience);
}

/// Parse the date forms a CMS date or free-text field usually holds.
pub fn parse_start_date(value: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return DateTime::<Utc>::UNIX_EPOCH;
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.and_utc();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return midnight(date);
    }

    // 月份或年份格式：2021-03、March 2021、Mar 2021、2021
    for (suffix, format) in [
        ("-01", "%Y-%m-%d"),
        (" 1", "%B %Y %d"),
        (" 1", "%b %Y %d"),
        ("-01-01", "%Y-%m-%d"),
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}{}", raw, suffix), format) {
            return midnight(date);
        }
    }

    tracing::debug!("Unparsable start date '{}', treating as epoch", raw);
    DateTime::<Utc>::UNIX_EPOCH
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

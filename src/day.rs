use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Repeating day number in `1..=365` for `date`, counted from `epoch`.
///
/// The whole-day difference is reduced with a truncated remainder, which
/// is non-positive for dates before the epoch; those get shifted back
/// into range with an explicit `+ 365`.
pub fn day_index_for(date: NaiveDate, epoch: NaiveDate) -> u16 {
    let days_since_epoch = (date - epoch).num_days();
    let day = days_since_epoch % 365 + 1;
    if day > 0 { day as u16 } else { (day + 365) as u16 }
}

/// Day number for `instant`, evaluated on the reference timezone's
/// calendar so "today" flips at the same moment for every caller.
pub fn day_index_at(instant: DateTime<Utc>, epoch: NaiveDate, tz: Tz) -> u16 {
    day_index_for(instant.with_timezone(&tz).date_naive(), epoch)
}

pub fn current_day_index(epoch: NaiveDate, tz: Tz) -> u16 {
    day_index_at(Utc::now(), epoch, tz)
}

/// Long-form date label for the page header, e.g. "Monday, June 30, 2025".
pub fn date_label(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%A, %B %-d, %Y").to_string()
}

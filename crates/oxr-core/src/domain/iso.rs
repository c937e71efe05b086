//! ISO-8601 rendering for path segments and query values.
//!
//! Dates go on the wire as `YYYY-MM-DD`; OHLC start times as RFC3339 with
//! the time of day included.

use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn format_date(date: Date) -> Result<String, ValidationError> {
    date.format(DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate {
            value: date.to_string(),
        })
}

pub fn format_datetime(value: OffsetDateTime) -> Result<String, ValidationError> {
    value
        .format(&Rfc3339)
        .map_err(|_| ValidationError::InvalidTimestamp {
            value: value.to_string(),
        })
}

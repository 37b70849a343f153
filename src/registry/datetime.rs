//! Date/time extraction entries.
//!
//! Extraction operates on a timezone-qualified instant viewed in a caller
//! supplied IANA zone. A scalar that is not a timestamp is rejected with a
//! typed invalid-temporal error instead of being coerced.

use chrono::{DateTime, Datelike, Timelike, Utc};
use chrono_tz::Tz;

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

/// Extract one chronological field from a timestamp, in the given zone.
///
/// Field names form a closed set: YEAR, MONTH_OF_YEAR, DAY_OF_MONTH,
/// DAY_OF_WEEK (ISO, Monday = 1), DAY_OF_YEAR, ALIGNED_WEEK_OF_YEAR,
/// HOUR_OF_DAY, MINUTE_OF_HOUR, SECOND_OF_MINUTE, MILLI_OF_SECOND.
pub fn date_time_chrono(
    datetime: &Scalar,
    tz_id: &Scalar,
    field: &Scalar,
) -> ScriptResult<Scalar> {
    if datetime.is_null() || tz_id.is_null() || field.is_null() {
        return Ok(Scalar::Null);
    }
    let local = in_zone(datetime, tz_id)?;
    let name = text(field, "chrono field name")?;

    let value = match name {
        "YEAR" => local.year() as i64,
        "MONTH_OF_YEAR" => local.month() as i64,
        "DAY_OF_MONTH" => local.day() as i64,
        "DAY_OF_WEEK" => local.weekday().number_from_monday() as i64,
        "DAY_OF_YEAR" => local.ordinal() as i64,
        "ALIGNED_WEEK_OF_YEAR" => ((local.ordinal() - 1) / 7 + 1) as i64,
        "HOUR_OF_DAY" => local.hour() as i64,
        "MINUTE_OF_HOUR" => local.minute() as i64,
        "SECOND_OF_MINUTE" => local.second() as i64,
        "MILLI_OF_SECOND" => local.timestamp_subsec_millis() as i64,
        other => {
            return Err(ScriptError::InvalidArgument(format!(
                "Unknown chrono field: {}",
                other
            )))
        }
    };
    Ok(Scalar::Int(value))
}

/// English day-of-week name ("Monday") in the given zone.
pub fn day_name(datetime: &Scalar, tz_id: &Scalar) -> ScriptResult<Scalar> {
    if datetime.is_null() || tz_id.is_null() {
        return Ok(Scalar::Null);
    }
    let local = in_zone(datetime, tz_id)?;
    Ok(Scalar::Text(local.format("%A").to_string()))
}

/// English month name ("January") in the given zone.
pub fn month_name(datetime: &Scalar, tz_id: &Scalar) -> ScriptResult<Scalar> {
    if datetime.is_null() || tz_id.is_null() {
        return Ok(Scalar::Null);
    }
    let local = in_zone(datetime, tz_id)?;
    Ok(Scalar::Text(local.format("%B").to_string()))
}

/// Calendar quarter, 1 through 4, in the given zone.
pub fn quarter(datetime: &Scalar, tz_id: &Scalar) -> ScriptResult<Scalar> {
    if datetime.is_null() || tz_id.is_null() {
        return Ok(Scalar::Null);
    }
    let local = in_zone(datetime, tz_id)?;
    Ok(Scalar::Int((local.month0() / 3 + 1) as i64))
}

fn in_zone(datetime: &Scalar, tz_id: &Scalar) -> ScriptResult<DateTime<Tz>> {
    let instant = as_datetime(datetime)?;
    let zone: Tz = text(tz_id, "time zone id")?.parse().map_err(|_| {
        ScriptError::InvalidArgument(format!("Unknown time zone: {}", tz_id))
    })?;
    Ok(instant.with_timezone(&zone))
}

fn as_datetime(value: &Scalar) -> ScriptResult<DateTime<Utc>> {
    value.as_timestamp().ok_or_else(|| {
        ScriptError::InvalidTemporal(format!(
            "Expected a timestamp, got {} [{}]",
            value.type_name(),
            value
        ))
    })
}

fn text<'a>(value: &'a Scalar, what: &str) -> ScriptResult<&'a str> {
    value.as_str().ok_or_else(|| {
        ScriptError::TypeError(format!(
            "Expected text for {}, got {}",
            what,
            value.type_name()
        ))
    })
}

/*!
 * Timestamp codec.
 *
 * Converts between the textual `H+:MM:SS[,|.]mmm` notation and an integer
 * offset in microseconds from the start of the track.
 */

use crate::errors::CaptionError;

const MICROS_PER_HOUR: u64 = 3_600_000_000;
const MICROS_PER_MINUTE: u64 = 60_000_000;
const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MILLI: u64 = 1_000;

/// Parse a `H+:MM:SS[,|.]mmm` timestamp into microseconds.
///
/// The fractional field is optional and defaults to `000`. Minutes and
/// seconds are not range-checked.
pub fn parse(text: &str) -> Result<u64, CaptionError> {
    let stamp = text.trim();
    let fields: Vec<&str> = stamp.split(':').collect();
    if fields.len() != 3 {
        return Err(CaptionError::InvalidTimestamp(format!(
            "expected H:MM:SS[,mmm], got {:?}",
            stamp
        )));
    }

    let (seconds, millis) = match fields[2].split_once([',', '.']) {
        Some((secs, frac)) => (secs, frac),
        None => (fields[2], "000"),
    };

    let hours = parse_field(fields[0], "hours", stamp)?;
    let minutes = parse_field(fields[1], "minutes", stamp)?;
    let seconds = parse_field(seconds, "seconds", stamp)?;
    let millis = parse_field(millis, "milliseconds", stamp)?;

    hours
        .checked_mul(MICROS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(MICROS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds.checked_mul(MICROS_PER_SECOND)?))
        .and_then(|total| total.checked_add(millis.checked_mul(MICROS_PER_MILLI)?))
        .ok_or_else(|| CaptionError::InvalidTimestamp(format!("{:?} is out of range", stamp)))
}

fn parse_field(field: &str, name: &str, stamp: &str) -> Result<u64, CaptionError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CaptionError::InvalidTimestamp(format!(
            "bad {} field {:?} in {:?}",
            name, field, stamp
        )));
    }
    field
        .parse()
        .map_err(|_| CaptionError::InvalidTimestamp(format!("{} out of range in {:?}", name, stamp)))
}

/// Format microseconds as `HH:MM:SS<sep>mmm`.
///
/// Anything below one millisecond is truncated, never rounded. Hours grow
/// past two digits when needed.
pub fn format(micros: u64, fractional_separator: char) -> String {
    let hours = micros / MICROS_PER_HOUR;
    let minutes = (micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE;
    let seconds = (micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND;
    let millis = (micros % MICROS_PER_SECOND) / MICROS_PER_MILLI;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, seconds, fractional_separator, millis
    )
}

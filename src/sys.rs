use crate::{CalendarDate, CodecError, CodecResult};

use web_time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// Returns the current date in UTC according to the host clock.
pub(crate) fn current_utc_date() -> CodecResult<CalendarDate> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| CodecError::range().with_message("Error fetching system time"))?;
    let epoch_days = i32::try_from(elapsed.as_secs() / SECONDS_PER_DAY)
        .map_err(|_| CodecError::range().with_message("system time exceeds a valid range."))?;
    CalendarDate::from_epoch_days(epoch_days)
}

//! Environment and configuration utilities.

use crate::clock::Clock;
use log::warn;
use std::env;
use std::time::Duration;

/// Environment variable holding the HTTP timeout, in seconds.
pub const TIMEOUT_ENV: &str = "WPSTATS_TIMEOUT";

/// Timeout used when `$WPSTATS_TIMEOUT` is unset or unusable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Returns the timeout applied to connecting to a blog and to each
/// page request.
///
/// The value is read from `$WPSTATS_TIMEOUT` as a whole number of seconds.
/// Anything that is not a positive integer falls back to the default of
/// ten seconds.
///
/// # Examples
///
/// ```
/// use wpstats::conf::request_timeout;
/// use std::time::Duration;
/// # use temp_env::with_var_unset;
/// # with_var_unset("WPSTATS_TIMEOUT", || {
/// assert_eq!(request_timeout(), Duration::from_secs(10));
/// # });
/// ```
///
/// ```
/// use wpstats::conf::request_timeout;
/// use std::time::Duration;
/// # use temp_env::with_var;
/// # with_var("WPSTATS_TIMEOUT", Some("30"), || {
/// assert_eq!(request_timeout(), Duration::from_secs(30));
/// # });
/// ```
pub fn request_timeout() -> Duration {
    let secs = match env::var(TIMEOUT_ENV) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!("ignoring invalid ${TIMEOUT_ENV} value: {value:?}");
                DEFAULT_TIMEOUT_SECS
            }
        },
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}

/// Default filename for a report written to disk, stamped with the
/// current local time, e.g. `wp_stats_20241028_153000.html`.
pub fn report_filename<C: Clock>(extension: &str, clock: &C) -> String {
    let stamp = clock.now_local().format("%Y%m%d_%H%M%S");
    format!("wp_stats_{stamp}.{extension}")
}

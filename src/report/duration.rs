//! Human-readable elapsed time.
use std::time::Duration;

/// `(units per next unit, plural, singular)`, smallest first. Days are unbounded.
const UNITS: [(u64, &str, &str); 4] = [
    (60, "seconds", "second"),
    (60, "minutes", "minute"),
    (24, "hours", "hour"),
    (u64::MAX, "days", "day"),
];

/// Format `elapsed` as days, hours, minutes and seconds, largest first.
///
/// Zero units are left out and fractions of a second are dropped; anything
/// under a second reads `0 seconds`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use renamer_cli::report::humanize;
///
/// assert_eq!(humanize(Duration::from_secs(3_661)), "1 hour 1 minute 1 second");
/// assert_eq!(humanize(Duration::from_millis(250)), "0 seconds");
/// ```
#[must_use]
pub fn humanize(elapsed: Duration) -> String {
    let mut rest = elapsed.as_secs();
    if rest == 0 {
        return "0 seconds".to_string();
    }
    let mut parts = Vec::new();
    for (per, plural, singular) in UNITS {
        if rest == 0 {
            break;
        }
        let n = rest % per;
        rest /= per;
        if n > 0 {
            parts.push(format!("{n} {}", if n == 1 { singular } else { plural }));
        }
    }
    parts.reverse();
    parts.join(" ")
}

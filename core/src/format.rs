use alloc::format;
use alloc::string::String;

use crate::*;

/// Formats a duration as seconds with two decimals, rounding half up: `2345` becomes `"2.35"`.
pub fn format_time(ms: Millis) -> String {
    let hundredths = ms.saturating_add(5) / 10;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

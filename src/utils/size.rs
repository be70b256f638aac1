//! Byte count formatting for file listings

const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with decimal (1000-based) units
///
/// Whole kilobytes print without decimals, larger units keep one decimal.
///
/// # Examples
/// ```
/// use fb64::utils::size::format_byte_count;
///
/// assert_eq!(format_byte_count(0), "Zero KB");
/// assert_eq!(format_byte_count(512), "512 bytes");
/// assert_eq!(format_byte_count(2048), "2 KB");
/// assert_eq!(format_byte_count(1_048_576), "1.0 MB");
/// ```
pub fn format_byte_count(bytes: i64) -> String {
    if bytes <= 0 {
        return "Zero KB".to_string();
    }
    if bytes == 1 {
        return "1 byte".to_string();
    }
    if bytes < 1000 {
        return format!("{} bytes", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    // 999.6 KB rounds to "1000 KB"; move up a unit instead
    if unit < UNITS.len() - 1 && round_to(value, decimals(unit)) >= 1000.0 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.*} {}", decimals(unit), value, UNITS[unit])
}

/// Whole kilobytes, one decimal for larger units
fn decimals(unit: usize) -> usize {
    if unit == 1 {
        0
    } else {
        1
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

//! Shared formatting helpers for table output.
//!
//! All pure formatting functions (no terminal styles, no layout) live here.
//! Widths are minimums: a value wider than its column is emitted in full
//! rather than truncated, so no significant digits are ever lost.

/// Rounds `value` to `decimals` fractional digits (half away from zero) and
/// right-aligns it with leading spaces to at least `width` characters.
pub fn format_fixed(value: f64, width: usize, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:>width$.decimals$}")
}

/// Format a picosecond count as a human-scaled duration.
///
/// Picks the largest unit with a mantissa >= 1 and renders it with a
/// 2-decimal mantissa, padded so the number plus unit suffix occupies
/// 10 columns. Exceptions: zero renders as `""` (no data yet), and
/// sub-nanosecond values render as a bare integer plus `" ps"`.
///
/// `"   1.00 ns"`, `"    1.00 s"`, `"    1.50 h"`
pub fn format_time(picoseconds: u64) -> String {
    const NS: u64 = 1_000;
    const US: u64 = 1_000_000;
    const MS: u64 = 1_000_000_000;
    const SECOND: u64 = 1_000_000_000_000;
    const MINUTE: u64 = 60 * SECOND;
    const HOUR: u64 = 60 * MINUTE;

    if picoseconds == 0 {
        return String::new();
    }
    let f = picoseconds as f64;
    if picoseconds >= HOUR {
        format!("{} h", format_fixed(f / HOUR as f64, 8, 2))
    } else if picoseconds >= MINUTE {
        format!("{} m", format_fixed(f / MINUTE as f64, 8, 2))
    } else if picoseconds >= SECOND {
        format!("{} s", format_fixed(f / SECOND as f64, 8, 2))
    } else if picoseconds >= MS {
        format!("{} ms", format_fixed(f / MS as f64, 7, 2))
    } else if picoseconds >= US {
        format!("{} us", format_fixed(f / US as f64, 7, 2))
    } else if picoseconds >= NS {
        format!("{} ns", format_fixed(f / NS as f64, 7, 2))
    } else {
        format!("{picoseconds} ps")
    }
}

/// Format a second count as `HH:MM:SS`.
///
/// Fields are zero-padded to 2 digits; hours widen past 99 rather than wrap.
pub fn sec_to_time(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Divide `a` by `b`, returning exactly 0.0 when `b` is 0.
pub fn divide(a: u64, b: u64) -> f64 {
    if b == 0 {
        return 0.0;
    }
    a as f64 / b as f64
}

/// Join schema and table into a `schema.table` display identifier.
///
/// If either side is empty the other is returned alone, so an empty pair
/// yields `""` with no stray dot.
pub fn qualified_table_name(schema: &str, table: &str) -> String {
    if schema.is_empty() {
        return table.to_string();
    }
    if table.is_empty() {
        return schema.to_string();
    }
    format!("{schema}.{table}")
}

/// Cell values that mean "nothing recorded".
const EMPTY_MARKERS: [&str; 3] = ["", "-", "None"];

/// Parses a spreadsheet stat cell into an integer.
///
/// Game stats are always integers, so both `,` and `.` are thousands
/// separators and never decimal points; `"1,234,567"` and `"1.234.567"` give
/// the same value. Spaces (including non-breaking ones) are ignored as well.
/// `""`, `"-"` and `"None"` are zero. Anything else that does not parse is
/// also zero: sheet data is hand-maintained and a bad cell must not fail a
/// whole report.
///
/// # Arguments
/// - `value` - Raw cell text
///
/// # Returns
/// - `i64` - Parsed value, or 0
pub fn parse_stat(value: &str) -> i64 {
    let trimmed = value.trim();
    if EMPTY_MARKERS.contains(&trimmed) {
        return 0;
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ',' | '.' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect();

    digits.parse::<i64>().unwrap_or(0)
}

/// Parses a Discord snowflake from a raw ID or a mention.
///
/// Accepts `123`, `<#123>`, `<@&123>`, `<@123>` and `<@!123>`.
pub fn parse_snowflake(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('<')
        .and_then(|v| v.strip_suffix('>'))
        .map(|v| v.trim_start_matches(['#', '@', '&', '!']))
        .unwrap_or(trimmed);

    inner.parse::<u64>().ok()
}

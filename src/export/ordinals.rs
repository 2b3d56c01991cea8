//! English ordinal labels ("1st", "2nd", ...)

/// Format a 1-based position as an English ordinal
///
/// `n % 100` in 10..=20 always takes "th"; otherwise the last digit picks
/// "st", "nd" or "rd", falling back to "th". Zero yields "0th".
pub fn ordinal(n: usize) -> String {
    let suffix = if (10..=20).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

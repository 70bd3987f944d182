//! Formatting utilities for terminal output

/// Badge showing a word's letter count
///
/// Uses circled digits for 1-20, falling back to a parenthesized number.
#[must_use]
pub fn letter_badge(count: usize) -> String {
    match count {
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// Spread a word's letters out for a headline, e.g. "S I L K"
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_badge_small_counts() {
        assert_eq!(letter_badge(1), "①");
        assert_eq!(letter_badge(4), "④");
        assert_eq!(letter_badge(20), "⑳");
    }

    #[test]
    fn letter_badge_large_counts() {
        assert_eq!(letter_badge(0), "(0)");
        assert_eq!(letter_badge(21), "(21)");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("silk"), "S I L K");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 8, 8);
        assert_eq!(bar, "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(8, 8, 8);
        assert_eq!(bar, "████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(4, 8, 8);
        assert_eq!(bar, "████░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}

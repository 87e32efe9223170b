//! Edit constraints: which codepoints may enter the buffer.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Lowest codepoint of the extended/international band accepted as-is
pub const EXTENDED_THRESHOLD: u32 = 160;

/// Printable ASCII band (space through DEL) plus everything at or above the
/// extended threshold. C0 and C1 control characters are rejected.
pub fn is_printable(ch: char) -> bool {
    let cp = ch as u32;
    (32..=127).contains(&cp) || cp >= EXTENDED_THRESHOLD
}

/// Constraints that limit what may be inserted into the buffer.
#[derive(Debug, Clone)]
pub struct EditConstraints {
    /// Maximum length in codepoints (None = unlimited)
    pub max_length: Option<usize>,

    /// Returns true if the character is allowed
    pub char_filter: CharFilter,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::printable()
    }
}

impl EditConstraints {
    /// Printable band, no length cap
    pub fn printable() -> Self {
        Self {
            max_length: None,
            char_filter: is_printable,
        }
    }

    /// Printable band capped at `max` codepoints
    pub fn with_max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            char_filter: is_printable,
        }
    }

    /// Digits only (numeric entry fields)
    pub fn numeric() -> Self {
        Self {
            max_length: None,
            char_filter: |c| c.is_ascii_digit(),
        }
    }

    pub fn is_char_allowed(&self, ch: char) -> bool {
        (self.char_filter)(ch)
    }

    /// Check if inserting would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        match self.max_length {
            Some(max) => current_len + insert_len > max,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_band() {
        assert!(is_printable(' '));
        assert!(is_printable('a'));
        assert!(is_printable('~'));
        assert!(is_printable('\u{7f}'));
        assert!(!is_printable('\n'));
        assert!(!is_printable('\t'));
        assert!(!is_printable('\u{1f}'));
    }

    #[test]
    fn test_c1_controls_rejected_extended_accepted() {
        assert!(!is_printable('\u{80}'));
        assert!(!is_printable('\u{9f}'));
        assert!(is_printable('\u{a0}'));
        assert!(is_printable('é'));
        assert!(is_printable('日'));
    }

    #[test]
    fn test_numeric_constraints() {
        let c = EditConstraints::numeric();
        assert!(c.is_char_allowed('0'));
        assert!(c.is_char_allowed('9'));
        assert!(!c.is_char_allowed('a'));
    }

    #[test]
    fn test_max_length() {
        let c = EditConstraints::with_max_length(4);
        assert!(!c.would_exceed_max_length(3, 1));
        assert!(c.would_exceed_max_length(4, 1));
        assert!(!EditConstraints::printable().would_exceed_max_length(1_000_000, 1));
    }
}

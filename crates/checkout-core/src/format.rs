//! Card Field Formatting
//!
//! Keystroke formatters for the three card inputs. Each takes the raw text
//! currently in the control and returns the text to store back.

/// Card number cap: 16 digits plus 3 separators.
pub const CARD_NUMBER_MAX_LEN: usize = 19;
/// Expiry cap: `MM/YY`.
pub const EXPIRY_MAX_LEN: usize = 5;
/// CVC cap.
pub const CVC_MAX_LEN: usize = 3;

const CARD_GROUP_LEN: usize = 4;
const CARD_RUN_MIN: usize = 4;
const CARD_RUN_MAX: usize = 16;

/// Keep only ASCII digits (whitespace is dropped along with everything else).
fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Group a card number into blocks of four.
///
/// Uses the first run of 4 to 16 digits. When there is no such run the
/// input is returned untouched so in-progress text is not mangled.
pub fn format_card_number(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < CARD_RUN_MIN {
        return value.to_string();
    }

    // digits is pure ASCII, so byte slicing is char slicing
    let run = &digits[..digits.len().min(CARD_RUN_MAX)];
    run.as_bytes()
        .chunks(CARD_GROUP_LEN)
        .filter_map(|group| std::str::from_utf8(group).ok())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an expiry date as `MM/YY`.
///
/// The slash appears as soon as two digits are present. Digits past the
/// fourth are dropped.
pub fn format_expiry(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < 2 {
        return digits;
    }
    let year_end = digits.len().min(4);
    format!("{}/{}", &digits[..2], &digits[2..year_end])
}

/// Digits only, at most three of them.
pub fn format_cvc(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(CVC_MAX_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
        assert_eq!(format_card_number("4111"), "4111");
        assert_eq!(format_card_number("411111"), "4111 11");
    }

    #[test]
    fn test_card_number_without_run_is_unchanged() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("12"), "12");
        assert_eq!(format_card_number("abc"), "abc");
        assert_eq!(format_card_number("1a2b3"), "1a2b3");
    }

    #[test]
    fn test_card_number_strips_noise() {
        assert_eq!(format_card_number("4111-1111 11x11"), "4111 1111 1111");
        assert_eq!(format_card_number(" 4 1 1 1 2"), "4111 2");
    }

    #[test]
    fn test_card_number_takes_first_sixteen() {
        assert_eq!(format_card_number("42424242424242421234"), "4242 4242 4242 4242");
    }

    #[test]
    fn test_card_number_idempotent() {
        for input in ["4111 1111 1111 1111", "4242 42", "1234 5678 9012"] {
            let once = format_card_number(input);
            assert_eq!(once, input);
            assert_eq!(format_card_number(&once), once);
        }
    }

    #[test]
    fn test_expiry() {
        assert_eq!(format_expiry(""), "");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("1230"), "12/30");
        assert_eq!(format_expiry("12/30"), "12/30");
        assert_eq!(format_expiry("123045"), "12/30");
    }

    #[test]
    fn test_expiry_backspace_over_slash() {
        // deleting the year leaves "12/" which re-formats to itself
        assert_eq!(format_expiry("12/"), "12/");
        assert_eq!(format_expiry("1/"), "1");
    }

    #[test]
    fn test_cvc() {
        assert_eq!(format_cvc("12a3x4"), "123");
        assert_eq!(format_cvc("9"), "9");
        assert_eq!(format_cvc("abc"), "");
    }
}

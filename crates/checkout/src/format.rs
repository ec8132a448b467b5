//! Input formatting for card number and expiry fields.

/// Group card digits in blocks of four: `"4242424242424242"` → `"4242 4242 4242 4242"`.
///
/// Non-digits are dropped and at most 16 digits are kept. With fewer than four
/// digits the input is returned unchanged.
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).take(16).collect();
    if digits.len() < 4 {
        return value.to_string();
    }
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"1229"` → `"12/29"`; a partial entry of one digit is left as typed.
pub fn format_expiry_date(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 2 {
        return digits;
    }
    let month = &digits[..2];
    let year = &digits[2..digits.len().min(4)];
    format!("{month}/{year}")
}

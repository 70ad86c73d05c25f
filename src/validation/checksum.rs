//! Luhn (mod-10) checksum.

/// Check the Luhn checksum of a card number.
///
/// Every second digit from the right is doubled (minus 9 when it exceeds 9)
/// and the sum must be a multiple of 10. Empty input and input containing
/// any non-digit character are invalid as a whole; nothing is stripped.
pub fn check_checksum(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, b) in number.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(b - b'0');
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}

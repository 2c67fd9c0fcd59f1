//! Masked capital hints.

/// Character shown in place of a hidden letter.
pub const PLACEHOLDER: char = '_';

/// Masks a capital name, keeping its length in characters.
///
/// Names of up to three characters reveal only the first character. Longer
/// names also reveal the character at index `len / 2`.
#[must_use]
pub fn mask_capital(capital: &str) -> String {
    let chars: Vec<char> = capital.chars().collect();
    let len = chars.len();
    let middle = len / 2;

    chars
        .iter()
        .enumerate()
        .map(|(index, &c)| {
            if index == 0 || (len > 3 && index == middle) {
                c
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

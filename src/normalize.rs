//! Text normalization for numeric input.
//!
//! Terminal input routinely arrives with full-width digits or typographic
//! dashes (common with East Asian input methods). Compatibility
//! normalization collapses those to their ASCII equivalents so the numeric
//! parsers only ever see ASCII literals.

use unicode_normalization::UnicodeNormalization;

use crate::constants::DASH_VARIANTS;

/// Normalize a raw input token to its ASCII-equivalent form.
///
/// Applies Unicode NFKC normalization (full-width digits and punctuation
/// collapse to ASCII), then folds the dash/minus variants in
/// [`DASH_VARIANTS`] to the ASCII minus sign. Total and deterministic;
/// text that is already ASCII passes through unchanged.
pub fn normalize_to_ascii(text: &str) -> String {
    text.nfkc()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(normalize_to_ascii("420.024"), "420.024");
        assert_eq!(normalize_to_ascii("-17"), "-17");
        assert_eq!(normalize_to_ascii(""), "");
    }

    #[test]
    fn full_width_digits_collapse() {
        assert_eq!(normalize_to_ascii("４２０．０２４"), "420.024");
        assert_eq!(normalize_to_ascii("１９７０"), "1970");
    }

    #[test]
    fn full_width_minus_becomes_ascii() {
        assert_eq!(normalize_to_ascii("－４２"), "-42");
    }

    #[test]
    fn dash_variants_fold_to_minus() {
        for dash in ['ー', '―', '—', '‐'] {
            let input = format!("{dash}7");
            assert_eq!(normalize_to_ascii(&input), "-7", "failed for {dash:?}");
        }
    }

    #[test]
    fn non_numeric_text_survives() {
        assert_eq!(normalize_to_ascii("Java"), "Java");
    }
}

use std::sync::LazyLock;

use regex::Regex;

/// Grams assumed for one bowl, whatever count precedes it.
pub const GRAMS_PER_BOWL: f64 = 150.0;
pub const GRAMS_PER_CUP: f64 = 200.0;
pub const GRAMS_PER_TBSP: f64 = 15.0;
pub const GRAMS_PER_TSP: f64 = 5.0;
pub const GRAMS_PER_PIECE: f64 = 10.0;
pub const GRAMS_PER_KG: f64 = 1000.0;
pub const GRAMS_MEDIUM: f64 = 100.0;
pub const GRAMS_SMALL: f64 = 75.0;
pub const GRAMS_LARGE: f64 = 150.0;

// Alternation order matters: at a given position the leftmost token wins.
// Units fold case over ASCII only, so look-alikes such as the Kelvin sign
// never stand in for a unit letter.
static PORTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?i-u:(g|grams?|kg|bowl|cup|tbsp|tsp|pieces?|medium|small|large))")
        .expect("portion pattern is a valid regex")
});

/// Converts a free-text portion into grams.
///
/// Only the first `<number><unit>` occurrence is read, so `"2 medium, plus
/// extra"` parses as two medium items and `"1 bowl (50g dry oats)"` as one
/// bowl. Returns `None` for absent, empty or unrecognised text. Zero is a
/// valid result and is not the same as unparseable.
pub fn parse_portion(portion: Option<&str>) -> Option<f64> {
    let portion = portion.filter(|text| !text.is_empty())?;
    let captures = PORTION_PATTERN.captures(portion)?;

    let amount: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str().to_ascii_lowercase();

    let grams = match unit.as_str() {
        "kg" => amount * GRAMS_PER_KG,
        "bowl" => GRAMS_PER_BOWL,
        "cup" => GRAMS_PER_CUP,
        "tbsp" => GRAMS_PER_TBSP,
        "tsp" => GRAMS_PER_TSP,
        "g" | "gram" | "grams" => amount,
        "piece" | "pieces" => amount * GRAMS_PER_PIECE,
        "medium" => GRAMS_MEDIUM,
        "small" => GRAMS_SMALL,
        "large" => GRAMS_LARGE,
        _ => return None,
    };

    Some(grams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_grams() {
        assert_eq!(parse_portion(Some("100g")), Some(100.0));
        assert_eq!(parse_portion(Some("150 g")), Some(150.0));
        assert_eq!(parse_portion(Some("80 grams")), Some(80.0));
        assert_eq!(parse_portion(Some("2.5g")), Some(2.5));
    }

    #[test]
    fn test_parse_kilograms() {
        assert_eq!(parse_portion(Some("1kg")), Some(1000.0));
        assert_eq!(parse_portion(Some("0.5 KG")), Some(500.0));
    }

    #[test]
    fn test_parse_pieces() {
        assert_eq!(parse_portion(Some("2 pieces")), Some(20.0));
        assert_eq!(parse_portion(Some("1 piece")), Some(10.0));
        assert_eq!(parse_portion(Some("10 pieces")), Some(100.0));
    }

    #[test]
    fn test_volume_units_ignore_count() {
        for count in ["1", "2", "3.5", "10"] {
            assert_eq!(parse_portion(Some(&format!("{count} bowl"))), Some(150.0));
            assert_eq!(parse_portion(Some(&format!("{count} cup"))), Some(200.0));
            assert_eq!(parse_portion(Some(&format!("{count} tbsp"))), Some(15.0));
            assert_eq!(parse_portion(Some(&format!("{count} tsp"))), Some(5.0));
        }
    }

    #[test]
    fn test_size_words_ignore_count() {
        assert_eq!(parse_portion(Some("1 medium")), Some(100.0));
        assert_eq!(parse_portion(Some("2 medium")), Some(100.0));
        assert_eq!(parse_portion(Some("1 small bowl")), Some(75.0));
        assert_eq!(parse_portion(Some("3 Large")), Some(150.0));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(parse_portion(Some("1 bowl (50g dry oats)")), Some(150.0));
        assert_eq!(parse_portion(Some("2 medium, plus extra 50g")), Some(100.0));
        assert_eq!(parse_portion(Some("about 1 cup cooked")), Some(200.0));
    }

    #[test]
    fn test_unparseable_portions() {
        assert_eq!(parse_portion(None), None);
        assert_eq!(parse_portion(Some("")), None);
        assert_eq!(parse_portion(Some("Salad")), None);
        assert_eq!(parse_portion(Some("a handful")), None);
        assert_eq!(parse_portion(Some("some bowls")), None);
    }

    #[test]
    fn test_zero_is_parsed() {
        assert_eq!(parse_portion(Some("0g")), Some(0.0));
    }

    #[test]
    fn test_unit_case_folding_is_ascii_only() {
        assert_eq!(parse_portion(Some("1 KG")), Some(1000.0));
        assert_eq!(parse_portion(Some("2 Pieces")), Some(20.0));
        // Kelvin sign is not a K.
        assert_eq!(parse_portion(Some("1 \u{212A}g")), None);
        // Long s is not an s, so only "piece" is read.
        assert_eq!(parse_portion(Some("2 piece\u{17F}")), Some(20.0));
    }
}

//! Coordinate extraction from Google Maps URLs.
//!
//! Google Maps links carry coordinates in several shapes depending on how
//! they were produced (share dialog, address bar, embedded place marker).
//! Extraction runs a fixed, ordered pattern table against the string and
//! returns the first match; a string may satisfy more than one pattern, so
//! the table order is the priority order.

use regex::Regex;
use std::sync::LazyLock;

use crate::geo::Coordinate;

/// Optionally `-`-signed decimal number. No scientific notation, no
/// leading `+`.
const NUM: &str = r"-?\d+(?:\.\d+)?";

/// Recognized URL shapes, in priority order:
///
/// 1. `/maps/search/<lat>,+<lng>` (plus-encoded separator)
/// 2. `/maps/search/<lat>, <lng>` (whitespace-tolerant separator)
/// 3. `@<lat>,<lng>` (viewport marker)
/// 4. `?q=<lat>,<lng>`
/// 5. `!3d<lat>!4d<lng>` (internal place marker)
/// 6. `?ll=<lat>,<lng>` (comma may be percent-encoded as `%2C`)
///
/// Every pattern captures latitude in group 1 and longitude in group 2.
static PATTERNS: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    let pattern = |re: String| Regex::new(&re).unwrap();
    [
        pattern(format!(r"/maps/search/({NUM}),\+({NUM})")),
        pattern(format!(r"/maps/search/({NUM}),\s*({NUM})")),
        pattern(format!(r"@({NUM}),({NUM})")),
        pattern(format!(r"[?&]q=({NUM}),({NUM})")),
        pattern(format!(r"!3d({NUM})!4d({NUM})")),
        pattern(format!(r"[?&]ll=({NUM})(?:%2C|,)({NUM})")),
    ]
});

/// Extracts a coordinate pair from a URL-shaped string.
///
/// The input does not have to be a valid URL. Returns `None` when no
/// pattern matches or a captured token does not convert to a finite
/// float; "no coordinates found" is an expected outcome, not an error.
pub fn extract(url: &str) -> Option<Coordinate> {
    PATTERNS.iter().find_map(|re| {
        let caps = re.captures(url)?;
        let lat: f64 = caps[1].parse().ok()?;
        let lng: f64 = caps[2].parse().ok()?;
        (lat.is_finite() && lng.is_finite()).then_some(Coordinate { lat, lng })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_extracts(url: &str, lat: f64, lng: f64) {
        let coordinate = extract(url).unwrap_or_else(|| panic!("no match for {url}"));
        assert_eq!(coordinate, Coordinate { lat, lng }, "wrong pair for {url}");
    }

    #[test]
    fn test_maps_search_plus_separator() {
        assert_extracts(
            "https://www.google.com/maps/search/52.2297,+21.0122?shorturl=1",
            52.2297,
            21.0122,
        );
    }

    #[test]
    fn test_maps_search_space_separator() {
        assert_extracts(
            "https://www.google.com/maps/search/52.2297, 21.0122",
            52.2297,
            21.0122,
        );
        // Separator may also be a bare comma.
        assert_extracts(
            "https://www.google.com/maps/search/-33.8688,151.2093",
            -33.8688,
            151.2093,
        );
    }

    #[test]
    fn test_at_viewport_marker() {
        assert_extracts(
            "https://www.google.com/maps/place/Warsaw/@52.2297,21.0122,12z/data=!4m6",
            52.2297,
            21.0122,
        );
    }

    #[test]
    fn test_q_query_parameter() {
        assert_extracts("https://maps.google.com/?q=52.2297,21.0122", 52.2297, 21.0122);
        assert_extracts(
            "https://maps.google.com/maps?hl=en&q=-12.5,130.8",
            -12.5,
            130.8,
        );
    }

    #[test]
    fn test_3d4d_place_marker() {
        assert_extracts(
            "https://www.google.com/maps/place/X/data=!8m2!3d52.2297!4d21.0122",
            52.2297,
            21.0122,
        );
    }

    #[test]
    fn test_ll_query_parameter() {
        assert_extracts("https://maps.google.com/?ll=52.2297,21.0122&z=8", 52.2297, 21.0122);
    }

    #[test]
    fn test_ll_percent_encoded_comma() {
        assert_extracts("https://maps.google.com/?ll=52.2297%2C21.0122", 52.2297, 21.0122);
    }

    #[test]
    fn test_priority_order_is_table_order_not_string_order() {
        // `q=` appears first in the string, but the `@` pattern sits earlier
        // in the table and must win.
        let url = "https://maps.google.com/maps?q=10.0,20.0/@52.2297,21.0122,12z";
        assert_eq!(
            extract(url),
            Some(Coordinate {
                lat: 52.2297,
                lng: 21.0122
            })
        );
    }

    #[test]
    fn test_search_path_beats_viewport_marker() {
        let url = "https://www.google.com/maps/search/1.5,+2.5/@52.2297,21.0122,12z";
        assert_eq!(extract(url), Some(Coordinate { lat: 1.5, lng: 2.5 }));
    }

    #[test]
    fn test_negative_and_integer_tokens() {
        assert_extracts("x@-52,-21y", -52.0, -21.0);
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("not a url at all"), None);
        assert_eq!(extract("https://example.com/?q=warsaw"), None);
    }

    #[test]
    fn test_malformed_numeric_token_does_not_match() {
        // Two decimal points leave no position where `lat,lng` lines up.
        assert_eq!(extract("https://g/@52.22.97,21.0122"), None);
    }

    #[test]
    fn test_leading_plus_is_rejected() {
        assert_eq!(extract("https://maps.google.com/?q=+52.2297,21.0122"), None);
    }

    #[test]
    fn test_scientific_notation_is_not_recognized() {
        // The exponent breaks the `lat,lng` shape, so nothing matches.
        assert_eq!(extract("https://g/?q=1e5,2.5"), None);
    }
}

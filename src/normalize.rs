use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_RE: Regex = Regex::new(r"[ \t\r\n]+").unwrap();
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Collapses every whitespace run into a single space and trims the ends.
pub fn normalize_spaces(s: &str) -> String {
    SPACE_RE.replace_all(s, " ").trim_matches(' ').to_string()
}

/// Lowercase snake-case key. Returns an empty string when nothing
/// alphanumeric is left, which callers treat as "drop".
pub fn normalize_key(key: &str) -> String {
    let lower = key.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// Like `normalize_key`, but apostrophes are dropped first so that
/// "Isildur's Bane" becomes `isildurs_bane`.
pub fn sanitize_filename(s: &str) -> String {
    normalize_key(&s.replace('\'', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "The One Ring, Isildur's Bane",
        "Sam's Pack!",
        "  Line1\n\tLine2  ",
        "__already_snake__",
        "Ünïcode Ëlf",
        "Card Type",
        "'''",
        "a\r\n\r\nb",
    ];

    #[test]
    fn spaces_collapse_and_trim() {
        assert_eq!(normalize_spaces("  Line1\n\tLine2  "), "Line1 Line2");
        assert_eq!(normalize_spaces("a\r\n\r\nb"), "a b");
        assert_eq!(normalize_spaces(""), "");
        assert_eq!(normalize_spaces(" \t\n"), "");
    }

    #[test]
    fn spaces_keep_punctuation_and_case() {
        assert_eq!(normalize_spaces("Strength:  +1 (Max)"), "Strength: +1 (Max)");
    }

    #[test]
    fn key_is_snake_case() {
        assert_eq!(normalize_key("Card Type"), "card_type");
        assert_eq!(normalize_key("  Game-Text:  "), "game_text");
        assert_eq!(normalize_key("Site #"), "site");
        assert_eq!(normalize_key("!!!"), "");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn key_splits_on_apostrophe() {
        assert_eq!(normalize_key("Isildur's Bane"), "isildur_s_bane");
    }

    #[test]
    fn filename_drops_apostrophes_before_collapse() {
        assert_eq!(
            sanitize_filename("The One Ring, Isildur's Bane"),
            "the_one_ring_isildurs_bane"
        );
        assert_eq!(sanitize_filename("Sam's Pack!"), "sams_pack");
        assert_eq!(sanitize_filename("'''"), "");
    }

    #[test]
    fn normalizers_are_idempotent() {
        for s in SAMPLES {
            let once = normalize_spaces(s);
            assert_eq!(normalize_spaces(&once), once, "normalize_spaces({:?})", s);

            let once = normalize_key(s);
            assert_eq!(normalize_key(&once), once, "normalize_key({:?})", s);

            let once = sanitize_filename(s);
            assert_eq!(sanitize_filename(&once), once, "sanitize_filename({:?})", s);
        }
    }

    #[test]
    fn keys_match_snake_case_shape() {
        let shape = Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)*$").unwrap();
        for s in SAMPLES {
            let key = normalize_key(s);
            if !key.is_empty() {
                assert!(shape.is_match(&key), "{:?} -> {:?}", s, key);
            }
        }
    }
}

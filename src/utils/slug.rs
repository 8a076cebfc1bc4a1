//! Slug derivation for page URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in a stored slug.
pub static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_]+").unwrap());

/// Maximum stored slug length.
pub const MAX_SLUG_LEN: usize = 255;

/// Derives a URL slug from a title.
///
/// Letters are lowercased, accents on common Latin letters are dropped and any
/// run of other characters becomes a single hyphen. The result may be empty when
/// the title holds no usable characters.
///
/// ```
/// use visualist::utils::slug::slugify;
///
/// assert_eq!(slugify("Hull-House Museum"), "hull-house-museum");
/// assert_eq!(slugify("  Café  Mokka! "), "cafe-mokka");
/// ```
pub fn slugify(title: &str) -> String {
    let folded: String = title.chars().map(fold_char).collect::<String>().to_lowercase();
    let slug = SEPARATORS.replace_all(&folded, "-");
    let slug = slug.trim_matches('-');
    slug.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

/// Returns true if `slug` can be stored as is.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= MAX_SLUG_LEN && SLUG_REGEX.is_match(slug)
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("People"), "people");
        assert_eq!(slugify("Art Institute of Chicago"), "art-institute-of-chicago");
        assert_eq!(slugify("Jazz & Blues: 1920s"), "jazz-blues-1920s");
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Frida Kahlo Calderón"), "frida-kahlo-calderon");
    }

    #[test]
    fn test_slugify_empty_when_nothing_usable() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_truncates() {
        let long = "a".repeat(300);
        assert_eq!(slugify(&long).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("hull-house_2"));
        assert!(!is_valid_slug("Hull House"));
        assert!(!is_valid_slug(""));
    }
}

//! Title to URL-slug conversion.

use deunicode::deunicode;

/// Convert a title into a URL slug.
///
/// Transliterates to ASCII, lowercases, folds every run of
/// non-alphanumeric characters into a single `-`, and trims the edges.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What is peer support?"), "what-is-peer-support");
    }

    #[test]
    fn test_accents_transliterated() {
        assert_eq!(slugify("Privé vragen"), "prive-vragen");
        assert_eq!(slugify("Ëén"), "een");
    }

    #[test]
    fn test_punctuation_folded() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("...edges..."), "edges");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}

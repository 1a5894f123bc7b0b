use lazy_static::lazy_static;
use regex::Regex;

/// Turns a title or file name into a lowercase, hyphen-separated slug.
/// Accents are transliterated, everything else non-alphanumeric becomes
/// a separator, and runs of separators collapse into one hyphen.
pub fn slugify(text: &str) -> String {
    let text = unidecode::unidecode(text);

    let mapped: String = text.chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();

    let mut slug = String::new();
    let mut prev_char = None;

    for c in mapped.chars() {
        if c != '-' || prev_char != Some('-') {
            slug.push(c);
        }
        prev_char = Some(c);
    }

    slug.trim_matches('-').to_string()
}

/// An explicit slug from frontmatter has to already be in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    }
    SLUG_REGEX.is_match(slug)
}

//! Turning directory names into storefront titles.

/// Title suggested for a new storefront when there is no directory name to derive one from.
pub const DEFAULT_STOREFRONT_TITLE: &str = "Hydrogen Storefront";

/// Humanize a path segment into a title.
///
/// Words are split on `-`, `_`, `.`, whitespace, and lower-to-upper camel-case
/// boundaries. Each word gets an upper-cased first character and the words are
/// joined with single spaces. Input with no words yields
/// [`DEFAULT_STOREFRONT_TITLE`].
///
/// ```
/// use hydrogen_link_core::humanize;
///
/// assert_eq!(humanize("my-hydrogen_app"), "My Hydrogen App");
/// assert_eq!(humanize("snowdevilStore"), "Snowdevil Store");
/// assert_eq!(humanize("---"), "Hydrogen Storefront");
/// ```
#[must_use]
pub fn humanize(segment: &str) -> String {
    let words = split_words(segment);
    if words.is_empty() {
        return DEFAULT_STOREFRONT_TITLE.to_owned();
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(segment: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in segment.chars() {
        if c == '-' || c == '_' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let camel_boundary =
            c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if camel_boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

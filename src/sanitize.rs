//! Input sanitization for user-provided strings.

/// Remove markup tags from `text`.
///
/// A tag is everything from a `<` up to and including the next `>`. An
/// unclosed `<` removes the remainder of the string, so a truncated tag can
/// never survive into the database.
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_tag = false;

    for character in text.chars() {
        match character {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            character if !in_tag => output.push(character),
            _ => {}
        }
    }

    output
}

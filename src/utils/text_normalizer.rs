//! Transliteration of non-Latin city names.

use deunicode::deunicode;

/// Maps `name` to a best-effort Latin-letter approximation.
///
/// Pure and deterministic; input made only of ASCII is returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(transliterate("Київ"), "Kyiv");
/// assert_eq!(transliterate("Kyiv"), "Kyiv");
/// ```
pub fn transliterate(name: &str) -> String {
    if name.is_ascii() {
        return name.to_string();
    }
    deunicode(name)
}

/// Returns true when `name` contains characters outside ASCII.
pub fn needs_transliteration(name: &str) -> bool {
    !name.is_ascii()
}

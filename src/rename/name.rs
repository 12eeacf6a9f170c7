//! Character-level helpers shared by the transforms and the resolver.
//!
//! Lengths are counted in characters, not bytes.

/// The placeholder separator every folded character becomes.
pub const SEPARATOR: char = '-';

/// Split `name` into stem and extension (extension keeps its leading dot).
///
/// The extension starts at the last `.` that is neither the first nor the last
/// character, so `.bashrc` and `archive.` have none.
///
/// # Examples
///
/// ```
/// use renamer_cli::rename::name::split_extension;
///
/// assert_eq!(split_extension("a.b.txt"), ("a.b", ".txt"));
/// assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
#[must_use]
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 && i + 1 < name.len() => name.split_at(i),
        _ => (name, ""),
    }
}

/// Replace every `.` with the placeholder separator.
#[must_use]
pub fn points_to_separators(s: &str) -> String {
    s.replace('.', "-")
}

/// Length of `s` in characters.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The first `n` characters of `s` (all of it when shorter).
#[must_use]
pub fn take_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| s.split_at(i).0)
}

/// Whether `name` can be used as a directory entry name.
#[must_use]
pub fn is_usable(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".."
}

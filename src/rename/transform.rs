//! Individual naming rules.
//!
//! Each rule is a [`Transform`]: a pure function from the current candidate
//! name (plus read-only facts about the [`Entry`]) to a new candidate, or
//! `None` to drop the entry from this pass. Rules never look at each other;
//! ordering belongs to the [`Pipeline`](super::Pipeline).

use std::fmt;

use chrono::{DateTime, Local};

use super::Entry;
use super::name::{SEPARATOR, char_len, points_to_separators, split_extension, take_chars};

/// A single renaming rule.
pub trait Transform: fmt::Debug {
    /// Short rule name, used in debug logs.
    fn name(&self) -> &'static str;

    /// Apply the rule to `name`. `None` omits the entry from this pass.
    fn apply(&self, name: &str, entry: &Entry) -> Option<String>;
}

/// Lower-cases every character (Unicode-aware).
#[derive(Debug, Clone, Copy, Default)]
pub struct Downcase;

impl Transform for Downcase {
    fn name(&self) -> &'static str {
        "downcase"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        Some(name.to_lowercase())
    }
}

/// Replaces every `.` except a regular file's extension dot with `-`.
///
/// Must run first: later rules treat `-` as the only word separator and the
/// remaining `.` as the extension boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionPointGuard;

impl Transform for ExtensionPointGuard {
    fn name(&self) -> &'static str {
        "point-guard"
    }

    fn apply(&self, name: &str, entry: &Entry) -> Option<String> {
        if entry.keeps_extension() {
            let (stem, ext) = split_extension(name);
            Some(format!("{}{ext}", points_to_separators(stem)))
        } else {
            Some(points_to_separators(name))
        }
    }
}

/// Punctuation and symbols folded into the separator. `&`, `.` and `№` are
/// handled elsewhere.
const FOLDED: &[char] = &[
    ' ', '(', ')', '{', '}', '[', ']', '<', '>', ',', '~', '\'', '"', '!', '_', '#', '@', '=',
    '+', ';', ':', '*', '^', '$', '%', '|', '?', '`', '„', '“', '”', '‘', '’', '«', '»', '—',
    '–', '·', '‡', '…',
];

/// Folds punctuation and symbols into the placeholder separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialCharFold;

impl Transform for SpecialCharFold {
    fn name(&self) -> &'static str {
        "fold"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        Some(
            name.chars()
                .map(|c| if FOLDED.contains(&c) { SEPARATOR } else { c })
                .collect(),
        )
    }
}

/// ASCII replacement for a character, `Some("")` to delete it, `None` to keep it.
const fn ascii_for(c: char) -> Option<&'static str> {
    Some(match c {
        'а' | 'á' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'э' | 'é' => "e",
        'з' => "z",
        'и' | 'ĭ' => "i",
        'й' | 'ы' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' | 'ö' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' | 'ü' => "u",
        'ф' => "f",
        'х' => "h",
        'ё' => "jo",
        'ж' => "zh",
        'ц' => "tz",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "szh",
        'ю' => "ju",
        'я' => "ya",
        'ъ' | 'ь' | '¨' => "",
        '&' => "-and-",
        '№' => "-num-",
        _ => return None,
    })
}

/// Maps Cyrillic letters and a few Latin diacritics to ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterate;

impl Transform for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        let mut out = String::with_capacity(name.len());
        for c in name.chars() {
            match ascii_for(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        }
        Some(out)
    }
}

/// Literal find/replace. Both sides are normalized like the point guard
/// output, since this rule runs after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    find: String,
    replace: String,
}

impl Substitute {
    /// Build the rule; a missing replacement means the separator.
    #[must_use]
    pub fn new(find: &str, replace: Option<&str>) -> Self {
        Self {
            find: points_to_separators(find),
            replace: replace.map_or_else(|| SEPARATOR.to_string(), points_to_separators),
        }
    }
}

impl Transform for Substitute {
    fn name(&self) -> &'static str {
        "substitute"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        if self.find.is_empty() {
            return Some(name.to_string());
        }
        Some(name.replace(&self.find, &self.replace))
    }
}

/// Prepends a fixed literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prepend {
    prefix: String,
}

impl Prepend {
    /// Build the rule.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl Transform for Prepend {
    fn name(&self) -> &'static str {
        "prepend"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        Some(format!("{}{name}", self.prefix))
    }
}

/// Prepends the entry's local modification date as `YYYYMMDD-`.
///
/// Entries without a modification time are passed through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrependDate;

impl Transform for PrependDate {
    fn name(&self) -> &'static str {
        "prepend-date"
    }

    fn apply(&self, name: &str, entry: &Entry) -> Option<String> {
        Some(entry.modified.map_or_else(
            || name.to_string(),
            |modified| {
                let stamp = DateTime::<Local>::from(modified).format("%Y%m%d-");
                format!("{stamp}{name}")
            },
        ))
    }
}

/// Collapses separator runs and trims separators around the extension dot
/// and at both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collapse;

impl Transform for Collapse {
    fn name(&self) -> &'static str {
        "collapse"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        let mut collapsed = String::with_capacity(name.len());
        for c in name.chars() {
            if !(c == SEPARATOR && collapsed.ends_with(SEPARATOR)) {
                collapsed.push(c);
            }
        }
        let trimmed = collapsed.replace("-.", ".").replace(".-", ".");
        if trimmed == "-" {
            return Some(trimmed);
        }
        let trimmed = trimmed.strip_prefix(SEPARATOR).unwrap_or(&trimmed);
        let trimmed = trimmed.strip_suffix(SEPARATOR).unwrap_or(trimmed);
        Some(trimmed.to_string())
    }
}

/// Shortens names longer than `max_len`, keeping the extension.
#[derive(Debug, Clone, Copy)]
pub struct Truncate {
    max_len: usize,
}

impl Truncate {
    /// Build the rule.
    #[must_use]
    pub const fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Transform for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        if char_len(name) <= self.max_len {
            return Some(name.to_string());
        }
        let (_, ext) = split_extension(name);
        let ext_len = char_len(ext);
        let cut = if ext_len >= self.max_len {
            take_chars(ext, self.max_len).to_string()
        } else {
            format!("{}{ext}", take_chars(name, self.max_len - ext_len))
        };
        let cut = cut.strip_suffix(SEPARATOR).unwrap_or(&cut);
        Some(cut.replace("-.", "."))
    }
}

/// Drops entries whose name is shorter than `min_len`.
#[derive(Debug, Clone, Copy)]
pub struct Omit {
    min_len: usize,
}

impl Omit {
    /// Build the rule.
    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }
}

impl Transform for Omit {
    fn name(&self) -> &'static str {
        "omit"
    }

    fn apply(&self, name: &str, _entry: &Entry) -> Option<String> {
        (char_len(name) >= self.min_len).then(|| name.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fs::EntryKind;
    use std::time::{Duration, SystemTime};

    fn file() -> Entry {
        Entry::named("x", EntryKind::File)
    }

    fn dir() -> Entry {
        Entry::named("x", EntryKind::Directory)
    }

    fn run(t: &dyn Transform, name: &str) -> String {
        t.apply(name, &file()).unwrap()
    }

    #[test]
    fn downcase_is_unicode_aware() {
        assert_eq!(run(&Downcase, "My ФОТО.JPG"), "my фото.jpg");
    }

    #[test]
    fn point_guard_keeps_file_extension() {
        assert_eq!(run(&ExtensionPointGuard, "v1.2.final.tar"), "v1-2-final.tar");
        assert_eq!(run(&ExtensionPointGuard, "plain"), "plain");
        assert_eq!(run(&ExtensionPointGuard, ".bashrc"), "-bashrc");
    }

    #[test]
    fn point_guard_replaces_all_dots_in_directories() {
        let out = ExtensionPointGuard.apply("photos.2019.backup", &dir()).unwrap();
        assert_eq!(out, "photos-2019-backup");
    }

    #[test]
    fn fold_replaces_symbols_but_not_ampersand_or_dot() {
        assert_eq!(run(&SpecialCharFold, "a b(c)[d]{e}.txt"), "a-b-c--d--e-.txt");
        assert_eq!(run(&SpecialCharFold, "rock&roll.mp3"), "rock&roll.mp3");
        assert_eq!(run(&SpecialCharFold, "«quote»—dash…"), "-quote--dash-");
        assert_eq!(run(&SpecialCharFold, "~!@#$%^*_+=;:,"), "-".repeat(14));
    }

    #[test]
    fn transliterate_maps_cyrillic_and_diacritics() {
        assert_eq!(run(&Transliterate, "café.txt"), "cafe.txt");
        assert_eq!(run(&Transliterate, "щука"), "szhuka");
        assert_eq!(run(&Transliterate, "привет"), "privet");
        assert_eq!(run(&Transliterate, "ёжик"), "jozhik");
    }

    #[test]
    fn transliterate_deletes_blank_mappings() {
        assert_eq!(run(&Transliterate, "объект"), "obekt");
        assert_eq!(run(&Transliterate, "соль"), "sol");
    }

    #[test]
    fn transliterate_spells_out_tokens() {
        assert_eq!(run(&Transliterate, "tom&jerry"), "tom-and-jerry");
        assert_eq!(run(&Transliterate, "№5"), "-num-5");
    }

    #[test]
    fn substitute_normalizes_its_pattern() {
        let rule = Substitute::new("v1.0", Some("v.2"));
        assert_eq!(run(&rule, "app-v1-0.zip"), "app-v-2.zip");
    }

    #[test]
    fn substitute_defaults_to_separator() {
        let rule = Substitute::new("draft", None);
        assert_eq!(run(&rule, "draftreport"), "-report");
    }

    #[test]
    fn prepend_adds_literal() {
        assert_eq!(run(&Prepend::new("2019-"), "trip.jpg"), "2019-trip.jpg");
    }

    #[test]
    fn prepend_date_uses_local_modification_day() {
        let modified = SystemTime::UNIX_EPOCH + Duration::from_secs(1_560_600_000);
        let mut entry = file();
        entry.modified = Some(modified);
        let expected = DateTime::<Local>::from(modified)
            .format("%Y%m%d-trip.jpg")
            .to_string();
        assert_eq!(PrependDate.apply("trip.jpg", &entry).unwrap(), expected);
    }

    #[test]
    fn prepend_date_without_mtime_is_identity() {
        assert_eq!(run(&PrependDate, "trip.jpg"), "trip.jpg");
    }

    #[test]
    fn collapse_merges_runs_and_trims() {
        assert_eq!(run(&Collapse, "--my---photo--.-jpg-"), "my-photo.jpg");
        assert_eq!(run(&Collapse, "my-photo--2019-.jpg"), "my-photo-2019.jpg");
        assert_eq!(run(&Collapse, "-name-"), "name");
    }

    #[test]
    fn collapse_keeps_lone_separator() {
        assert_eq!(run(&Collapse, "-"), "-");
        assert_eq!(run(&Collapse, "---"), "-");
    }

    #[test]
    fn collapse_handles_empty() {
        assert_eq!(run(&Collapse, ""), "");
    }

    #[test]
    fn truncate_keeps_extension() {
        assert_eq!(run(&Truncate::new(5), "abcdef.txt"), "a.txt");
        assert_eq!(run(&Truncate::new(10), "short.txt"), "short.txt");
    }

    #[test]
    fn truncate_long_extension_keeps_its_head() {
        assert_eq!(run(&Truncate::new(4), "a.extension"), ".ext");
    }

    #[test]
    fn truncate_strips_dangling_separator() {
        assert_eq!(run(&Truncate::new(8), "abc-defgh.txt"), "abc.txt");
        assert_eq!(run(&Truncate::new(6), "abcdefghij"), "abcdef");
        assert_eq!(run(&Truncate::new(4), "abc-defg"), "abc");
    }

    #[test]
    fn omit_drops_short_names() {
        assert_eq!(Omit::new(5).apply("abcd", &file()), None);
        assert_eq!(Omit::new(5).apply("abcde", &file()).as_deref(), Some("abcde"));
    }
}

//! Fixed-width two-column table rendering.
//!
//! Widths are terminal columns, so wide characters (CJK, emoji) count twice
//! and combining marks not at all.
use std::fmt::Write as _;

use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

/// Joins the head and tail of a trimmed string.
const ELLIPSIS: &str = "..";

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Longest run of `chars` whose total width fits in `budget` columns.
fn fit(chars: impl Iterator<Item = char>, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in chars {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Shorten `s` to at most `lim` columns by cutting out its middle.
///
/// The tail gets `(lim - 2) / 2` columns and the head the rest of the
/// budget. A wide character that would straddle either budget is dropped, so
/// the result can be one column short. Budgets too small for the ellipsis
/// keep only the head.
///
/// # Examples
///
/// ```
/// use renamer_cli::report::trim_middle;
///
/// assert_eq!(trim_middle("0123456789", 7), "012..89");
/// assert_eq!(trim_middle("short", 7), "short");
/// ```
#[must_use]
pub fn trim_middle(s: &str, lim: usize) -> String {
    if s.width() <= lim {
        return s.to_string();
    }
    if lim < ELLIPSIS.len() + 1 {
        return fit(s.chars(), lim);
    }
    let tail_budget = (lim - ELLIPSIS.len()) / 2;
    let head_budget = lim - ELLIPSIS.len() - tail_budget;
    let head = fit(s.chars(), head_budget);
    let tail: String = fit(s.chars().rev(), tail_budget).chars().rev().collect();
    format!("{head}{ELLIPSIS}{tail}")
}

/// Left-align `s` in `width` columns.
fn pad(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}

/// Center `s` in `width` columns, any odd column going to the right.
fn center(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(s.width());
    let left = gap / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(gap - left))
}

/// Column geometry for a table exactly `width` columns wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    width: usize,
}

impl TableLayout {
    /// Layout for a total width of `width`, which must be at least
    /// [`MIN_WIDTH`](crate::config::MIN_WIDTH).
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Content width of the title and summary rows.
    #[must_use]
    pub const fn title_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Content widths of the source and destination columns.
    #[must_use]
    pub const fn columns(&self) -> (usize, usize) {
        let both = self.width.saturating_sub(7);
        let left = both / 2;
        (left, both - left)
    }

    fn border(&self) -> String {
        format!("+{}+", "-".repeat(self.width.saturating_sub(2)))
    }

    fn divider(&self) -> String {
        let (left, right) = self.columns();
        format!("+{}+{}+", "-".repeat(left + 2), "-".repeat(right + 2))
    }

    /// Render one table: `title` on top, a `src`/`dst` heading, then `rows`.
    ///
    /// Cells are trimmed to their column; the title to the title width.
    #[must_use]
    pub fn render(&self, title: &str, rows: &[(String, String)]) -> String {
        let (left, right) = self.columns();
        let title_width = self.title_width();
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.border());
        let _ = writeln!(
            out,
            "| {} |",
            center(&trim_middle(title, title_width), title_width)
        );
        let _ = writeln!(out, "{}", self.divider());
        let _ = writeln!(
            out,
            "| {} | {} |",
            center("src", left),
            center("dst", right)
        );
        let _ = writeln!(out, "{}", self.divider());
        for (src, dst) in rows {
            let _ = writeln!(
                out,
                "| {} | {} |",
                pad(&trim_middle(src, left), left),
                pad(&trim_middle(dst, right), right)
            );
        }
        let _ = writeln!(out, "{}", self.divider());
        out
    }

    /// Render the closing summary row followed by a bottom border.
    #[must_use]
    pub fn footer(&self, msg: &str) -> String {
        let title_width = self.title_width();
        format!(
            "| {} |\n+-{}-+\n",
            pad(&trim_middle(msg, title_width), title_width),
            "-".repeat(title_width)
        )
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr as _;

    #[test]
    fn trim_middle_matches_budget() {
        assert_eq!(trim_middle("0123456789", 8), "012..789");
        assert_eq!(trim_middle("0123456789", 7), "012..89");
        assert_eq!(trim_middle(&"x".repeat(100), 36).width(), 36);
    }

    #[test]
    fn trim_middle_counts_characters() {
        assert_eq!(trim_middle("привет-мир", 7), "при..ир");
    }

    #[test]
    fn trim_middle_counts_wide_characters_twice() {
        // 8 glyphs, 16 columns.
        let name = "東京タワーの写真";
        assert_eq!(trim_middle(name, 16), name);
        let out = trim_middle(name, 9);
        assert_eq!(out, "東京..真");
        assert!(out.width() <= 9);
    }

    #[test]
    fn wide_cells_keep_the_borders_aligned() {
        let layout = TableLayout::new(31);
        let rows = vec![
            ("写真.jpg".to_string(), "xie-zhen.jpg".to_string()),
            ("東京タワーの写真とても長い名前.png".to_string(), String::new()),
            ("😀 smile.png".to_string(), "smile.png".to_string()),
        ];
        for line in layout.render("/photos/東京", &rows).lines() {
            assert_eq!(line.width(), 31, "{line}");
        }
    }

    #[test]
    fn trim_middle_tiny_budgets() {
        assert_eq!(trim_middle("abcdef", 3), "a..");
        assert_eq!(trim_middle("abcdef", 2), "ab");
        assert_eq!(trim_middle("abcdef", 0), "");
    }

    #[test]
    fn columns_fill_the_width() {
        let layout = TableLayout::new(79);
        assert_eq!(layout.columns(), (36, 36));
        assert_eq!(layout.title_width(), 75);
        let layout = TableLayout::new(80);
        assert_eq!(layout.columns(), (36, 37));
    }

    #[test]
    fn every_line_has_the_table_width() {
        let layout = TableLayout::new(31);
        let rows = vec![
            ("Some Very Long Source Name.txt".to_string(), String::new()),
            ("b".to_string(), "c".to_string()),
        ];
        for line in layout.render("/a/rather/long/directory/path/here", &rows).lines() {
            assert_eq!(line.width(), 31, "{line}");
        }
        for line in layout.footer("Test: 1 moved in 0 seconds.").lines() {
            assert_eq!(line.width(), 31, "{line}");
        }
    }

    #[test]
    fn render_snapshot() {
        let layout = TableLayout::new(41);
        let rows = vec![
            (
                "My Photo (2019).JPG".to_string(),
                "my-photo-2019.jpg".to_string(),
            ),
            ("notes.txt".to_string(), String::new()),
            (
                "Old Report.txt".to_string(),
                "Unable to compose a new name: report.txt (10 attempts)".to_string(),
            ),
        ];
        insta::assert_snapshot!(layout.render("/home/user/photos", &rows), @r"
        +---------------------------------------+
        |           /home/user/photos           |
        +-------------------+-------------------+
        |        src        |        dst        |
        +-------------------+-------------------+
        | My Photo..19).JPG | my-photo-2019.jpg |
        | notes.txt         |                   |
        | Old Report.txt    | Unable t..tempts) |
        +-------------------+-------------------+
        ");
    }

    #[test]
    fn footer_snapshot() {
        let layout = TableLayout::new(41);
        insta::assert_snapshot!(layout.footer("Real: 2 moved, 1 failed in 3 seconds."), @r"
        | Real: 2 moved, 1 failed in 3 seconds. |
        +---------------------------------------+
        ");
    }
}

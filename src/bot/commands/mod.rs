//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Cash entry commands
pub mod cash;

/// Dashboard totals command
pub mod dashboard;

/// Disc add/edit/sell/delete and tagging commands
pub mod disc;

/// General utility commands
pub mod general;

/// Filtered inventory listing and filter selection commands
pub mod inventory;

/// Tag management commands
pub mod tag;

use std::fmt::Write;

/// Discord's limit on an embed description, in characters.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

// room left after the listed lines for "…and N more" plus a closing total line
const TRAILER_ROOM: usize = 64;

/// Joins newline-terminated `lines`, taking at most `max_lines` and stopping
/// before the text would outgrow an embed description. Lines left out are
/// counted in a closing "…and N more" line.
#[must_use]
pub fn join_capped(lines: &[String], max_lines: usize) -> String {
    let budget = EMBED_DESCRIPTION_LIMIT - TRAILER_ROOM;
    let mut text = String::new();
    let mut used = 0;
    let mut shown = 0;
    for line in lines.iter().take(max_lines) {
        let len = line.chars().count();
        if used + len > budget {
            break;
        }
        text.push_str(line);
        used += len;
        shown += 1;
    }
    if shown < lines.len() {
        let _ = writeln!(text, "…and {} more", lines.len() - shown);
    }
    text
}

// Export commands
pub use cash::*;
pub use dashboard::*;
pub use disc::*;
pub use general::*;
pub use inventory::*;
pub use tag::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize, width: usize) -> Vec<String> {
        (0..count).map(|_| format!("{}\n", "x".repeat(width - 1))).collect()
    }

    #[test]
    fn test_join_capped_keeps_short_lists_whole() {
        let text = join_capped(&lines(3, 10), 40);
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_join_capped_stops_at_line_count() {
        let text = join_capped(&lines(5, 10), 3);
        assert!(text.ends_with("…and 2 more\n"));
    }

    #[test]
    fn test_join_capped_stops_at_description_limit() {
        let text = join_capped(&lines(100, 100), 1000);
        assert!(text.chars().count() <= EMBED_DESCRIPTION_LIMIT - TRAILER_ROOM + 20);
        assert_eq!(text.lines().count(), 41);
        assert!(text.ends_with("…and 60 more\n"));
    }

    #[test]
    fn test_join_capped_counts_characters_not_bytes() {
        // "…" is three bytes but one character
        let wide: Vec<String> = (0..50).map(|_| format!("{}\n", "…".repeat(79))).collect();
        let text = join_capped(&wide, 100);
        assert_eq!(text.lines().count(), 50);
    }
}

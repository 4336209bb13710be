//! # Rendering Module
//!
//! Turns notes, drafts and command messages into terminal text. Width math
//! (truncation, padding) is Unicode-aware and done before styling, so styled
//! and plain output line up the same way.

use super::styles::Theme;
use notesapp::api::{CmdMessage, MessageLevel};
use notesapp::model::{Note, NoteDraft};
use notesapp::screen::Screen;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TITLE_WIDTH: usize = 28;
pub const ELLIPSIS: &str = "…";

/// Cut `text` to at most `width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - ELLIPSIS.width();
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

fn pad_to_width(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

pub const PREVIEW_LINES: usize = 2;

/// Up to `PREVIEW_LINES` non-blank content lines, trimmed.
fn preview_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(PREVIEW_LINES)
}

pub fn render_note_list(notes: &[Note], query: &str, theme: &Theme) -> String {
    let header = if query.trim().is_empty() {
        format!("Notes ({})", notes.len())
    } else {
        format!("Notes matching \"{}\" ({})", query, notes.len())
    };
    let mut out = format!("{}\n", theme.header.apply_to(header));

    if notes.is_empty() {
        out.push_str("  No notes found.\n");
        return out;
    }

    let id_width = notes
        .iter()
        .filter_map(|n| n.id)
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);

    for note in notes {
        let id = note.id.map(|id| id.to_string()).unwrap_or_default();
        let title = pad_to_width(&truncate_to_width(&note.title, TITLE_WIDTH), TITLE_WIDTH);
        let used = 2 + id_width + 2 + TITLE_WIDTH + 2;
        let preview_width = LINE_WIDTH.saturating_sub(used);
        let mut previews = preview_lines(&note.content);
        let first = truncate_to_width(previews.next().unwrap_or(""), preview_width);

        let line = format!(
            "  {:>w$}  {}  {}",
            theme.id.apply_to(id),
            theme.title.apply_to(title),
            theme.preview.apply_to(first),
            w = id_width
        );
        out.push_str(line.trim_end());
        out.push('\n');

        // Further preview lines sit under the first one.
        for more in previews {
            let more = truncate_to_width(more, preview_width);
            out.push_str(&format!(
                "{}{}\n",
                " ".repeat(used),
                theme.preview.apply_to(more)
            ));
        }
    }
    out
}

pub fn render_edit_screen(screen: Screen, draft: &NoteDraft, theme: &Theme) -> String {
    let header = match screen.editing() {
        Some(id) => format!("Edit Note {}", id),
        None => "New Note".to_string(),
    };
    let mut out = format!("{}\n", theme.header.apply_to(header));
    out.push_str(&format!(
        "{} {}\n",
        theme.label.apply_to("Title:"),
        theme.title.apply_to(&draft.title)
    ));
    out.push_str(&format!("{}\n", theme.label.apply_to("Content:")));
    for line in draft.content.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage], theme: &Theme) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Success => &theme.success,
            MessageLevel::Warning => &theme.warning,
            MessageLevel::Info => &theme.info,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

pub fn render_error(message: &str, theme: &Theme) -> String {
    format!("{} {}\n", theme.error.apply_to("Error:"), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notesapp::model::NoteId;

    fn note(id: u64, title: &str, content: &str) -> Note {
        Note::new(title, content).with_id(NoteId::new(id))
    }

    #[test]
    fn truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("Hello", 10), "Hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Hello world", 6), "Hello…");
    }

    #[test]
    fn truncate_counts_wide_chars() {
        // Each CJK char takes two columns.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn list_shows_header_and_rows() {
        let notes = vec![
            note(2, "Try editing me", "Tap the pencil icon to edit."),
            note(1, "Welcome", "This is your first note!"),
        ];
        let out = render_note_list(&notes, "", &Theme::new(false));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Notes (2)");
        assert!(lines[1].starts_with("  2  Try editing me"));
        assert!(lines[1].ends_with("Tap the pencil icon to edit."));
        assert!(lines[2].starts_with("  1  Welcome"));
    }

    #[test]
    fn list_preview_uses_first_non_blank_line() {
        let notes = vec![note(1, "Groceries", "\n\n  milk\nbread")];
        let out = render_note_list(&notes, "", &Theme::new(false));
        assert!(out.lines().nth(1).unwrap().ends_with("milk"));
    }

    #[test]
    fn list_preview_shows_two_lines_at_most() {
        let notes = vec![
            note(2, "Groceries", "milk\n\nbread\neggs"),
            note(1, "Blank", "   \n  "),
        ];
        let out = render_note_list(&notes, "", &Theme::new(false));
        let lines: Vec<&str> = out.lines().collect();

        let indent = " ".repeat(2 + 1 + 2 + TITLE_WIDTH + 2);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("milk"));
        assert_eq!(lines[2], format!("{}bread", indent));
        assert_eq!(lines[3].trim_end(), "  1  Blank");
        assert!(!out.contains("eggs"));
    }

    #[test]
    fn list_with_query_and_no_matches() {
        let out = render_note_list(&[], "milk", &Theme::new(false));
        assert_eq!(out, "Notes matching \"milk\" (0)\n  No notes found.\n");
    }

    #[test]
    fn edit_screen_for_new_and_existing() {
        let draft = NoteDraft {
            id: None,
            title: "Plan".into(),
            content: "one\ntwo".into(),
        };
        let out = render_edit_screen(Screen::open_new(), &draft, &Theme::new(false));
        assert_eq!(out, "New Note\nTitle: Plan\nContent:\n  one\n  two\n");

        let out = render_edit_screen(Screen::open_existing(NoteId::new(4)), &draft, &Theme::new(false));
        assert!(out.starts_with("Edit Note 4\n"));
    }

    #[test]
    fn messages_one_per_line() {
        let messages = vec![
            CmdMessage::success("Note created: A"),
            CmdMessage::warning("Note not found: 9"),
        ];
        let out = render_messages(&messages, &Theme::new(false));
        assert_eq!(out, "Note created: A\nNote not found: 9\n");
    }

    #[test]
    fn color_adds_escape_codes() {
        let out = render_error("boom", &Theme::new(true));
        assert!(out.contains("\u{1b}["));
        assert_eq!(render_error("boom", &Theme::new(false)), "Error: boom\n");
    }
}

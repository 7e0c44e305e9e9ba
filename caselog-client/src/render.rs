// Display-only formatting for the list view
//
// Nothing in here modifies stored values; truncation and date formatting
// apply to the rendered text only.

use ansi_term::Style;
use caselog_utils::data::SessionNote;
use caselog_utils::notification::Notification;
use chrono::NaiveDate;

/// Characters of quick notes shown in the list before truncation.
pub const NOTES_PREVIEW_CHARS: usize = 100;

/// First 100 characters plus an ellipsis marker. Counts characters, not
/// bytes, so multi-byte text never splits mid-character.
pub fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() <= NOTES_PREVIEW_CHARS {
        return notes.to_string();
    }
    let preview: String = notes.chars().take(NOTES_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// `Jan 15, 2024`
pub fn format_session_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One note as a list card: name and duration, date line, notes preview.
pub fn render_note(note: &SessionNote) -> String {
    format!(
        "{}  ({} min)\n  {}\n  {}",
        Style::new().bold().paint(&note.client_name),
        note.duration_minutes,
        Style::new().dimmed().paint(format_session_date(note.session_date)),
        truncate_notes(&note.quick_notes),
    )
}

/// The whole list screen: header with count, then one card per note, or
/// the empty-state text.
pub fn render_list(notes: &[SessionNote]) -> String {
    if notes.is_empty() {
        return "No session notes yet\nGet started by creating your first session note\n"
            .to_string();
    }

    let mut out = format!(
        "{}\n\n",
        Style::new()
            .bold()
            .paint(format!("Session Notes ({})", notes.len()))
    );
    for note in notes {
        out.push_str(&render_note(note));
        out.push_str("\n\n");
    }
    out
}

/// Status line shown under the list.
pub fn render_notification(notification: &Notification) -> String {
    format!(
        "{}{} {}\x1b[0m",
        notification.style.color_code(),
        notification.style.icon(),
        notification.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn note_with_quick_notes(quick_notes: &str) -> SessionNote {
        SessionNote {
            id: Uuid::new_v4(),
            client_name: "Jane Doe".to_string(),
            session_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quick_notes: quick_notes.to_string(),
            duration_minutes: 60,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_short_notes_pass_through_untouched() {
        assert_eq!(truncate_notes("Discussed progress"), "Discussed progress");
    }

    #[test]
    fn test_exactly_100_chars_is_not_truncated() {
        let text = "a".repeat(100);
        assert_eq!(truncate_notes(&text), text);
    }

    #[test]
    fn test_150_chars_display_as_first_100_plus_ellipsis() {
        let stored = "b".repeat(150);
        let shown = truncate_notes(&stored);

        assert_eq!(shown, format!("{}...", "b".repeat(100)));
        assert_eq!(shown.chars().count(), 103);
        // The stored value is untouched.
        assert_eq!(stored.chars().count(), 150);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let stored = "é".repeat(150);
        let shown = truncate_notes(&stored);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn test_date_formats_like_a_card() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_session_date(date), "Jan 15, 2024");

        let single_digit = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_session_date(single_digit), "Mar 1, 2024");
    }

    #[test]
    fn test_render_note_truncates_only_the_display() {
        let note = note_with_quick_notes(&"c".repeat(150));
        let card = render_note(&note);

        assert!(card.contains("Jane Doe"));
        assert!(card.contains("(60 min)"));
        assert!(card.contains("Jan 15, 2024"));
        assert!(card.contains(&format!("{}...", "c".repeat(100))));
        assert_eq!(note.quick_notes.len(), 150);
    }

    #[test]
    fn test_render_list_shows_count() {
        let notes = vec![
            note_with_quick_notes("one"),
            note_with_quick_notes("two"),
        ];
        assert!(render_list(&notes).contains("Session Notes (2)"));
    }

    #[test]
    fn test_render_list_empty_state() {
        let screen = render_list(&[]);
        assert!(screen.contains("No session notes yet"));
        assert!(screen.contains("creating your first session note"));
    }

    #[test]
    fn test_render_notification_carries_style_and_message() {
        let line = render_notification(&Notification::error("Failed to fetch notes"));
        assert!(line.contains("Failed to fetch notes"));
        assert!(line.contains("✗"));
    }
}

// Interactive prompts
//
// The create form and the delete confirmation. Field validators mirror
// the gateway's pre-checks so most mistakes are caught at the prompt,
// but the gateway remains the authority; anything it rejects comes back
// as a notification and the form reopens with the draft preserved.

use anyhow::Result;
use caselog_utils::data::{
    CreateSessionNoteInput, SessionNote, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES,
    QUICK_NOTES_MAX_CHARS,
};
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::render::format_session_date;

/// Collect the create-form fields. Returns None when the user backs out
/// at the final confirmation.
pub fn prompt_new_note(
    today: NaiveDate,
    draft: Option<&CreateSessionNoteInput>,
) -> Result<Option<CreateSessionNoteInput>> {
    println!("\nCreate New Session Note");

    let client_name: String = Input::new()
        .with_prompt("Client name")
        .with_initial_text(draft.map(|d| d.client_name.clone()).unwrap_or_default())
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("All fields are required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let session_date: String = Input::new()
        .with_prompt("Session date (YYYY-MM-DD)")
        .with_initial_text(
            draft
                .map(|d| d.session_date.to_string())
                .unwrap_or_default(),
        )
        .validate_with(
            move |value: &String| match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                Ok(date) if date > today => {
                    Err("Session date cannot be in the future".to_string())
                }
                Ok(_) => Ok(()),
                Err(_) => Err("Enter a date as YYYY-MM-DD".to_string()),
            },
        )
        .interact_text()?;

    let quick_notes: String = Input::new()
        .with_prompt(format!(
            "Quick notes (up to {} characters)",
            QUICK_NOTES_MAX_CHARS
        ))
        .with_initial_text(draft.map(|d| d.quick_notes.clone()).unwrap_or_default())
        .validate_with(|value: &String| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err("All fields are required".to_string());
            }
            let count = trimmed.chars().count();
            if count > QUICK_NOTES_MAX_CHARS {
                return Err(format!(
                    "Notes must be {} characters or less ({} entered)",
                    QUICK_NOTES_MAX_CHARS, count
                ));
            }
            Ok(())
        })
        .interact_text()?;

    let duration_minutes: i32 = Input::new()
        .with_prompt(format!(
            "Session duration in minutes ({}-{})",
            MIN_SESSION_MINUTES, MAX_SESSION_MINUTES
        ))
        .with_initial_text(
            draft
                .map(|d| d.duration_minutes.to_string())
                .unwrap_or_default(),
        )
        .validate_with(|value: &i32| {
            if *value < 1 {
                Err("Duration must be a valid number")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let input = CreateSessionNoteInput {
        client_name: client_name.trim().to_string(),
        session_date: NaiveDate::parse_from_str(session_date.trim(), "%Y-%m-%d")?,
        quick_notes: quick_notes.trim().to_string(),
        duration_minutes,
    };

    if Confirm::new()
        .with_prompt("Create note?")
        .default(true)
        .interact()?
    {
        Ok(Some(input))
    } else {
        Ok(None)
    }
}

/// Pick a note to delete. Returns None when the user picks Cancel.
pub fn pick_note_to_delete(notes: &[SessionNote]) -> Result<Option<usize>> {
    let mut items: Vec<String> = notes
        .iter()
        .map(|note| {
            format!(
                "{} ({}, {} min)",
                note.client_name,
                format_session_date(note.session_date),
                note.duration_minutes
            )
        })
        .collect();
    items.push("Cancel".to_string());

    let choice = Select::new()
        .with_prompt("Delete which note?")
        .items(&items)
        .default(0)
        .interact()?;

    if choice == notes.len() {
        Ok(None)
    } else {
        Ok(Some(choice))
    }
}

/// The confirmation gate in front of every delete.
pub fn confirm_delete(client_name: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!(
            "Delete the session note for {}? This action cannot be undone",
            client_name
        ))
        .default(false)
        .interact()?)
}

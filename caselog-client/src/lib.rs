// caselog terminal client
//
// Renders the list, collects user intents, and forwards them to the
// gateway one at a time; an operation runs to completion or failure
// before the next prompt appears.

pub mod app;
pub mod form;
pub mod render;

use anyhow::Result;
use caselog_server::gateway::NotesGateway;
use caselog_utils::data::CreateSessionNoteInput;
use caselog_utils::notification::Notification;
use chrono::Utc;
use dialoguer::Select;

use app::{AppState, View};

const MENU_NEW: usize = 0;
const MENU_DELETE: usize = 1;
const MENU_REFRESH: usize = 2;
const MENU_QUIT: usize = 3;

/// Run the interactive client until the user quits.
pub async fn run(mut gateway: NotesGateway) -> Result<()> {
    let mut state = AppState::new();
    // Draft kept across a failed submit so the form reopens pre-filled.
    let mut draft: Option<CreateSessionNoteInput> = None;

    println!("Session Notes");
    println!("Therapist note-taking application\n");

    println!("Loading notes...");
    if gateway.refresh().await.is_err() {
        notify_last_error(&mut state, &gateway);
    }

    loop {
        match state.view().clone() {
            View::List => {
                print!("{}", render::render_list(gateway.notes()));
                if let Some(notification) = state.notification() {
                    println!("{}\n", render::render_notification(notification));
                }

                let choice = Select::new()
                    .items(&["New note", "Delete a note", "Refresh", "Quit"])
                    .default(0)
                    .interact()?;
                state.clear_notification();

                match choice {
                    MENU_NEW => {
                        state.open_form();
                    }
                    MENU_DELETE => {
                        if gateway.notes().is_empty() {
                            state.notify(Notification::warning("No session notes to delete"));
                        } else if let Some(index) = form::pick_note_to_delete(gateway.notes())? {
                            let note = &gateway.notes()[index];
                            state.request_delete(note.id, note.client_name.clone());
                        }
                    }
                    MENU_REFRESH => {
                        if gateway.refresh().await.is_err() {
                            notify_last_error(&mut state, &gateway);
                        }
                    }
                    MENU_QUIT => break,
                    _ => unreachable!(),
                }
            }

            View::CreateForm => {
                match form::prompt_new_note(Utc::now().date_naive(), draft.as_ref())? {
                    Some(input) => match gateway.create(input.clone()).await {
                        Ok(()) => {
                            draft = None;
                            state.submit_succeeded();
                            state.notify(Notification::success("Session note created"));
                        }
                        Err(e) => {
                            // Stay in the form; the draft reopens pre-filled.
                            draft = Some(input);
                            println!(
                                "{}\n",
                                render::render_notification(&Notification::error(e.to_string()))
                            );
                        }
                    },
                    None => {
                        draft = None;
                        state.cancel_form();
                    }
                }
            }

            View::ConfirmDelete { client_name, .. } => {
                if form::confirm_delete(&client_name)? {
                    if let Some(id) = state.confirm_delete() {
                        match gateway.delete(id).await {
                            Ok(()) => {
                                state.notify(Notification::success("Session note deleted"))
                            }
                            Err(_) => notify_last_error(&mut state, &gateway),
                        }
                    }
                } else {
                    state.cancel_delete();
                }
            }
        }
    }

    Ok(())
}

fn notify_last_error(state: &mut AppState, gateway: &NotesGateway) {
    let message = gateway
        .last_error()
        .unwrap_or("Something went wrong")
        .to_string();
    state.notify(Notification::error(message));
}

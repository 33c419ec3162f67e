//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::{ChatMessage, ChatState};
use super::ui::ChatUi;
use crate::config::ModelCatalog;
use crate::inference::{ParameterOverrides, TextGenerator, family_for};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Result of chat session
pub enum ChatResult {
    Exit,
}

/// Run the TUI chat interface
pub async fn run_chat<G>(
    generator: Arc<G>,
    catalog: ModelCatalog,
    model: String,
    overrides: ParameterOverrides,
) -> Result<ChatResult, Box<dyn Error>>
where
    G: TextGenerator + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(model);
    state.overrides = overrides;
    state.add_message(ChatMessage::system(
        "Welcome! Type /help for commands, or start chatting.",
    ));

    let result = run_chat_loop(&mut terminal, &mut state, generator, &catalog).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
///
/// A submitted turn spawns exactly one request task; input stays locked
/// (`state.loading`) until its outcome arrives over the channel, so there is
/// never more than one request in flight.
async fn run_chat_loop<G>(
    terminal: &mut Tui,
    state: &mut ChatState,
    generator: Arc<G>,
    catalog: &ModelCatalog,
) -> Result<ChatResult, Box<dyn Error>>
where
    G: TextGenerator + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        let category = catalog.category_of(&state.model);
        terminal.draw(|frame| {
            ChatUi::render(frame, state, category);
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Message(content) => {
                    state.loading = false;
                    state.add_message(ChatMessage::assistant(content));
                }
                ResponseEvent::Failure(text) => {
                    state.loading = false;
                    state.add_message(ChatMessage::system(text));
                }
            }
        }

        let timeout = if state.loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => {
                    let input = state.take_input();
                    if !input.is_empty() {
                        state.add_message(ChatMessage::user(&input));
                        state.loading = true;
                        state.status_message = None;
                        let generator = generator.clone();
                        let model = state.model.clone();
                        let overrides = state.overrides.clone();
                        let tx = response_tx.clone();

                        tokio::spawn(async move {
                            send_message(generator, model, input, overrides, tx).await;
                        });
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, catalog, &cmd) == CommandOutcome::Exit {
                        return Ok(ChatResult::Exit);
                    }
                }

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    state.scroll_down();
                }

                InputAction::ScrollTop => {
                    state.scroll_offset = 0;
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else if state.loading {
            state.tick_loading();
        }
    }
}

/// Events from async response handling
enum ResponseEvent {
    Message(String),
    Failure(String),
}

/// Send one turn asynchronously
async fn send_message<G>(
    generator: Arc<G>,
    model: String,
    prompt: String,
    overrides: ParameterOverrides,
    tx: mpsc::Sender<ResponseEvent>,
) where
    G: TextGenerator + 'static,
{
    match generator.generate(&model, &prompt, &overrides).await {
        Ok(text) => {
            let _ = tx.send(ResponseEvent::Message(text)).await;
        }
        Err(err) => {
            let _ = tx.send(ResponseEvent::Failure(err.user_message())).await;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Exit,
}

/// Handle command execution
fn handle_command(state: &mut ChatState, catalog: &ModelCatalog, input: &str) -> CommandOutcome {
    let result = parse_command(input);

    match result {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            state.add_message(ChatMessage::system(
                r#"Available commands:
  /help              - Show this help
  /models            - List the model catalog
  /model <id>        - Switch to another model
  /set <name> <val>  - Override a generation parameter
  /params            - Show effective parameters for the current model
  /reset             - Clear the conversation
  /exit              - Exit chat"#,
            ));
        }

        CommandResult::ListModels => {
            let mut listing = String::from("Model catalog:");
            for category in &catalog.categories {
                listing.push_str(&format!("\n{}:", category.category));
                for model in &category.models {
                    let marker = if *model == state.model { " *" } else { "" };
                    listing.push_str(&format!("\n  {model}{marker}"));
                }
            }
            state.add_message(ChatMessage::system(listing));
        }

        CommandResult::SetModel(model) => {
            if !catalog.contains(&model) {
                state.add_message(ChatMessage::system(format!(
                    "Note: '{model}' is not in the catalog; using it anyway."
                )));
            }
            state.set_model(model);
        }

        CommandResult::SetParam { name, value } => match state.overrides.set_field(&name, &value) {
            Ok(()) => {
                state.status_message = Some(format!("{name} = {value}"));
            }
            Err(msg) => {
                state.add_message(ChatMessage::system(msg));
            }
        },

        CommandResult::ShowParams => {
            let params = family_for(&state.model).defaults().merge(&state.overrides);
            let mut text = format!(
                "Effective parameters for {}:\n  max_new_tokens = {}\n  temperature = {}\n  top_p = {}\n  do_sample = {}\n  return_full_text = {}",
                state.model,
                params.max_new_tokens,
                params.temperature,
                params.top_p,
                params.do_sample,
                params.return_full_text,
            );
            if let Some(penalty) = params.repetition_penalty {
                text.push_str(&format!("\n  repetition_penalty = {penalty}"));
            }
            state.add_message(ChatMessage::system(text));
        }

        CommandResult::Reset => {
            state.reset();
            state.add_message(ChatMessage::system("Conversation cleared."));
        }

        CommandResult::Exit => return CommandOutcome::Exit,

        CommandResult::Unknown(cmd) => {
            state.add_message(ChatMessage::system(format!(
                "Unknown command: {}. Type /help for available commands.",
                cmd
            )));
        }
    }

    CommandOutcome::Continue
}

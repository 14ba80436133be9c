use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use recipe_core::{update, AppState, AppViewModel, Msg};
use recipe_engine::{EngineHandle, RecipeClient};
use recipe_logging::{recipe_info, recipe_warn};

use super::commands::{parse_command, UserCommand, HELP};
use super::config::AppConfig;
use super::effects::{forward_engine_events, EffectRunner};
use super::error::AppError;
use super::ui;
use crate::cli::OutputFormat;

/// Everything the event loop reacts to.
pub enum AppEvent {
    /// A message for the state machine, usually from the engine.
    Msg(Msg),
    /// One line typed by the user.
    Input(String),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let client = RecipeClient::new(config.client_config())?;
    recipe_info!(
        "Starting recipe viewer against {} (scope {:?})",
        client.base_url(),
        config.search_scope
    );
    let (engine, engine_events) = EngineHandle::spawn(client)?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<AppEvent>();
    forward_engine_events(engine_events, inbox_tx.clone());
    spawn_stdin_reader(inbox_tx);

    let mut app = App::new(
        AppState::with_scope(config.search_scope),
        EffectRunner::new(engine),
        format,
    );
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;

    app.dispatch_msg(Msg::CatalogRequested, &mut out)?;
    let mut input_closed = false;
    while let Ok(event) = inbox_rx.recv() {
        let msg = match event {
            AppEvent::Msg(msg) => msg,
            AppEvent::Input(line) => match app.interpret(&line, &mut out)? {
                Some(msg) => msg,
                None if app.quit_requested => break,
                None => continue,
            },
            AppEvent::InputClosed => {
                // Piped input ends before the fetches it started; let them land first.
                input_closed = true;
                if !app.state.is_busy() {
                    break;
                }
                continue;
            }
        };
        app.dispatch_msg(msg, &mut out)?;
        if input_closed && !app.state.is_busy() {
            break;
        }
    }

    recipe_info!("Recipe viewer exiting");
    Ok(())
}

struct App {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    format: OutputFormat,
    quit_requested: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner, format: OutputFormat) -> Self {
        let view = state.view();
        Self {
            state,
            view,
            runner,
            format,
            quit_requested: false,
        }
    }

    /// Turns a line of input into a message, answering help and errors directly.
    fn interpret(&mut self, line: &str, out: &mut impl Write) -> io::Result<Option<Msg>> {
        let msg = match parse_command(line) {
            UserCommand::Select(position) => match self.view.entry_at(position) {
                Some(entry) => Some(entry.command.to_msg()),
                None => {
                    writeln!(out, "No recipe number {position} in the list")?;
                    None
                }
            },
            UserCommand::Search(keyword) => Some(Msg::SearchSubmitted(keyword)),
            UserCommand::Reload => Some(Msg::CatalogRequested),
            UserCommand::Help => {
                writeln!(out, "{HELP}")?;
                None
            }
            UserCommand::Quit => {
                self.quit_requested = true;
                None
            }
            UserCommand::Empty => None,
            UserCommand::Unknown(text) => {
                writeln!(out, "Unknown command {text:?}; type ? for help")?;
                None
            }
        };
        Ok(msg)
    }

    fn dispatch_msg(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        let status_dirty = state.consume_status_dirty();
        self.state = state;
        self.runner.run(effects);

        if was_dirty {
            write!(out, "{}", ui::render::render(&view, self.format))?;
            out.flush()?;
            self.view = view;
        } else if status_dirty {
            write!(out, "{}", ui::render::render_status(&view, self.format))?;
            out.flush()?;
        }
        Ok(())
    }
}

fn spawn_stdin_reader(inbox: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if inbox.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    recipe_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = inbox.send(AppEvent::InputClosed);
    });
}

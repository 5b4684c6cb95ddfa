//! Terminal entry point.
//!
//! This module provides the thin integration layer between the library and
//! a line-oriented terminal. It owns every side effect: stdin, stdout, the
//! worker thread, the preference file and the marker timers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   lines    ┌─────────────────────────┐   messages   ┌──────────────┐
//! │ input thread │ ─────────▶ │        UI loop          │ ───────────▶ │ gif-worker   │
//! └──────────────┘            │  handle_event → actions │ ◀─────────── │ (reqwest)    │
//!                             │  timers → MarkerExpired │   responses  └──────────────┘
//!                             └─────────────────────────┘
//! ```
//!
//! Input lines and worker responses share one channel, so the loop blocks in
//! a single place; the wait is bounded by the next marker-clear deadline.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Instant;

use gif_explorer::client::HttpClient;
use gif_explorer::shell::{self, clipboard, Command, MarkerTimers};
use gif_explorer::storage::{JsonStore, KeyValueStore, MemoryStore};
use gif_explorer::ui::{self, helpers};
use gif_explorer::worker::{self, GifWorker, WorkerHandle, WorkerResponse};
use gif_explorer::{handle_event, Action, AppState, Config, Event, ExplorerError, Result, Theme};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

/// Everything the UI loop can wake up for.
enum LoopMessage {
    Input(String),
    InputClosed,
    Worker(WorkerResponse),
}

/// Shell state wrapping the library's `AppState` with terminal concerns.
struct Shell {
    app: AppState,
    store: Box<dyn KeyValueStore>,
    worker: WorkerHandle,
    timers: MarkerTimers,
    theme: Theme,
    quit: bool,
}

impl Shell {
    /// Runs an event through the handler and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) {
        match handle_event(&mut self.app, event) {
            Ok((render, actions)) => {
                for action in actions {
                    self.execute(action);
                }
                if render && !self.quit {
                    self.render();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                self.app.status = Some(e.to_string());
                self.render();
            }
        }
    }

    fn execute(&mut self, action: Action) {
        let span = tracing::debug_span!("execute_action", action = ?action);
        let _guard = span.entered();

        match action {
            Action::PostToWorker(message) => {
                if let Err(e) = self.worker.post(message) {
                    tracing::error!(error = %e, "failed to post to worker");
                    self.app.loading = false;
                    self.app.status = Some(e.to_string());
                }
            }
            Action::PersistFilters(filters) => {
                if let Err(e) = filters.persist(self.store.as_mut()) {
                    tracing::warn!(error = %e, "failed to persist filters");
                    self.app.status = Some(format!("Could not save preferences: {e}"));
                }
            }
            Action::ScheduleMarkerClear { id, after } => {
                self.timers.schedule(id, after, Instant::now());
            }
            Action::CopyLink { url } => {
                if let Err(e) = clipboard::copy_to_clipboard(&mut io::stdout(), &url) {
                    tracing::warn!(error = %e, "clipboard write failed");
                }
            }
            Action::Share { url } => {
                self.app.status = Some(format!("Share: {url}"));
            }
            Action::Quit => {
                self.quit = true;
            }
        }
    }

    fn fire_due_timers(&mut self) {
        if self.timers.is_empty() {
            return;
        }
        for id in self.timers.due(Instant::now()) {
            self.dispatch(&Event::MarkerExpired { id });
        }
    }

    fn render(&self) {
        let (rows, cols) = terminal_size();
        let mut frame = ui::render(&self.app, &self.theme, rows.saturating_sub(1), cols);
        helpers::position_cursor(&mut frame, rows, 1);
        helpers::clear_line(&mut frame);
        frame.push_str("> ");
        write_frame(&frame);
    }

    fn show_help(&self) {
        let mut frame = String::from("\u{1b}[2J\u{1b}[H");
        frame.push_str(&shell::HELP.replace('\n', "\r\n"));
        frame.push_str("\r\n\r\nPress Enter to return.\r\n> ");
        write_frame(&frame);
    }

    fn handle_line(&mut self, line: &str) {
        match shell::parse(line) {
            Ok(Command::Event(event)) => self.dispatch(&event),
            Ok(Command::Help) => self.show_help(),
            Ok(Command::Redraw) => self.render(),
            Err(e) => {
                self.app.status = Some(e.to_string());
                self.render();
            }
        }
    }
}

fn write_frame(frame: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(frame.as_bytes())
        .and_then(|()| stdout.flush())
    {
        tracing::warn!(error = %e, "failed to write frame");
    }
}

/// Terminal size as `(rows, cols)`, 24x80 when it cannot be queried.
fn terminal_size() -> (usize, usize) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => (usize::from(rows), usize::from(cols)),
        Ok(_) => (DEFAULT_ROWS, DEFAULT_COLS),
        Err(e) => {
            tracing::debug!(error = %e, "terminal size unavailable, using 24x80");
            (DEFAULT_ROWS, DEFAULT_COLS)
        }
    }
}

fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    match JsonStore::open(config.storage_path.clone()) {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "preference store ready");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(
                path = %config.storage_path.display(),
                error = %e,
                "preference file unavailable, preferences will not persist"
            );
            Box::new(MemoryStore::default())
        }
    }
}

fn spawn_input(sender: Sender<LoopMessage>) -> Result<()> {
    std::thread::Builder::new()
        .name("gif-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if sender.send(LoopMessage::Input(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin read failed");
                        break;
                    }
                }
            }
            let _ = sender.send(LoopMessage::InputClosed);
        })
        .map(|_| ())
        .map_err(|e| ExplorerError::Worker(format!("failed to spawn input thread: {e}")))
}

fn next_message(shell: &Shell, receiver: &Receiver<LoopMessage>) -> std::result::Result<LoopMessage, RecvTimeoutError> {
    match shell.timers.wait_from(Instant::now()) {
        Some(wait) => receiver.recv_timeout(wait),
        None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
    }
}

fn run(config: &Config) -> Result<()> {
    let span = tracing::info_span!("run", backend = %config.backend_base);
    let _guard = span.entered();

    let store = open_store(config);
    let app = gif_explorer::initialize(config, store.as_ref());

    let (sender, receiver) = mpsc::channel();

    let api = HttpClient::new(config.backend_base.clone(), config.request_timeout())?;
    tracing::debug!(base = %api.base(), timeout_secs = config.request_timeout_secs, "http client ready");
    let worker_sender = sender.clone();
    let worker = worker::spawn(
        GifWorker::new(api, config.download_dir.clone()),
        move |response| {
            let _ = worker_sender.send(LoopMessage::Worker(response));
        },
    )?;

    spawn_input(sender)?;

    let mut shell = Shell {
        app,
        store,
        worker,
        timers: MarkerTimers::default(),
        theme: Theme::resolve(&config.theme),
        quit: false,
    };

    tracing::info!("session started");
    shell.dispatch(&Event::Init);

    while !shell.quit {
        match next_message(&shell, &receiver) {
            Ok(LoopMessage::Input(line)) => shell.handle_line(&line),
            Ok(LoopMessage::Worker(response)) => shell.dispatch(&Event::WorkerResponse(response)),
            Ok(LoopMessage::InputClosed) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
        shell.fire_due_timers();
    }

    tracing::info!("session ended");
    write_frame("\u{1b}[0m\r\n");
    shell.worker.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::load();
    gif_explorer::observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("gif-explorer: {e}");
            ExitCode::FAILURE
        }
    }
}

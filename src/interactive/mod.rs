//! Interactive search screen.
//!
//! `ui::app_state::AppState` is the controller: it turns messages into state
//! changes plus a `Command`. `InteractiveSearch` owns the terminal, feeds key
//! and mouse events through the components, runs the commands, and collects
//! search responses from worker threads.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::ClientConfig;
use crate::recommend::RecommendBackend;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::search_service::SearchService;
use self::constants::*;
use self::domain::models::{Focus, Mode, SearchOutcome, SearchRequest, SearchResponse};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: Arc<SearchService>,
    response_sender: Sender<SearchResponse>,
    response_receiver: Receiver<SearchResponse>,
    pending_searches: usize,
    should_quit: bool,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(config: &ClientConfig, backend: Arc<dyn RecommendBackend>) -> Self {
        let (response_sender, response_receiver) = mpsc::channel();

        Self {
            state: AppState::new(config.top_k, config.response_ordering),
            renderer: Renderer::new(),
            search_service: Arc::new(SearchService::new(backend)),
            response_sender,
            response_receiver,
            pending_searches: 0,
            should_quit: false,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    /// Run the TUI until the user quits. `initial_query`, when given, is
    /// typed into the search bar and submitted before the first frame.
    pub fn run(&mut self, initial_query: Option<&str>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        if let Some(query) = initial_query {
            self.submit_query(query);
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn submit_query(&mut self, query: &str) {
        self.handle_message(Message::QueryChanged(query.to_string()));
        self.handle_message(Message::SubmitRequested);
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();
            self.expire_message();

            if self.should_quit {
                break;
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_input(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Apply every response that has arrived, in arrival order. Returns how
    /// many were applied.
    fn drain_responses(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(response) = self.response_receiver.try_recv() {
            self.pending_searches = self.pending_searches.saturating_sub(1);
            self.handle_message(Message::SearchSettled(response));
            applied += 1;
        }
        applied
    }

    /// Clear the status message once its scheduled delay has passed.
    fn expire_message(&mut self) {
        if let Some(timer) = self.message_timer {
            if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                self.execute_command(Command::ClearMessage);
            }
        }
    }

    /// Returns true when the application should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.should_quit = true;
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.execute_command(Command::ShowMessage(EXIT_PROMPT.to_string()));
            self.execute_command(Command::ScheduleClearMessage(
                DOUBLE_CTRL_C_TIMEOUT_SECS * 1000,
            ));
            return false;
        }

        let message = if self.state.mode == Mode::Help {
            self.renderer.get_help_dialog_mut().handle_key(key)
        } else {
            match key.code {
                KeyCode::F(1) => Some(Message::ShowHelp),
                KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Message::ToggleTruncation)
                }
                _ => match self.state.mode {
                    Mode::Search => self.handle_search_mode_input(key),
                    _ => self.renderer.get_result_detail_mut().handle_key(key),
                },
            }
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        self.should_quit
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => Some(Message::ToggleFocus),
            KeyCode::Char('o') if ctrl => Some(Message::OpenProfile),
            KeyCode::Char('y') if ctrl => Some(Message::CopyProfileUrl),
            KeyCode::Char('p') | KeyCode::Char('n') if ctrl => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => match self.state.search.focus {
                Focus::Input => self.renderer.get_search_bar_mut().handle_key(key),
                Focus::Results => self.renderer.get_result_list_mut().handle_key(key),
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.mode != Mode::Search {
            return;
        }

        let message = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .renderer
                .get_search_bar_mut()
                .handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self
                .renderer
                .get_result_list_mut()
                .handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            MouseEventKind::ScrollUp => self
                .renderer
                .get_result_list_mut()
                .handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            _ => None,
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::DispatchSearch(request) => {
                self.dispatch_search(request);
            }
            Command::ScrollResultsIntoView => {
                self.renderer.scroll_results_into_view();
            }
            Command::OpenUrl(url) => match self.open_url(&url) {
                Ok(()) => self.show_transient("✓ Opened profile in browser".to_string()),
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "failed to open profile");
                    self.show_transient(format!("Failed to open profile: {e}"));
                }
            },
            Command::CopyToClipboard(text) => match self.copy_to_clipboard(&text) {
                Ok(()) => self.show_transient("✓ Copied profile URL".to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to copy to clipboard");
                    self.show_transient(format!("Failed to copy: {e}"));
                }
            },
            Command::ShowMessage(msg) => {
                self.state.ui.message = Some(msg);
            }
            Command::ClearMessage => {
                self.state.ui.message = None;
                self.message_timer = None;
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn show_transient(&mut self, message: String) {
        self.execute_command(Command::ShowMessage(message));
        self.execute_command(Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS));
    }

    /// Run one request on its own thread. Nothing is cancelled when a newer
    /// search starts; the controller decides which response counts.
    fn dispatch_search(&mut self, request: SearchRequest) {
        let id = request.id;
        let query = request.query.clone();
        tracing::info!(id, query = %query, top_k = request.top_k, "dispatching search");

        let service = Arc::clone(&self.search_service);
        let sender = self.response_sender.clone();
        let spawned = thread::Builder::new()
            .name(format!("recommend-{id}"))
            .spawn(move || {
                let response = service.search(request);
                // The receiver only goes away when the UI has exited
                let _ = sender.send(response);
            });

        match spawned {
            Ok(_) => self.pending_searches += 1,
            Err(e) => {
                tracing::error!(id, error = %e, "failed to spawn search worker");
                self.handle_message(Message::SearchSettled(SearchResponse {
                    id,
                    query,
                    outcome: SearchOutcome::Failed,
                }));
            }
        }
    }

    fn open_url(&self, url: &str) -> Result<()> {
        use std::process::{Command, Stdio};

        #[cfg(target_os = "macos")]
        let mut command = {
            let mut command = Command::new("open");
            command.arg(url);
            command
        };

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            command
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to launch a browser for {url}"))?;
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            use std::process::Command;
            let mut child = Command::new("pbcopy")
                .stdin(std::process::Stdio::piped())
                .spawn()
                .context("Failed to spawn pbcopy")?;

            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin
                    .write_all(text.as_bytes())
                    .context("Failed to write to pbcopy")?;
            }

            child.wait().context("Failed to wait for pbcopy")?;
            Ok(())
        }

        #[cfg(target_os = "linux")]
        {
            use std::process::Command;
            let mut child = Command::new("xclip")
                .arg("-selection")
                .arg("clipboard")
                .stdin(std::process::Stdio::piped())
                .spawn()
                .context("Failed to spawn xclip")?;

            if let Some(mut stdin) = child.stdin.take() {
                use std::io::Write;
                stdin
                    .write_all(text.as_bytes())
                    .context("Failed to write to xclip")?;
            }

            child.wait().context("Failed to wait for xclip")?;
            Ok(())
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        {
            let _ = text;
            Err(anyhow::anyhow!("Clipboard not supported on this platform"))
        }
    }
}

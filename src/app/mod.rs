//! Application state and event handling

pub mod effects;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::bank::{BankSource, LoadError, Question};
use crate::config::Config;
use crate::quiz::AdvanceTicket;
use crate::ui;
use input::Action;
use state::AppState;

type LoadResult = Result<Vec<Question>, LoadError>;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Where the question bank comes from
    source: BankSource,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,

    /// Deferred advances from the quiz session
    advance_rx: mpsc::UnboundedReceiver<AdvanceTicket>,

    /// Results of background bank retrievals
    load_tx: mpsc::UnboundedSender<LoadResult>,
    load_rx: mpsc::UnboundedReceiver<LoadResult>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, source: BankSource) -> Result<Self> {
        let (advance_tx, advance_rx) = mpsc::unbounded_channel();
        let (load_tx, load_rx) = mpsc::unbounded_channel();
        let state = AppState::new(advance_tx, config.advance_delay());
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state, source, terminal, advance_rx, load_tx, load_rx })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Retrieve the question bank in the background
    fn spawn_load(&mut self) {
        self.state.begin_reload();
        let source = self.source.clone();
        let tx = self.load_tx.clone();
        tracing::info!(%source, "Loading question bank");

        tokio::spawn(async move {
            let result = source.load().await;
            let _ = tx.send(result);
        });
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        self.spawn_load();
        let mut rng = rand::thread_rng();
        let speed = self.config.animation_speed;
        let confetti = self.config.confetti_enabled();

        loop {
            // Draw UI
            let theme = self.config.active_theme();
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &theme);
            })?;

            // Handle events
            if event::poll(std::time::Duration::from_millis(16))? {
                let screen = self.state.screen();
                let action = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        input::key_to_action(screen, key.code, key.modifiers)
                    }
                    Event::Mouse(mouse) => {
                        input::mouse_to_action(screen, mouse, &self.state.regions)
                    }
                    _ => None,
                };

                if let Some(action) = action {
                    if self.handle_action(action, &mut rng, confetti) {
                        break;
                    }
                }
            }

            // Background results
            while let Ok(result) = self.load_rx.try_recv() {
                self.state.bank_loaded(result);
            }
            while let Ok(ticket) = self.advance_rx.try_recv() {
                self.state.apply_advance(ticket, &mut rng, confetti);
            }

            // Update animations
            self.state.tick(speed, &mut rng);
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Apply an action, returns true if should exit
    fn handle_action(&mut self, action: Action, rng: &mut impl rand::Rng, confetti: bool) -> bool {
        tracing::trace!(?action, "Handling action");
        match action {
            Action::Quit => return true,
            Action::Start => self.state.start_quiz(),
            Action::Retry => {
                if !matches!(self.state.bank, state::BankStatus::Loading) {
                    self.spawn_load();
                }
            }
            Action::Answer(index) => self.state.answer(index, rng, confetti),
            Action::Confirm => {
                let index = self.state.highlighted;
                self.state.answer(index, rng, confetti);
            }
            Action::Up => self.state.move_highlight(false),
            Action::Down => self.state.move_highlight(true),
            Action::Back | Action::Restart => self.state.restart(),
        }
        false
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

//! Main TUI application state and logic

use crate::playback::Playback;
use crate::runner::errors::RunnerError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    State,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::State => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::State,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback cursor over the completed trace
    pub playback: Playback,

    /// Algorithm name shown in the state pane title
    pub title: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub state_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a completed playback
    pub fn new(playback: Playback, title: String) -> Self {
        App {
            playback,
            title,
            focused_pane: FocusedPane::State,
            state_scroll: 0,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing {
                if self.last_play_time.elapsed() >= Duration::from_secs(1) {
                    if self.playback.step_forward().is_ok() {
                        self.status_message = "Playing...".to_string();
                        self.log_scroll = usize::MAX;
                    } else {
                        self.is_playing = false;
                        self.status_message = "Playback complete".to_string();
                    }
                    self.last_play_time = Instant::now();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // State pane on the left, step log on the right, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        super::panes::render_state_pane(
            frame,
            columns[0],
            &self.title,
            self.playback.current_step(),
            self.playback.result(),
            self.playback.is_finished(),
            self.focused_pane == FocusedPane::State,
            self.state_scroll,
        );

        super::panes::render_log_pane(
            frame,
            columns[1],
            self.playback.trace().steps(),
            self.playback.position(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.position(),
            self.playback.total_steps(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_secs(1))
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the last step
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump back to the first step
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Step forward through the trace
    fn step_forward(&mut self) {
        match self.playback.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(RunnerError::PlaybackOutOfRange { .. }) => {
                self.status_message = "Already at the last step".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward through the trace
    fn step_backward(&mut self) {
        match self.playback.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.log_scroll = usize::MAX;
            }
            Err(RunnerError::PlaybackOutOfRange { .. }) => {
                self.status_message = "Already at the first step".to_string();
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventResult, InputEvent, is_force_quit_event};
use crate::presentation::ui::{DeckScreen, DeckScreenState};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Presenting,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: DeckScreenState,
    registry: CommandRegistry,
    mouse: bool,
}

impl App {
    #[must_use]
    pub fn new(screen: DeckScreenState, registry: CommandRegistry) -> Self {
        Self {
            state: AppState::Presenting,
            screen,
            registry,
            mouse: true,
        }
    }

    #[must_use]
    pub const fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse = enabled;
        self
    }

    /// # Errors
    /// Returns error if drawing to the terminal or reading input fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(slides = self.screen.deck().len(), "Presentation started");

        self.run_event_loop(terminal).await?;

        info!(
            last_slide = self.screen.deck().current_index(),
            "Application exiting normally"
        );
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                _ = animation_interval.tick() => {
                    if self.screen.is_animating() {
                        self.screen.tick(ANIMATION_TICK_RATE);
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => match self.handle_event(event) {
                            EventResult::Exit => self.state = AppState::Exiting,
                            EventResult::Consumed => {
                                terminal.draw(|frame| self.render(frame))?;
                            }
                            EventResult::Continue => {}
                        },
                        Some(Err(e)) => return Err(e.into()),
                        None => {
                            debug!("Terminal event stream closed");
                            self.state = AppState::Exiting;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> EventResult {
        match InputEvent::from(event) {
            InputEvent::Key(key) => {
                if is_force_quit_event(&key) {
                    return EventResult::Exit;
                }
                match self.registry.find_action(key) {
                    Some(action) => self.screen.handle_action(action),
                    None => EventResult::Continue,
                }
            }
            InputEvent::Click(position) if self.mouse => self.screen.handle_click(position),
            InputEvent::Resize => EventResult::Consumed,
            InputEvent::Click(_) | InputEvent::Ignored => EventResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let screen = DeckScreen::new(&self.registry).version(crate::VERSION);
        frame.render_stateful_widget(screen, frame.area(), &mut self.screen);
    }
}

//! The slideshow screen: header, poster, content pane, navigation and progress.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::Line,
    widgets::{StatefulWidget, Tabs, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::debug;

use crate::application::{IconResolver, SlideDeck};
use crate::domain::keybinding::{Action, Keybind};
use crate::infrastructure::content::{SUBTITLE, TITLE};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::EventResult;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    ChartPanel, ChartPanelStyle, FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, NavBar,
    NavBarState, NavBarStyle, NavTarget, PosterPane, PosterPaneStyle, ProgressBar, StatsView,
    StatsViewStyle,
};

/// Below this width the poster sits above the content instead of beside it.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;
const STACKED_POSTER_HEIGHT: u16 = 8;
const TRANSITION_MS: u32 = 500;
const TAB_TITLES: [&str; 2] = ["Обзор", "Графики"];

/// Tabs of the content pane on slides that carry charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    Overview,
    Charts,
}

impl ContentTab {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Charts => 1,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Overview => Self::Charts,
            Self::Charts => Self::Overview,
        }
    }
}

pub struct DeckScreenState {
    deck: SlideDeck,
    icons: IconResolver,
    theme: Theme,
    tab: ContentTab,
    nav: NavBarState,
    animations: bool,
    show_key_hints: bool,
    transition: Option<Effect>,
    pending_duration: Duration,
}

impl DeckScreenState {
    #[must_use]
    pub fn new(deck: SlideDeck, icons: IconResolver, theme: Theme) -> Self {
        Self {
            deck,
            icons,
            theme,
            tab: ContentTab::default(),
            nav: NavBarState::default(),
            animations: true,
            show_key_hints: true,
            transition: None,
            pending_duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    #[must_use]
    pub const fn with_key_hints(mut self, visible: bool) -> Self {
        self.show_key_hints = visible;
        self
    }

    #[must_use]
    pub const fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    #[must_use]
    pub const fn tab(&self) -> ContentTab {
        self.tab
    }

    #[must_use]
    pub const fn nav(&self) -> &NavBarState {
        &self.nav
    }

    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn tick(&mut self, duration: Duration) {
        if self.transition.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(duration);
        }
    }

    pub fn handle_action(&mut self, action: Action) -> EventResult {
        let before = self.deck.current_index();

        match action {
            Action::Quit => return EventResult::Exit,
            Action::NextSlide => self.deck.next(),
            Action::PreviousSlide => self.deck.previous(),
            Action::FirstSlide => self.deck.first(),
            Action::LastSlide => self.deck.last(),
            Action::JumpTo(index) => {
                if let Err(e) = self.deck.go_to(index) {
                    debug!(error = %e, "Ignoring slide jump");
                    return EventResult::Continue;
                }
            }
            Action::ToggleTab => {
                if !self.deck.current_layout().has_tabs() {
                    return EventResult::Continue;
                }
                self.tab = self.tab.toggled();
                return EventResult::Consumed;
            }
        }

        if self.deck.current_index() == before {
            return EventResult::Continue;
        }
        self.on_slide_changed();
        EventResult::Consumed
    }

    pub fn handle_click(&mut self, position: Position) -> EventResult {
        match self.nav.hit(position) {
            Some(NavTarget::Previous) => self.handle_action(Action::PreviousSlide),
            Some(NavTarget::Next) => self.handle_action(Action::NextSlide),
            Some(NavTarget::Slide(index)) => self.handle_action(Action::JumpTo(index)),
            None => EventResult::Continue,
        }
    }

    fn on_slide_changed(&mut self) {
        self.tab = ContentTab::Overview;
        if self.animations {
            self.transition = Some(fx::coalesce((TRANSITION_MS, Interpolation::CircOut)));
            self.pending_duration = Duration::ZERO;
        }
    }

    fn run_transition(&mut self, area: Rect, buf: &mut Buffer) {
        let Some(effect) = self.transition.as_mut() else {
            return;
        };

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        let overflow = effect.process(duration.into(), buf, area);
        if overflow.is_some() {
            self.transition = None;
        }
    }
}

impl HasCommands for DeckScreenState {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        let mut commands: Vec<Keybind> = [
            (Action::PreviousSlide, "Назад"),
            (Action::NextSlide, "Далее"),
        ]
        .into_iter()
        .filter_map(|(action, label)| registry.keybind(action, label))
        .collect();

        if self.deck.current_layout().has_tabs()
            && let Some(bind) = registry.keybind(Action::ToggleTab, "Вкладка")
        {
            commands.push(bind);
        }

        commands.extend(registry.keybind(Action::Quit, "Выход"));
        commands
    }
}

pub struct DeckScreen<'a> {
    registry: &'a CommandRegistry,
    version: Option<&'a str>,
}

impl<'a> DeckScreen<'a> {
    #[must_use]
    pub const fn new(registry: &'a CommandRegistry) -> Self {
        Self {
            registry,
            version: None,
        }
    }

    #[must_use]
    pub const fn version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    fn render_content(state: &mut DeckScreenState, area: Rect, buf: &mut Buffer) {
        let theme = state.theme;
        let slide = state.deck.current_slide();
        let layout = state.deck.current_layout();

        let [tabs_area, body_area, _, nav_area] = Layout::vertical([
            Constraint::Length(if layout.has_tabs() { 2 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let tab = if layout.has_tabs() {
            Tabs::new(TAB_TITLES.iter().map(|t| Line::from(*t)))
                .select(state.tab.index())
                .style(theme.dimmed_style)
                .highlight_style(theme.badge_style)
                .divider("│")
                .render(tabs_area, buf);
            state.tab
        } else {
            ContentTab::Overview
        };

        match tab {
            ContentTab::Overview => StatsView::new(slide)
                .bullet(state.icons.resolve("Dot", "Circle"))
                .style(StatsViewStyle::from_theme(&theme))
                .render(body_area, buf),
            ContentTab::Charts => ChartPanel::new(layout.charts())
                .style(ChartPanelStyle::from_theme(&theme))
                .render(body_area, buf),
        }

        let nav = NavBar::new(state.deck.current_index(), state.deck.len())
            .button_icons(
                state.icons.resolve_or_default("ChevronLeft"),
                state.icons.resolve_or_default("ChevronRight"),
            )
            .indicator_icons(
                state.icons.resolve_or_default("Circle"),
                state.icons.resolve_or_default("CircleDot"),
            )
            .style(NavBarStyle::from_theme(&theme));
        nav.render(nav_area, buf, &mut state.nav);
    }
}

impl StatefulWidget for DeckScreen<'_> {
    type State = DeckScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut DeckScreenState) {
        let theme = state.theme;
        buf.set_style(area, theme.base_style);

        let [header_area, body_area, progress_area, footer_area] = Layout::vertical([
            Constraint::Length(HeaderBar::HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(u16::from(state.show_key_hints)),
        ])
        .areas(area);

        let mut header = HeaderBar::new(TITLE, SUBTITLE).style(HeaderBarStyle::from_theme(&theme));
        if let Some(version) = self.version {
            header = header.version(version);
        }
        header.render(header_area, buf);

        let [poster_area, content_area] = if body_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(2)
                .areas(body_area)
        } else {
            Layout::vertical([
                Constraint::Length(STACKED_POSTER_HEIGHT),
                Constraint::Min(0),
            ])
            .spacing(1)
            .areas(body_area)
        };

        PosterPane::new(state.deck.current_slide())
            .icon(state.icons.resolve_or_default("Image"))
            .style(PosterPaneStyle::from_theme(&theme))
            .render(poster_area, buf);

        Self::render_content(state, content_area, buf);

        ProgressBar::new(state.deck.progress())
            .filled_style(Style::default().fg(theme.accent))
            .track_style(theme.track_style)
            .render(progress_area, buf);

        if state.show_key_hints {
            let commands = state.get_commands(self.registry);
            let position = state.deck.position_label();
            FooterBar::new(&commands)
                .right_info(Some(position.as_str()))
                .style(FooterBarStyle::from_theme(&theme))
                .render(footer_area, buf);
        }

        state.run_transition(body_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{GlyphCatalog, moscow_catalog};
    use std::sync::Arc;

    fn state() -> DeckScreenState {
        let deck = SlideDeck::new(Arc::new(moscow_catalog().unwrap()));
        let icons = IconResolver::new(Arc::new(GlyphCatalog::new()));
        DeckScreenState::new(deck, icons, Theme::default()).with_animations(false)
    }

    fn render(state: &mut DeckScreenState, width: u16, height: u16) -> Vec<String> {
        let registry = CommandRegistry::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        DeckScreen::new(&registry)
            .version("0.1.0")
            .render(area, &mut buf, state);
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|r| r.contains(needle))
    }

    #[test]
    fn test_navigation_actions() {
        let mut state = state();

        assert_eq!(state.handle_action(Action::NextSlide), EventResult::Consumed);
        assert_eq!(state.deck().current_index(), 1);

        assert_eq!(state.handle_action(Action::PreviousSlide), EventResult::Consumed);
        assert_eq!(state.handle_action(Action::PreviousSlide), EventResult::Consumed);
        assert_eq!(state.deck().current_index(), 4);

        assert_eq!(state.handle_action(Action::LastSlide), EventResult::Continue);
        assert_eq!(state.handle_action(Action::FirstSlide), EventResult::Consumed);
        assert_eq!(state.deck().current_index(), 0);

        assert_eq!(state.handle_action(Action::Quit), EventResult::Exit);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let mut state = state();
        state.handle_action(Action::JumpTo(2));

        assert_eq!(state.handle_action(Action::JumpTo(8)), EventResult::Continue);
        assert_eq!(state.deck().current_index(), 2);
    }

    #[test]
    fn test_tab_toggles_only_on_chart_slides() {
        let mut state = state();
        assert_eq!(state.handle_action(Action::ToggleTab), EventResult::Continue);
        assert_eq!(state.tab(), ContentTab::Overview);

        state.handle_action(Action::JumpTo(2));
        assert_eq!(state.handle_action(Action::ToggleTab), EventResult::Consumed);
        assert_eq!(state.tab(), ContentTab::Charts);

        state.handle_action(Action::NextSlide);
        assert_eq!(state.tab(), ContentTab::Overview);
    }

    #[test]
    fn test_renders_first_slide() {
        let mut state = state();
        let rows = render(&mut state, 120, 34);

        assert!(screen_contains(&rows, "Развитие Москвы"));
        assert!(screen_contains(&rows, "XIX–XXI век: История великого города"));
        assert!(screen_contains(&rows, " 19 век "));
        assert!(screen_contains(&rows, "Москва Империи"));
        assert!(screen_contains(&rows, "~270 тыс."));
        assert!(screen_contains(&rows, "Население"));
        assert!(screen_contains(&rows, "Площадь"));
        assert!(screen_contains(&rows, "Ключевые события"));
        assert!(screen_contains(&rows, "• 1812 - Пожар Москвы"));
        assert!(screen_contains(&rows, "‹ Назад"));
        assert!(screen_contains(&rows, "Далее ›"));
        assert!(screen_contains(&rows, "◉ ○ ○ ○ ○"));
        assert!(rows[rows.len() - 1].ends_with("1 / 5"));
        assert!(!screen_contains(&rows, "Графики"));
    }

    #[test]
    fn test_progress_row_tracks_slide() {
        let mut state = state();
        let rows = render(&mut state, 100, 34);
        let progress = &rows[rows.len() - 2];
        assert_eq!(progress.matches('━').count(), 20);

        state.handle_action(Action::LastSlide);
        let rows = render(&mut state, 100, 34);
        assert_eq!(rows[rows.len() - 2].matches('━').count(), 100);
    }

    #[test]
    fn test_chart_tab_renders_charts() {
        let mut state = state();
        state.handle_action(Action::JumpTo(2));

        let rows = render(&mut state, 120, 34);
        assert!(screen_contains(&rows, "Обзор"));
        assert!(screen_contains(&rows, "Графики"));
        assert!(screen_contains(&rows, "~8,9 млн"));

        state.handle_action(Action::ToggleTab);
        let rows = render(&mut state, 120, 34);
        assert!(screen_contains(&rows, "Население, млн"));
        assert!(!screen_contains(&rows, "~8,9 млн"));
    }

    #[test]
    fn test_clicks_on_navigation() {
        let mut state = state();
        render(&mut state, 120, 34);

        let next = state.nav().next_button();
        assert_eq!(
            state.handle_click(Position::new(next.x, next.y)),
            EventResult::Consumed
        );
        assert_eq!(state.deck().current_index(), 1);

        render(&mut state, 120, 34);
        let previous = state.nav().previous_button();
        state.handle_click(Position::new(previous.x, previous.y));
        assert_eq!(state.deck().current_index(), 0);

        render(&mut state, 120, 34);
        let fourth = state.nav().indicator(3).unwrap();
        state.handle_click(Position::new(fourth.x, fourth.y));
        assert_eq!(state.deck().current_index(), 3);

        assert_eq!(
            state.handle_click(Position::new(0, 0)),
            EventResult::Continue
        );
    }

    #[test]
    fn test_narrow_terminal_stacks_panes() {
        let mut state = state();
        let rows = render(&mut state, 60, 40);

        let poster = rows.iter().position(|r| r.contains(" 19 век ")).unwrap();
        let stats = rows.iter().position(|r| r.contains("Население")).unwrap();
        assert!(poster < stats);
    }

    #[test]
    fn test_transition_runs_until_complete() {
        let mut state = state().with_animations(true);
        state.handle_action(Action::NextSlide);
        assert!(state.is_animating());

        state.tick(Duration::from_secs(1));
        render(&mut state, 100, 34);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_footer_hides_tab_hint_without_charts() {
        let registry = CommandRegistry::default();
        let mut state = state();
        let labels: Vec<_> = state
            .get_commands(&registry)
            .into_iter()
            .map(|k| k.label)
            .collect();
        assert_eq!(labels, vec!["Назад", "Далее", "Выход"]);

        state.handle_action(Action::JumpTo(4));
        let labels: Vec<_> = state
            .get_commands(&registry)
            .into_iter()
            .map(|k| k.label)
            .collect();
        assert_eq!(labels, vec!["Назад", "Далее", "Вкладка", "Выход"]);
    }
}

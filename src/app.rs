use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::{Position as Cell, Rect};

use crate::audio::Music;
use crate::config::{GameConfig, Settings, SpeedTier};
use crate::game::spawner::{Bounds, Position};
use crate::game::{Round, RoundPhase};
use crate::leaderboard::{Leaderboard, DEFAULT_NAME};

const MAX_NAME_LEN: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Settings,
    Leaderboard,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Instructions,
    Settings,
    Leaderboard,
    Quit,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Start,
            MenuItem::Instructions,
            MenuItem::Settings,
            MenuItem::Leaderboard,
            MenuItem::Quit,
        ]
    }

    pub fn title(&self) -> &str {
        match self {
            MenuItem::Start => "Start Game",
            MenuItem::Instructions => "Instructions",
            MenuItem::Settings => "Settings",
            MenuItem::Leaderboard => "Leaderboard",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Rows of the settings screen, top to bottom.
pub const SETTINGS_ROWS: usize = 4;

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub selected_item: usize,
    pub settings_row: usize,
    pub settings: Settings,
    pub round: Round,
    pub leaderboard: Leaderboard,
    pub music: Music,
    // Name entry state
    pub entering_name: bool,
    pub name_buffer: String,
    /// One-line message shown on the leaderboard screen, e.g. a failed save
    pub notice: Option<String>,
    /// Play field in terminal cells, refreshed every frame
    pub field_area: Rect,
    /// Menu buttons in terminal cells, refreshed while the menu is drawn
    pub menu_areas: Vec<Rect>,
    /// Frames drawn so far, drives the cloud drift
    pub frame_count: u64,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Self {
        let cfg = GameConfig::default();
        let leaderboard = Leaderboard::load(Leaderboard::default_path(), cfg.leaderboard_capacity);
        Self::with_parts(cfg, leaderboard, Music::probe(), StdRng::from_entropy())
    }

    pub fn with_parts(cfg: GameConfig, leaderboard: Leaderboard, music: Music, rng: StdRng) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Menu,
            selected_item: 0,
            settings_row: 0,
            settings: Settings::default(),
            round: Round::new(cfg, rng),
            leaderboard,
            music,
            entering_name: false,
            name_buffer: String::new(),
            notice: None,
            field_area: Rect::default(),
            menu_areas: Vec::new(),
            frame_count: 0,
            last_tick: Instant::now(),
        }
    }

    pub fn field_bounds(&self) -> Bounds {
        Bounds {
            width: self.field_area.width,
            height: self.field_area.height.saturating_mul(2),
        }
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count = self.frame_count.wrapping_add(1);

        // Nothing moves while a name is typed
        if self.entering_name {
            return;
        }

        let bounds = self.field_bounds();
        self.round.advance(dt, bounds);
        if self.round.phase() == RoundPhase::Expired {
            self.music.stop();
            self.entering_name = true;
            self.name_buffer.clear();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // If entering a name, intercept all input
        if self.entering_name {
            self.handle_name_input(key);
            return;
        }

        if key.code == KeyCode::Esc {
            self.show_menu();
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_input(key),
            Screen::Instructions => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Backspace) {
                    self.show_menu();
                }
            }
            Screen::Settings => self.handle_settings_input(key),
            Screen::Leaderboard => match key.code {
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => self.start_round(),
                KeyCode::Backspace => self.show_menu(),
                _ => {}
            },
            Screen::Playing => self.handle_play_input(key),
        }
    }

    pub fn on_click(&mut self, mouse: MouseEvent) {
        if self.entering_name {
            return;
        }
        let cell = Cell::new(mouse.column, mouse.row);
        match self.screen {
            Screen::Playing => {
                // Clicks off the field are not shots
                if !self.field_area.contains(cell) {
                    return;
                }
                let point = Position {
                    x: cell.x - self.field_area.x,
                    y: (cell.y - self.field_area.y) * 2,
                };
                self.round.on_click(point);
            }
            Screen::Menu => {
                if let Some(idx) = self.menu_areas.iter().position(|r| r.contains(cell)) {
                    self.selected_item = idx;
                    self.activate(MenuItem::all()[idx]);
                }
            }
            _ => {}
        }
    }

    fn handle_menu_input(&mut self, key: KeyEvent) {
        let items = MenuItem::all();
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.selected_item = (self.selected_item + 1) % items.len();
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_item = (self.selected_item + items.len() - 1) % items.len();
            }
            KeyCode::Enter => self.activate(items[self.selected_item]),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.selected_item = idx;
                self.activate(items[idx]);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Start => self.start_round(),
            MenuItem::Instructions => self.screen = Screen::Instructions,
            MenuItem::Settings => {
                self.settings_row = 0;
                self.screen = Screen::Settings;
            }
            MenuItem::Leaderboard => {
                self.notice = None;
                self.screen = Screen::Leaderboard;
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    fn handle_settings_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.settings_row = (self.settings_row + 1) % SETTINGS_ROWS;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.settings_row = (self.settings_row + SETTINGS_ROWS - 1) % SETTINGS_ROWS;
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => match self.settings_row {
                0 => self.settings.music_on = !self.settings.music_on,
                1 => self.settings.difficulty = self.settings.difficulty.next(),
                2 => self.settings.speed_tier = self.settings.speed_tier.next(),
                _ => self.show_menu(),
            },
            _ => {}
        }
    }

    fn handle_play_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.round.on_dash(),
            KeyCode::Char('1') | KeyCode::Char('s') => self.round.set_speed_tier(SpeedTier::Slow),
            KeyCode::Char('2') | KeyCode::Char('m') => self.round.set_speed_tier(SpeedTier::Medium),
            KeyCode::Char('3') | KeyCode::Char('f') => self.round.set_speed_tier(SpeedTier::Fast),
            KeyCode::Char('r') | KeyCode::Char('R') => self.round.restart(),
            _ => {}
        }
    }

    fn handle_name_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.name_buffer);
                self.finish_round(&name);
            }
            KeyCode::Backspace => {
                self.name_buffer.pop();
            }
            KeyCode::Esc => {
                // Skip naming, still goes on the board
                self.name_buffer.clear();
                self.finish_round(DEFAULT_NAME);
            }
            KeyCode::Char(c) => {
                if self.name_buffer.chars().count() < MAX_NAME_LEN && (c.is_alphanumeric() || c == ' ' || c == '-' || c == '_') {
                    self.name_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn finish_round(&mut self, name: &str) {
        self.entering_name = false;
        self.notice = match self.round.record_into(&mut self.leaderboard, name) {
            Ok(()) => None,
            Err(e) => Some(format!("Score not saved: {}", e)),
        };
        self.screen = Screen::Leaderboard;
    }

    fn start_round(&mut self) {
        if self.round.phase() != RoundPhase::Idle {
            self.round.return_to_idle();
        }
        let bounds = self.field_bounds();
        self.round.start(self.settings.speed_tier, self.settings.difficulty, bounds);
        self.notice = None;
        self.screen = Screen::Playing;
        self.last_tick = Instant::now();
        if self.settings.music_on {
            self.music.play();
        }
    }

    fn show_menu(&mut self) {
        if self.screen == Screen::Playing {
            info!("Round abandoned at score {}", self.round.session().score);
        }
        if self.round.phase() == RoundPhase::Expired {
            warn!("Leaving an expired round unrecorded");
        }
        self.round.return_to_idle();
        self.music.stop();
        self.screen = Screen::Menu;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    fn app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let cfg = GameConfig::default();
        let board = Leaderboard::load(dir.path().join("leaderboard.json"), cfg.leaderboard_capacity);
        let mut app = App::with_parts(cfg, board, Music::probe(), StdRng::seed_from_u64(9));
        app.field_area = Rect::new(1, 4, 80, 20);
        (app, dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A terminal cell that lands on a solid row of the duck.
    fn duck_cell(app: &App) -> (u16, u16) {
        let duck = app.round.session().duck;
        (app.field_area.x + duck.x + 4, app.field_area.y + (duck.y + 3) / 2)
    }

    #[test]
    fn menu_number_starts_round() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Char('1')));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round.phase(), RoundPhase::Running);
    }

    #[test]
    fn menu_arrows_wrap() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.selected_item, MenuItem::all().len() - 1);
        app.on_key(key(KeyCode::Enter));
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_duck_scores() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        let (col, row) = duck_cell(&app);
        app.on_click(click(col, row));
        assert_eq!(app.round.session().score, 1);
    }

    #[test]
    fn clicking_outside_field_is_ignored() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        app.on_click(click(0, 0));
        app.on_click(click(200, 200));
        assert_eq!(app.round.session().score, 0);
    }

    #[test]
    fn space_dashes() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Char(' ')));
        assert!(app.round.session().dash_active());
        let (col, row) = duck_cell(&app);
        app.on_click(click(col, row));
        assert_eq!(app.round.session().score, 2);
    }

    #[test]
    fn speed_keys_change_tier() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Char('f')));
        assert_eq!(app.round.session().speed_tier, SpeedTier::Fast);
        app.on_key(key(KeyCode::Char('2')));
        assert_eq!(app.round.session().speed_tier, SpeedTier::Medium);
    }

    #[test]
    fn escape_returns_to_menu_and_idles_round() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.round.phase(), RoundPhase::Idle);
    }

    #[test]
    fn expired_round_asks_for_name_then_records() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        let bounds = app.field_bounds();
        app.round.advance(Duration::from_secs(60), bounds);
        app.on_tick();
        assert!(app.entering_name);

        for c in "Drake".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        app.on_key(key(KeyCode::Enter));
        assert!(!app.entering_name);
        assert_eq!(app.screen, Screen::Leaderboard);
        assert_eq!(app.round.phase(), RoundPhase::Recorded);
        assert_eq!(app.leaderboard.entries()[0].name, "Drake");
        assert!(app.notice.is_none());

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.round.phase(), RoundPhase::Idle);
    }

    #[test]
    fn escape_at_name_entry_records_default_name() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        let bounds = app.field_bounds();
        app.round.advance(Duration::from_secs(60), bounds);
        app.on_tick();
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.leaderboard.entries()[0].name, DEFAULT_NAME);
        assert_eq!(app.screen, Screen::Leaderboard);
    }

    #[test]
    fn play_again_from_leaderboard() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Enter));
        let bounds = app.field_bounds();
        app.round.advance(Duration::from_secs(60), bounds);
        app.on_tick();
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round.phase(), RoundPhase::Running);
        assert_eq!(app.round.time_remaining(), 60);
    }

    #[test]
    fn settings_cycle_values() {
        let (mut app, _dir) = app();
        app.on_key(key(KeyCode::Char('3')));
        assert_eq!(app.screen, Screen::Settings);
        app.on_key(key(KeyCode::Enter));
        assert!(!app.settings.music_on);
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.settings.difficulty, Difficulty::Hard);
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.settings.speed_tier, SpeedTier::Medium);
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Menu);
    }

    #[test]
    fn clicking_menu_button_activates_it() {
        let (mut app, _dir) = app();
        app.menu_areas = vec![
            Rect::new(10, 5, 20, 1),
            Rect::new(10, 7, 20, 1),
            Rect::new(10, 9, 20, 1),
            Rect::new(10, 11, 20, 1),
            Rect::new(10, 13, 20, 1),
        ];
        app.on_click(click(15, 11));
        assert_eq!(app.screen, Screen::Leaderboard);
    }
}

use crate::event::AppEvent;
use crate::showcase::card::Card;
use crate::showcase::filter::RepoFilter;
use crate::showcase::page::LOAD_ERROR;
use crate::showcase::Showcase;
use crate::ui::{
    card_list::{CardList, CARD_HEIGHT},
    detail_panel::DetailPanel,
    header_bar::{self, HeaderBar},
    help_panel::HelpPanel,
    input::{self, Action},
    load_panel::LoadPanel,
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Ready(Showcase),
    Failed(String),
}

pub struct App {
    pub username: String,
    pub state: LoadState,
    pub cards: Vec<Card>,

    pub selected: usize,
    pub scroll: usize,
    page_len: usize,

    pub show_detail: bool,
    pub show_help: bool,

    pub last_sync: String,
    pub rate_limit: Option<u32>,

    reload_requested: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            state: LoadState::Loading,
            cards: Vec::new(),
            selected: 0,
            scroll: 0,
            page_len: 1,
            show_detail: false,
            show_help: false,
            last_sync: "never".to_string(),
            rate_limit: None,
            reload_requested: false,
            should_quit: false,
        }
    }

    /// True once per retry request; the caller starts a fresh load.
    pub fn take_reload(&mut self) -> bool {
        std::mem::take(&mut self.reload_requested)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key);
                self.handle_action(action);
            }
            AppEvent::Loaded { result, rate_limit } => {
                self.rate_limit = rate_limit;
                self.last_sync = chrono::Local::now().format("%H:%M:%S").to_string();
                match result {
                    Ok(showcase) => {
                        self.state = LoadState::Ready(showcase);
                        self.reset_view();
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "load failed");
                        self.cards.clear();
                        self.state = LoadState::Failed(e);
                    }
                }
            }
            AppEvent::Resize => {}
        }
    }

    fn handle_action(&mut self, action: Action) {
        if self.show_help || self.show_detail {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ClosePopup | Action::Help | Action::Select => {
                    self.show_help = false;
                    self.show_detail = false;
                }
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit | Action::ClosePopup => self.should_quit = true,
            Action::ScrollDown => {
                if self.selected + 1 < self.cards.len() {
                    self.selected += 1;
                }
            }
            Action::ScrollUp => self.selected = self.selected.saturating_sub(1),
            Action::PageDown => {
                let last = self.cards.len().saturating_sub(1);
                self.selected = (self.selected + self.page_len).min(last);
            }
            Action::PageUp => self.selected = self.selected.saturating_sub(self.page_len),
            Action::SetFilter(filter) => self.set_filter(filter),
            Action::CycleFilter => {
                let next = match self.filter() {
                    RepoFilter::All => RepoFilter::Original,
                    RepoFilter::Original => RepoFilter::Forks,
                    RepoFilter::Forks => RepoFilter::All,
                };
                self.set_filter(next);
            }
            Action::Select => self.show_detail = !self.cards.is_empty(),
            Action::Retry => {
                if !matches!(self.state, LoadState::Loading) {
                    self.state = LoadState::Loading;
                    self.cards.clear();
                    self.reload_requested = true;
                }
            }
            Action::Help => self.show_help = true,
            Action::None => {}
        }
    }

    pub fn filter(&self) -> RepoFilter {
        match self.state {
            LoadState::Ready(ref showcase) => showcase.filter(),
            _ => RepoFilter::default(),
        }
    }

    /// Filter control: re-renders from the held list, never refetches.
    fn set_filter(&mut self, filter: RepoFilter) {
        if let LoadState::Ready(ref mut showcase) = self.state {
            showcase.activate(filter);
            self.reset_view();
        }
    }

    fn reset_view(&mut self) {
        self.cards = match self.state {
            LoadState::Ready(ref showcase) => showcase.cards(),
            _ => Vec::new(),
        };
        self.selected = 0;
        self.scroll = 0;
    }

    fn filter_tabs(&self) -> Vec<(RepoFilter, usize)> {
        match self.state {
            LoadState::Ready(ref showcase) => RepoFilter::ALL
                .iter()
                .map(|&f| (f, f.apply(showcase.repos()).len()))
                .collect(),
            _ => RepoFilter::ALL.iter().map(|&f| (f, 0)).collect(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_bar::HEIGHT),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        let profile = match self.state {
            LoadState::Ready(ref showcase) => Some(showcase.profile_view()),
            _ => None,
        };
        frame.render_widget(
            HeaderBar {
                profile: profile.as_ref(),
                username: &self.username,
            },
            chunks[0],
        );

        match self.state {
            LoadState::Loading => frame.render_widget(LoadPanel::Loading, chunks[1]),
            LoadState::Failed(ref detail) => frame.render_widget(
                LoadPanel::Failed {
                    message: LOAD_ERROR,
                    detail,
                },
                chunks[1],
            ),
            LoadState::Ready(_) => {
                self.ensure_scroll_bounds(chunks[1].height.saturating_sub(2) as usize);
                frame.render_widget(
                    CardList {
                        cards: &self.cards,
                        filter: self.filter(),
                        selected: self.selected,
                        scroll: self.scroll,
                    },
                    chunks[1],
                );
            }
        }

        let tabs = self.filter_tabs();
        frame.render_widget(
            StatusBar {
                filter_tabs: &tabs,
                active: self.filter(),
                username: &self.username,
                last_sync: &self.last_sync,
                rate_limit: self.rate_limit,
            },
            chunks[2],
        );

        if self.show_detail {
            if let Some(card) = self.cards.get(self.selected) {
                frame.render_widget(DetailPanel { card }, size);
            }
        }
        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }

    fn ensure_scroll_bounds(&mut self, visible_height: usize) {
        let visible_cards = (visible_height / CARD_HEIGHT).max(1);
        self.page_len = visible_cards;
        if self.selected >= self.scroll + visible_cards {
            self.scroll = self.selected + 1 - visible_cards;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_now, make_profile, make_repo};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn loaded_app() -> App {
        let repos = vec![
            make_repo("one", false, 1),
            make_repo("two", false, 2),
            make_repo("upstream", true, 3),
        ];
        let mut app = App::new("ann");
        app.handle_event(AppEvent::Loaded {
            result: Ok(Showcase::new(make_profile("ann"), repos, fixed_now())),
            rate_limit: Some(59),
        });
        app
    }

    #[test]
    fn filter_keys_rerender_cards() {
        let mut app = loaded_app();
        assert_eq!(app.cards.len(), 3);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filter(), RepoFilter::Forks);
        assert_eq!(app.cards.len(), 1);
        assert_eq!(app.cards[0].title, "upstream");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.filter(), RepoFilter::All);
        assert_eq!(app.cards.len(), 3);

        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.cards.len(), 2);
        assert!(!app.take_reload());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = loaded_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected, 2);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn failure_then_retry_requests_reload() {
        let mut app = App::new("ann");
        app.handle_event(AppEvent::Loaded {
            result: Err("github error: Not Found".to_string()),
            rate_limit: None,
        });
        assert!(matches!(app.state, LoadState::Failed(_)));
        assert!(app.cards.is_empty());

        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(app.state, LoadState::Loading));
        assert!(app.take_reload());
        assert!(!app.take_reload());
    }

    #[test]
    fn popups_swallow_navigation() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.show_detail);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.filter(), RepoFilter::All);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_detail);
        assert!(!app.should_quit);
    }
}

use crate::showcase::filter::RepoFilter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    SetFilter(RepoFilter),
    CycleFilter,
    Select,
    Retry,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('1') | KeyCode::Char('a') => Action::SetFilter(RepoFilter::All),
        KeyCode::Char('2') | KeyCode::Char('o') => Action::SetFilter(RepoFilter::Original),
        KeyCode::Char('3') | KeyCode::Char('f') => Action::SetFilter(RepoFilter::Forks),
        KeyCode::Tab => Action::CycleFilter,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('r') => Action::Retry,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn filter_keys() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), Action::SetFilter(RepoFilter::All));
        assert_eq!(map_key(key(KeyCode::Char('o'))), Action::SetFilter(RepoFilter::Original));
        assert_eq!(map_key(key(KeyCode::Char('3'))), Action::SetFilter(RepoFilter::Forks));
        assert_eq!(map_key(key(KeyCode::Tab)), Action::CycleFilter);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::None);
    }
}

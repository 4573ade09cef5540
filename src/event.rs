use crate::showcase::Showcase;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Loaded {
        result: Result<Showcase, String>,
        rate_limit: Option<u32>,
    },
}

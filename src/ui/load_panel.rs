use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Stands in for the project grid while loading or after a failed load.
pub enum LoadPanel<'a> {
    Loading,
    Failed { message: &'a str, detail: &'a str },
}

impl<'a> Widget for LoadPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(" Projects ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self {
            LoadPanel::Loading => vec![Line::styled(
                "Loading profile and repositories\u{2026}",
                Style::default().fg(theme::DIM_TEXT),
            )],
            LoadPanel::Failed { message, detail } => vec![
                Line::styled(
                    message.to_string(),
                    Style::default().fg(theme::ERROR_FG).add_modifier(Modifier::BOLD),
                ),
                Line::styled(detail.to_string(), Style::default().fg(theme::DIM_TEXT)),
                Line::from(""),
                Line::styled("press r to retry", Style::default().fg(theme::FILTER_COLOR)),
            ],
        };

        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

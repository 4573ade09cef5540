use crate::showcase::card::Card;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Popup with the full fields of the selected card.
pub struct DetailPanel<'a> {
    pub card: &'a Card,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(70, 50, area);
        Clear.render(popup, buf);

        let label = Style::default().fg(theme::ACCENT);
        let card = self.card;
        let mut lines = vec![
            Line::from(Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::styled("URL  ", label), Span::raw(card.url.clone())]),
        ];
        if let Some(ref demo) = card.demo_url {
            lines.push(Line::from(vec![
                Span::styled("Demo ", label),
                Span::raw(demo.clone()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Lang ", label),
            Span::styled("\u{25cf} ", Style::default().fg(theme::hex_color(card.language_color))),
            Span::raw(card.language.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Stats ", label),
            Span::raw(format!(
                "{} stars, {} forks, updated {}",
                card.stars, card.forks, card.updated
            )),
        ]));
        if card.is_fork {
            lines.push(Line::from(Span::styled("fork", Style::default().fg(theme::FORK_BADGE))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(card.description.clone()));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Project ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::ACCENT)),
            )
            .render(popup, buf);
    }
}

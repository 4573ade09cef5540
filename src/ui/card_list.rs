use crate::showcase::card::Card;
use crate::showcase::filter::RepoFilter;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Rows each card occupies, including the spacer.
pub const CARD_HEIGHT: usize = 4;

pub struct CardList<'a> {
    pub cards: &'a [Card],
    pub filter: RepoFilter,
    pub selected: usize,
    pub scroll: usize,
}

impl<'a> Widget for CardList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(format!(" Projects \u{00b7} {} ({}) ", self.filter.label(), self.cards.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::FILTER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.cards.is_empty() {
            let msg = "No repositories found.";
            let x = inner.x + inner.width.saturating_sub(msg.len() as u16) / 2;
            buf.set_line(
                x,
                inner.y + inner.height / 2,
                &Line::from(Span::styled(msg, Style::default().fg(theme::DIM_TEXT))),
                inner.width,
            );
            return;
        }

        let width = inner.width as usize;
        let visible = (inner.height as usize) / CARD_HEIGHT;
        for (i, card) in self.cards.iter().skip(self.scroll).take(visible.max(1)).enumerate() {
            let y = inner.y + (i * CARD_HEIGHT) as u16;
            let is_selected = self.scroll + i == self.selected;
            let lines = card_lines(card, is_selected, width);

            for (row, line) in lines.iter().enumerate() {
                let ly = y + row as u16;
                if ly >= inner.bottom() {
                    break;
                }
                buf.set_line(inner.x, ly, line, inner.width);
                if is_selected {
                    for x in inner.x..inner.right() {
                        buf[(x, ly)].set_style(Style::default().bg(theme::SELECTED_BG));
                    }
                }
            }
        }
    }
}

pub fn card_lines(card: &Card, selected: bool, width: usize) -> Vec<Line<'static>> {
    let marker = if selected { "\u{25b8} " } else { "  " };
    let mut title = vec![
        Span::styled(marker, Style::default().fg(theme::ACCENT)),
        Span::styled(
            card.title.clone(),
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];
    if card.is_fork {
        title.push(Span::styled(" [fork]", Style::default().fg(theme::FORK_BADGE)));
    }
    if card.demo_url.is_some() {
        title.push(Span::styled(" [demo]", Style::default().fg(theme::FILTER_COLOR)));
    }

    let description = super::truncate_with_ellipsis(&card.description, width.saturating_sub(4));

    let meta = vec![
        Span::raw("    "),
        Span::styled("\u{25cf} ", Style::default().fg(theme::hex_color(card.language_color))),
        Span::raw(format!("{}  ", card.language)),
        Span::styled("\u{2605} ", Style::default().fg(theme::STAR_COLOR)),
        Span::raw(format!("{}  ", card.stars)),
        Span::styled("\u{2442} ", Style::default().fg(theme::DIM_TEXT)),
        Span::raw(format!("{}  ", card.forks)),
        Span::styled(format!("Updated {}", card.updated), Style::default().fg(theme::DIM_TEXT)),
    ];

    vec![
        Line::from(title),
        Line::from(Span::raw(format!("    {description}"))),
        Line::from(meta),
    ]
}

use crate::showcase::filter::RepoFilter;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    /// Filter controls with the number of repositories each one shows.
    pub filter_tabs: &'a [(RepoFilter, usize)],
    pub active: RepoFilter,
    pub username: &'a str,
    pub last_sync: &'a str,
    pub rate_limit: Option<u32>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };

        let mut spans = Vec::new();
        spans.push(Span::styled(" ", Style::default().bg(theme::STATUS_BG)));
        for (i, (filter, count)) in self.filter_tabs.iter().enumerate() {
            let style = if *filter == self.active {
                Style::default()
                    .fg(theme::FILTER_COLOR)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG)
            };
            spans.push(Span::styled(
                format!("[{} {} {}]", i + 1, filter.label(), count),
                style,
            ));
            spans.push(Span::styled(" ", Style::default().bg(theme::STATUS_BG)));
        }

        spans.push(sep());
        spans.push(Span::styled(
            format!(" @{} ", self.username),
            Style::default().bg(theme::STATUS_BG),
        ));
        spans.push(sep());
        spans.push(Span::styled(
            format!(" loaded: {} ", self.last_sync),
            Style::default().bg(theme::STATUS_BG),
        ));

        if let Some(remaining) = self.rate_limit {
            spans.push(sep());
            spans.push(Span::styled(
                format!(" API: {remaining} "),
                Style::default().bg(theme::STATUS_BG),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

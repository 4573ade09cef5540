use crate::showcase::profile::ProfileView;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub const HEIGHT: u16 = 4;

/// Profile summary across the top of the screen.
pub struct HeaderBar<'a> {
    pub profile: Option<&'a ProfileView>,
    pub username: &'a str,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                buf[(x, y)].set_style(bg);
            }
        }

        let mut lines: Vec<Line<'static>> = Vec::new();

        let Some(p) = self.profile else {
            lines.push(Line::from(vec![
                Span::styled(
                    " showcase",
                    Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" \u{2503} @{}", self.username),
                    Style::default().fg(theme::DIM_TEXT),
                ),
            ]));
            render_lines(&lines, area, buf);
            return;
        };

        let mut title = vec![
            Span::styled(
                format!(" {}", p.name),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" @{}", p.login), Style::default().fg(theme::DIM_TEXT)),
        ];
        if let Some(ref blog) = p.blog {
            title.push(Span::styled(" \u{2503} ", Style::default().fg(theme::SEPARATOR)));
            title.push(Span::styled(blog.href.clone(), Style::default().fg(theme::FILTER_COLOR)));
        }
        lines.push(Line::from(title));

        if let Some(ref bio) = p.bio {
            lines.push(Line::from(Span::raw(format!(" {bio}"))));
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {}", p.public_repos), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" repositories  ", Style::default().fg(theme::DIM_TEXT)),
            Span::styled(p.followers.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" followers  ", Style::default().fg(theme::DIM_TEXT)),
            Span::styled(p.following.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" following", Style::default().fg(theme::DIM_TEXT)),
        ]));

        let about_w = (area.width as usize).saturating_sub(2);
        lines.push(Line::from(Span::styled(
            format!(" {}", super::truncate_with_ellipsis(&p.about, about_w)),
            Style::default().fg(theme::DIM_TEXT),
        )));

        render_lines(&lines, area, buf);

        let hint = "? help ";
        let hint_w = UnicodeWidthStr::width(hint) as u16;
        if area.width > hint_w {
            buf.set_line(
                area.right() - hint_w,
                area.y,
                &Line::from(Span::styled(hint, Style::default().fg(theme::DIM_TEXT))),
                hint_w,
            );
        }
    }
}

fn render_lines(lines: &[Line<'_>], area: Rect, buf: &mut Buf) {
    for (i, line) in lines.iter().take(area.height as usize).enumerate() {
        buf.set_line(area.x, area.y + i as u16, line, area.width);
    }
}

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let dim = Style::default().fg(palette.dim);

    // right edge separator
    for y in area.y..area.y + area.height {
        f.render_widget(
            Paragraph::new(Span::styled("│", dim)),
            Rect {
                x: area.x + area.width - 1,
                y,
                width: 1,
                height: 1,
            },
        );
    }

    let inner_width = area.width.saturating_sub(2) as usize;

    if !app.sidebar_open {
        let mut lines = vec![Line::from(Span::styled("≡", dim))];
        for chat in &app.chats {
            let marker = if app.current_chat_id.as_deref() == Some(chat.id.as_str()) {
                Span::styled("💬", Style::default().fg(palette.accent))
            } else {
                Span::styled("💬", dim)
            };
            lines.push(Line::from(marker));
        }
        f.render_widget(
            Paragraph::new(lines),
            Rect {
                x: area.x + 1,
                y: area.y,
                width: area.width.saturating_sub(2),
                height: area.height,
            },
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "+ Chat Baru (Ctrl+N)",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(inner_width),
        dim,
    )));

    for (idx, chat) in app.chats.iter().enumerate() {
        let active = app.current_chat_id.as_deref() == Some(chat.id.as_str());
        let selected = app.focus == Focus::Sidebar && idx == app.sidebar_selected;

        let mut style = if active {
            Style::default().fg(palette.accent)
        } else {
            Style::default().fg(palette.fg)
        };
        if selected {
            style = style.bg(palette.highlight_bg).add_modifier(Modifier::BOLD);
        }

        let marker = if active { "▸ " } else { "  " };
        let title = truncate_to_width(&chat.title, inner_width.saturating_sub(2));
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(title, style),
        ]));
    }

    if app.chats.is_empty() {
        lines.push(Line::from(Span::styled("belum ada riwayat", dim)));
    }

    f.render_widget(
        Paragraph::new(lines),
        Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(1),
        },
    );

    let hint = Line::from(Span::styled("Tab pilih · Enter buka · d hapus", dim));
    f.render_widget(
        Paragraph::new(hint),
        Rect {
            x: area.x + 1,
            y: area.y + area.height - 1,
            width: area.width.saturating_sub(2),
            height: 1,
        },
    );
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator.clone(),
            Style::default().fg(palette.dim),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    // stop affordance while generating, send affordance otherwise
    let (prefix, prefix_style) = if app.is_generating {
        ("■ ", Style::default().fg(palette.danger))
    } else {
        ("→ ", Style::default().fg(palette.accent))
    };

    let text_span = if app.is_generating {
        Span::styled(
            "menunggu jawaban... (Ctrl+S untuk berhenti)",
            Style::default().fg(palette.dim).add_modifier(Modifier::DIM),
        )
    } else if app.input.is_empty() {
        Span::styled(
            "Ketik pesan Anda di sini...",
            Style::default().fg(palette.dim),
        )
    } else {
        Span::styled(app.input.clone(), Style::default().fg(palette.fg))
    };

    let visible_width = area.width.saturating_sub(2);
    let text_width = app.input.width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix, prefix_style),
            text_span,
        ]))
        .scroll((0, scroll_offset)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(palette.dim),
        ))),
        Rect {
            x: area.x,
            y: area.y + 2,
            width: area.width,
            height: 1,
        },
    );

    if app.focus == Focus::Input && !app.is_generating {
        let cursor_x = area.x + 2 + app.input.width() as u16 - scroll_offset;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

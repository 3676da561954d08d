use crate::app::App;
use crate::chat_message;
use crate::models::Role;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    if app.messages.is_empty() {
        draw_welcome(f, app, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let last_idx = app.messages.len() - 1;
    for (idx, message) in app.messages.iter().enumerate() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        // only the newest assistant message types itself out
        let reveal = if idx == last_idx && message.role == Role::Assistant {
            app.typewriter.as_ref().map(|tw| tw.visible())
        } else {
            None
        };
        lines.extend(chat_message::render_message(
            message,
            reveal,
            area.width,
            app.theme,
        ));
    }

    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    // chat_scroll counts up from the bottom; 0 pins the newest line
    let offset = max_scroll.saturating_sub(app.chat_scroll.min(max_scroll));

    let transcript = Paragraph::new(lines).scroll((offset, 0));
    f.render_widget(transcript, area);
}

fn draw_welcome(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();
    let fg = Style::default().fg(palette.fg);
    let dim = Style::default().fg(palette.dim);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("👋 Selamat datang di Career Coach AI!", fg)),
        Line::from(""),
        Line::from(Span::styled("Saya siap membantu Anda dengan:", dim)),
        Line::from(""),
        Line::from(Span::styled("💼 Saran pengembangan karir", fg)),
        Line::from(Span::styled("🎯 Simulasi wawancara kerja", fg)),
        Line::from(Span::styled("📝 Tips menyusun CV & Resume", fg)),
        Line::from(Span::styled("🚀 Strategi mencari kerja", fg)),
        Line::from(""),
        Line::from(Span::styled(
            "Silakan mulai dengan mengetikkan pertanyaan atau topik yang ingin Anda diskusikan.",
            dim,
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

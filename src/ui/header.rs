use crate::app::App;
use crate::constants::{APP_SUBTITLE, APP_TITLE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let palette = app.theme.palette();

    let title = Line::from(vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(APP_SUBTITLE, Style::default().fg(palette.dim)),
    ]);
    f.render_widget(
        Paragraph::new(title),
        Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(1),
            height: 1,
        },
    );

    let theme_hint = Line::from(Span::styled(
        format!("tema: {} (Ctrl+T) ", app.theme.label()),
        Style::default().fg(palette.dim),
    ));
    f.render_widget(
        Paragraph::new(theme_hint).alignment(Alignment::Right),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        },
    );

    let separator = "─".repeat(area.width as usize);
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
}

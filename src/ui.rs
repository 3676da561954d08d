use crate::app::{App, AppScreen};
use crate::constants::APP_TITLE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub mod chat;
pub mod header;
pub mod input;
pub mod sidebar;

pub fn draw(f: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let size = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        size,
    );

    let sidebar_width = if app.sidebar_open { 28 } else { 4 };
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(sidebar_width),
            Constraint::Min(1),
        ])
        .split(size);

    sidebar::draw_sidebar(f, app, horizontal[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(horizontal[1]);

    header::draw_header(f, app, main[0]);
    chat::draw_messages(f, app, main[1]);
    app.status.render(f, main[2], app.theme);
    input::draw_input(f, app, main[3]);

    if app.screen == AppScreen::QuitConfirm {
        draw_quit_confirm(f, app, size);
    }
}

fn draw_quit_confirm(f: &mut Frame, app: &App, size: Rect) {
    let palette = app.theme.palette();
    let width = 44.min(size.width);
    let height = 3;
    let area = Rect {
        x: size.width.saturating_sub(width) / 2,
        y: size.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, area);

    let prompt = Paragraph::new(Line::from(format!("Keluar dari {}? (y/n)", APP_TITLE)))
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.highlight_bg).fg(palette.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.danger).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(prompt, area);
}

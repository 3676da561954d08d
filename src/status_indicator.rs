use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct StatusIndicator {
    thinking: bool,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: Theme) {
        let palette = theme.palette();
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let thinking_indicator = if self.thinking {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let status_text = if self.thinking {
            "Sedang mengetik..."
        } else {
            ""
        };

        let status = Line::from(vec![
            Span::styled(thinking_indicator, Style::default().fg(palette.accent)),
            Span::raw(" "),
            Span::styled(status_text, Style::default().fg(palette.dim)),
        ]);

        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Left),
            area,
        );
    }
}

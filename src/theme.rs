use ratatui::style::Color;

/// Light/dark palette pair, toggled at runtime with Ctrl+T.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub user: Color,
    pub assistant: Color,
    pub code: Color,
    pub danger: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "terang",
            Theme::Dark => "gelap",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg: Color::Rgb(17, 24, 39),
                fg: Color::Rgb(229, 231, 235),
                dim: Color::DarkGray,
                accent: Color::Rgb(74, 222, 128),
                user: Color::Rgb(255, 223, 128),
                assistant: Color::Rgb(144, 238, 144),
                code: Color::Rgb(209, 154, 102),
                danger: Color::Rgb(248, 113, 113),
                highlight_bg: Color::Rgb(55, 65, 81),
            },
            Theme::Light => Palette {
                bg: Color::Rgb(245, 247, 250),
                fg: Color::Rgb(31, 41, 55),
                dim: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(22, 163, 74),
                user: Color::Rgb(37, 99, 235),
                assistant: Color::Rgb(21, 128, 61),
                code: Color::Rgb(180, 83, 9),
                danger: Color::Rgb(220, 38, 38),
                highlight_bg: Color::Rgb(229, 231, 235),
            },
        }
    }
}

use ratatui::style::Color;

/// Day/night color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub panel: Color,
    pub border: Color,
    pub focus: Color,
    pub active_bg: Color,
}

/// Slate night sky with cyan accents
pub const NIGHT: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    fg: Color::Rgb(226, 232, 240),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(34, 211, 238),
    panel: Color::Rgb(30, 41, 59),
    border: Color::Rgb(51, 65, 85),
    focus: Color::Rgb(250, 250, 250),
    active_bg: Color::Rgb(59, 130, 246),
};

pub const DAY: Palette = Palette {
    bg: Color::Rgb(248, 250, 252),
    fg: Color::Rgb(15, 23, 42),
    dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(8, 145, 178),
    panel: Color::Rgb(255, 255, 255),
    border: Color::Rgb(203, 213, 225),
    focus: Color::Rgb(15, 23, 42),
    active_bg: Color::Rgb(59, 130, 246),
};

pub fn palette(is_dark_mode: bool) -> &'static Palette {
    if is_dark_mode {
        &NIGHT
    } else {
        &DAY
    }
}

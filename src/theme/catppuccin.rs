use super::palette::Palette;
use ratatui::style::Color;

/// Catppuccin Mocha, as published at catppuccin.com/palette.
pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    crust: Color::Rgb(17, 17, 27),
    text: Color::Rgb(205, 214, 244),
    subtext0: Color::Rgb(166, 173, 200),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    surface2: Color::Rgb(88, 91, 112),
    overlay0: Color::Rgb(108, 112, 134),
    blue: Color::Rgb(137, 180, 250),
    lavender: Color::Rgb(180, 190, 254),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    peach: Color::Rgb(250, 179, 135),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
    pink: Color::Rgb(245, 194, 231),
};

// The note's original look: dark slate background, pink commands, orange headers.
pub const CATPPUCCIN_FRAPPE: Palette = Palette {
    base: Color::Rgb(35, 38, 52),
    crust: Color::Rgb(28, 30, 42),
    text: Color::Rgb(202, 211, 245),
    subtext0: Color::Rgb(165, 173, 206),
    surface0: Color::Rgb(59, 66, 97),
    surface1: Color::Rgb(73, 77, 100),
    surface2: Color::Rgb(91, 96, 120),
    overlay0: Color::Rgb(110, 115, 141),
    blue: Color::Rgb(138, 173, 244),
    lavender: Color::Rgb(183, 189, 248),
    green: Color::Rgb(166, 209, 137),
    yellow: Color::Rgb(229, 200, 144),
    peach: Color::Rgb(255, 158, 100),
    red: Color::Rgb(231, 130, 132),
    mauve: Color::Rgb(202, 158, 230),
    pink: Color::Rgb(245, 189, 230),
};

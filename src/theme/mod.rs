use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Style,
    pub border: Style,
    pub border_focus: Style,

    pub category: Style,
    pub command_name: Style,
    pub command_desc: Style,
    pub divider: Style,
    pub entry_highlight: Style,

    pub search_bar: Style,
    pub search_placeholder: Style,
    pub search_filtered: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    Frappe,
    Mocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Frappe => "Catppuccin (Frappé)",
            PaletteType::Mocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::Frappe,
            PaletteType::Mocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl std::str::FromStr for PaletteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frappe" | "frappé" => Ok(PaletteType::Frappe),
            "mocha" | "catppuccin" => Ok(PaletteType::Mocha),
            "nord" => Ok(PaletteType::Nord),
            "gruvbox" => Ok(PaletteType::Gruvbox),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Frappe => Self::from_palette(&catppuccin::CATPPUCCIN_FRAPPE),
            PaletteType::Mocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            background: Style::default().bg(p.base).fg(p.text),
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.lavender),

            category: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            command_name: Style::default().fg(p.pink),
            command_desc: Style::default().fg(p.text),
            divider: Style::default().fg(p.overlay0),
            entry_highlight: Style::default()
                .bg(p.surface0)
                .fg(p.lavender)
                .add_modifier(Modifier::BOLD),

            search_bar: Style::default().bg(p.surface0).fg(p.text),
            search_placeholder: Style::default()
                .bg(p.surface0)
                .fg(p.overlay0)
                .add_modifier(Modifier::ITALIC),
            search_filtered: Style::default().bg(dim_color(p.yellow, 0.25)).fg(p.text),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_active: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface1).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: Style::default()
                .bg(p.lavender)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}

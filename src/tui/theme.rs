//! # Theme
//!
//! Colour palette, typography and shape tokens applied to every component.
//!
//! The two palettes are the baseline purple scheme in a light and a dark
//! variant. Components never hard-code colours; they read them from
//! [`Theme`] so switching modes at runtime repaints everything.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub surface: Color,
    pub on_surface: Color,
    pub background: Color,
    /// Used for the body block's border, standing in for elevation shadow.
    pub outline: Color,
}

pub const LIGHT: Palette = Palette {
    primary: Color::Rgb(102, 80, 164),
    on_primary: Color::Rgb(255, 255, 255),
    secondary: Color::Rgb(98, 91, 113),
    surface: Color::Rgb(255, 251, 254),
    on_surface: Color::Rgb(28, 27, 31),
    background: Color::Rgb(255, 251, 254),
    outline: Color::Rgb(121, 116, 126),
};

pub const DARK: Palette = Palette {
    primary: Color::Rgb(208, 188, 255),
    on_primary: Color::Rgb(56, 30, 114),
    secondary: Color::Rgb(204, 194, 220),
    surface: Color::Rgb(28, 27, 31),
    on_surface: Color::Rgb(230, 225, 229),
    background: Color::Rgb(28, 27, 31),
    outline: Color::Rgb(147, 143, 153),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub title_small: Style,
    pub body_medium: Style,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_small: Style::new().add_modifier(Modifier::BOLD),
            body_medium: Style::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shapes {
    /// Body container.
    pub medium: BorderType,
    /// Avatar clip.
    pub circle: BorderType,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            medium: BorderType::Rounded,
            circle: BorderType::Rounded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub typography: Typography,
    pub shapes: Shapes,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        };
        Self {
            mode,
            palette,
            typography: Typography::default(),
            shapes: Shapes::default(),
        }
    }

    /// Base style for the whole screen.
    pub fn screen(&self) -> Style {
        Style::new()
            .bg(self.palette.background)
            .fg(self.palette.on_surface)
    }

    /// Body background for a colour transition value (0.0 surface, 1.0 primary).
    pub fn body_background(&self, t: f32) -> Color {
        lerp_color(self.palette.surface, self.palette.primary, t)
    }

    /// Body text colour matching [`body_background`](Self::body_background).
    pub fn body_foreground(&self, t: f32) -> Color {
        lerp_color(self.palette.on_surface, self.palette.on_primary, t)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

fn blend_channel(from: u8, to: u8, t: f32) -> u8 {
    let from_f = f32::from(from);
    let to_f = f32::from(to);
    let result = from_f * (1.0 - t) + to_f * t;
    result.round().clamp(0.0, 255.0) as u8
}

/// Linear interpolation between two colours.
///
/// Only RGB colours blend; for indexed or named colours the nearer endpoint
/// is returned.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            blend_channel(r1, r2, t),
            blend_channel(g1, g2, t),
            blend_channel(b1, b2, t),
        ),
        _ if t < 0.5 => from,
        _ => to,
    }
}

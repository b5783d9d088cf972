use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{AnsiColor, Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// Terminal palette. Every accessor returns [`Color::Reset`] when colors are
/// disabled.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

/// Palette roles, each with a dark and a light variant.
#[derive(Debug, Clone, Copy)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Info,
  Success,
  Label,
  Value,
}

impl Role {
  const fn rgb(self, theme: Theme) -> (u8, u8, u8) {
    match (self, theme) {
      (Self::Timestamp, Theme::Dark) => (128, 150, 170),
      (Self::Timestamp, Theme::Light) => (96, 96, 110),
      (Self::Primary, Theme::Dark) => (45, 180, 160),
      (Self::Primary, Theme::Light) => (20, 100, 90),
      (Self::Accent, Theme::Dark) => (230, 110, 80),
      (Self::Accent, Theme::Light) => (190, 60, 40),
      (Self::Info, Theme::Dark) => (120, 170, 230),
      (Self::Info, Theme::Light) => (40, 90, 170),
      (Self::Success, Theme::Dark) => (110, 200, 120),
      (Self::Success, Theme::Light) => (30, 130, 60),
      (Self::Label, Theme::Dark) => (200, 160, 230),
      (Self::Label, Theme::Light) => (110, 60, 150),
      (Self::Value, Theme::Dark) => (240, 220, 120),
      (Self::Value, Theme::Light) => (150, 110, 20),
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = role.rgb(self.theme);
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(Role::Accent)
  }

  pub const fn info(&self) -> Color {
    self.pick(Role::Info)
  }

  pub const fn success(&self) -> Color {
    self.pick(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.pick(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.pick(Role::Value)
  }

  /// Help output styles; always the dark palette, clap decides whether to
  /// apply them.
  pub const fn clap_styles() -> Styles {
    const fn fg(role: Role) -> Option<ClapColor> {
      let (r, g, b) = role.rgb(Theme::Dark);
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(fg(Role::Label)))
      .usage(Style::new().bold().fg_color(fg(Role::Label)))
      .literal(Style::new().fg_color(fg(Role::Success)))
      .placeholder(Style::new().fg_color(fg(Role::Info)))
      .error(Style::new().bold().fg_color(Some(ClapColor::Ansi(AnsiColor::Red))))
      .valid(Style::new().fg_color(fg(Role::Success)))
      .invalid(Style::new().bold().fg_color(fg(Role::Accent)))
  }
}

/// Converts a crossterm color for use in a comfy-table cell.
pub fn comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    Color::Black => ComfyColor::Black,
    Color::DarkGrey => ComfyColor::DarkGrey,
    Color::Red => ComfyColor::Red,
    Color::DarkRed => ComfyColor::DarkRed,
    Color::Green => ComfyColor::Green,
    Color::DarkGreen => ComfyColor::DarkGreen,
    Color::Yellow => ComfyColor::Yellow,
    Color::DarkYellow => ComfyColor::DarkYellow,
    Color::Blue => ComfyColor::Blue,
    Color::DarkBlue => ComfyColor::DarkBlue,
    Color::Magenta => ComfyColor::Magenta,
    Color::DarkMagenta => ComfyColor::DarkMagenta,
    Color::Cyan => ComfyColor::Cyan,
    Color::DarkCyan => ComfyColor::DarkCyan,
    Color::White => ComfyColor::White,
    Color::Grey => ComfyColor::Grey,
    Color::Reset => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => std::env::var("COLORFGBG")
      .ok()
      .as_deref()
      .and_then(theme_from_colorfgbg)
      .unwrap_or(Theme::Dark),
  }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background codes 7 and
/// 9 to 15 are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
  let background = value.rsplit(';').next()?.parse::<u8>().ok()?;
  Some(if background == 7 || background >= 9 {
    Theme::Light
  } else {
    Theme::Dark
  })
}

use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use crate::settings::Appearance;

/// Resolve the iced Theme from the appearance setting.
pub fn resolve_theme(appearance: Appearance) -> Theme {
    let is_dark = match appearance {
        Appearance::Dark => true,
        Appearance::Light => false,
        Appearance::System => detect_system_dark_mode(),
    };

    let palette = if is_dark {
        dark_palette()
    } else {
        light_palette()
    };

    Theme::custom("Gijiroku", palette)
}

/// De-emphasized text color for labels, timestamps and fallback messages.
pub fn tertiary_color(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: 0.55, ..base }
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x18, 0x1a, 0x1f),
        text: color!(0xd8, 0xda, 0xde),
        primary: color!(0x4c, 0x8e, 0xd9),
        success: color!(0x3f, 0xb9, 0x50),
        warning: color!(0xe5, 0xb4, 0x2e),
        danger: color!(0xe5, 0x53, 0x4b),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xf4, 0xf5, 0xf7),
        text: color!(0x22, 0x24, 0x28),
        primary: color!(0x2d, 0x6c, 0xc4),
        success: color!(0x2d, 0x9a, 0x44),
        warning: color!(0xc9, 0x84, 0x0a),
        danger: color!(0xd6, 0x3a, 0x31),
    }
}

fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| {
                String::from_utf8_lossy(&o.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(true)
    }
    #[cfg(not(target_os = "macos"))]
    {
        true
    }
}

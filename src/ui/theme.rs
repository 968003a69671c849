//! Theme for the lunch picker
//!
//! Dark case-opening aesthetic: near-black blue surface, yellow/orange
//! accents for the marker and the winning card.

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

/// Page background (deep blue-gray)
pub const BACKGROUND: Color = color!(0x0d1424);
/// Elevated surface behind the track strip
pub const SURFACE: Color = color!(0x1f2937);
/// Card face
pub const CARD_BG: Color = color!(0x374151);
/// Card border
pub const CARD_BORDER: Color = color!(0x4b5563);
/// Dialog surface
pub const DIALOG_BG: Color = color!(0x1f2937);
/// Divider / subtle borders
pub const DIVIDER: Color = color!(0x374151);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
pub const TEXT_MUTED: Color = color!(0x9ca3af);

/// Marker and winner accent
pub const ACCENT_YELLOW: Color = color!(0xfacc15);
pub const ACCENT_ORANGE: Color = color!(0xf97316);

/// Primary action (start button)
pub const ACCENT_BLUE: Color = color!(0x2563eb);
pub const ACCENT_BLUE_HOVER: Color = color!(0x1d4ed8);
/// Reset action
pub const ACCENT_GREEN: Color = color!(0x16a34a);
pub const ACCENT_GREEN_HOVER: Color = color!(0x15803d);
/// Delete action
pub const DANGER: Color = color!(0xf87171);

/// Color with adjusted alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// ============================================================================
// Container styles
// ============================================================================

/// Full-page background
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Panel that frames the scrolling track
pub fn strip_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(SURFACE, 0.5))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: DIVIDER,
        },
        ..Default::default()
    }
}

/// The fixed center marker line
pub fn marker(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ACCENT_YELLOW)),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: with_alpha(ACCENT_YELLOW, 0.5),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 10.0,
        },
        ..Default::default()
    }
}

/// Ordinary restaurant card
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(CARD_BG, 0.5))),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: CARD_BORDER,
        },
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Winning card; `glow` ramps from 0 to 1 as the result banner fades in
pub fn card_winning(glow: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(ACCENT_YELLOW, 0.12 * glow))),
        border: Border {
            radius: 8.0.into(),
            width: 2.0,
            color: with_alpha(ACCENT_YELLOW, glow.max(0.3)),
        },
        shadow: Shadow {
            color: with_alpha(ACCENT_YELLOW, 0.4 * glow),
            offset: Vector::new(0.0, 0.0),
            blur_radius: 18.0 * glow,
        },
        text_color: Some(ACCENT_YELLOW),
        ..Default::default()
    }
}

/// Dialog body surface
pub fn dialog_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DIALOG_BG)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: DIVIDER,
        },
        ..Default::default()
    }
}

/// Row item in the manage dialog
pub fn manage_row(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Primary action button (start the spin)
///
/// Disabled covers both the spinning state and an empty roster: flat
/// gray, no glow, so the button reads as inert.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    if status == button::Status::Disabled {
        return button::Style {
            background: Some(Background::Color(CARD_BG)),
            text_color: TEXT_MUTED,
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };
    }
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_BLUE_HOVER,
        _ => ACCENT_BLUE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: with_alpha(ACCENT_BLUE, 0.4),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Reset button shown with the result
pub fn reset_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_GREEN_HOVER,
        _ => ACCENT_GREEN,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined secondary button (add / manage)
pub fn outline_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(CARD_BG, 0.8),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: CARD_BORDER,
        },
        ..Default::default()
    }
}

/// Borderless text button (dialog cancel)
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(CARD_BG, 0.8),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_SECONDARY,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Delete button in the manage dialog
pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => with_alpha(DANGER, 0.15),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: DANGER,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input styles
// ============================================================================

/// Dialog text input
pub fn dialog_input(_theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(CARD_BG),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: CARD_BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT_PRIMARY,
        selection: with_alpha(ACCENT_YELLOW, 0.4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_button_drops_to_flat_gray() {
        let theme = Theme::Dark;
        let disabled = primary_button(&theme, button::Status::Disabled);
        let active = primary_button(&theme, button::Status::Active);

        assert_eq!(disabled.background, Some(Background::Color(CARD_BG)));
        assert_eq!(disabled.text_color, TEXT_MUTED);
        assert_eq!(disabled.shadow.blur_radius, 0.0);
        assert_ne!(disabled.background, active.background);
    }
}

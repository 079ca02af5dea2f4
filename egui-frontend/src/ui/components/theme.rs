//! # Theme Configuration
//!
//! This module provides centralized color configuration for OmniCalc.
//! All visual styling should use these constants to ensure consistency
//! and easy theme management.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Calculator display panel colors
    pub display: DisplayColors,
    /// Keypad key colors
    pub keypad: KeypadColors,
    /// Card and container colors (age tool)
    pub cards: CardColors,
    /// Text and typography colors
    pub typography: TypographyColors,
}

/// Colors for the calculator display panel
#[derive(Debug, Clone)]
pub struct DisplayColors {
    /// Display panel background (dark slate)
    pub background: Color32,
    /// Main result text
    pub text: Color32,
    /// Dimmed pending-equation preview text
    pub text_dim: Color32,
    /// Error text shown in place of a result
    pub error_text: Color32,
}

/// Colors for the keypad keys
#[derive(Debug, Clone)]
pub struct KeypadColors {
    /// Digit key background
    pub digit_background: Color32,
    /// Utility key background (clear, backspace)
    pub utility_background: Color32,
    /// Operator key background
    pub operator_background: Color32,
    /// Operator key text
    pub operator_text: Color32,
    /// Equals key background
    pub equals_background: Color32,
}

/// Colors for result and insight cards in the age tool
#[derive(Debug, Clone)]
pub struct CardColors {
    /// Plain card background
    pub background: Color32,
    /// Plain card border
    pub border: Color32,
    /// Highlighted age-result card background (indigo)
    pub age_background: Color32,
    /// Dark zodiac-insights card background
    pub insights_background: Color32,
    /// Subpanel background inside the insights card
    pub insights_panel: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (less prominent)
    pub secondary: Color32,
    /// Accent text color (links, highlighted words)
    pub accent: Color32,
    /// Error message color
    pub error: Color32,
    /// White text (for dark backgrounds)
    pub white: Color32,
}

/// The current active theme - indigo accents over light slate
pub const CURRENT_THEME: Theme = Theme {
    display: DisplayColors {
        background: Color32::from_rgb(30, 41, 59),
        text: Color32::WHITE,
        text_dim: Color32::from_rgb(148, 163, 184),
        error_text: Color32::from_rgb(248, 113, 113),
    },
    keypad: KeypadColors {
        digit_background: Color32::from_rgb(255, 255, 255),
        utility_background: Color32::from_rgb(226, 232, 240),
        operator_background: Color32::from_rgb(224, 231, 255),
        operator_text: Color32::from_rgb(67, 56, 202),
        equals_background: Color32::from_rgb(79, 70, 229),
    },
    cards: CardColors {
        background: Color32::from_rgb(255, 255, 255),
        border: Color32::from_rgb(226, 232, 240),
        age_background: Color32::from_rgb(99, 102, 241),
        insights_background: Color32::from_rgb(15, 23, 42),
        insights_panel: Color32::from_rgb(30, 41, 59),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(51, 65, 85),
        secondary: Color32::from_rgb(100, 116, 139),
        accent: Color32::from_rgb(99, 102, 241),
        error: Color32::from_rgb(220, 38, 38),
        white: Color32::WHITE,
    },
};

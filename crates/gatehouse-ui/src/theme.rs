//! Gatehouse UI theme - Indigo palette.
//!
//! A restrained indigo scheme for the auth forms, plus semantic colors for
//! notice banners.

use eframe::egui::Color32;

/// Primary brand colors - Indigo palette.
pub mod brand {
    use super::Color32;

    /// Light indigo - subtle highlights and backgrounds.
    pub const LIGHT: Color32 = Color32::from_rgb(0xa5, 0xb4, 0xfc); // #a5b4fc

    /// Primary indigo - main accent color.
    pub const PRIMARY: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1); // #6366f1

    /// Darker indigo - hover states and emphasis.
    pub const DARK: Color32 = Color32::from_rgb(0x4f, 0x46, 0xe5); // #4f46e5

    /// Deep indigo - text on light backgrounds.
    pub const DEEP: Color32 = Color32::from_rgb(0x43, 0x38, 0xca); // #4338ca
}

/// Semantic status colors for notices.
pub mod status {
    use super::Color32;

    /// Success - friendly green.
    pub const SUCCESS: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e); // #22c55e

    /// Error - soft red.
    pub const ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44); // #ef4444
}

/// Notice banner backgrounds (muted fills behind the message text).
pub mod notice {
    use super::Color32;

    /// Background behind an error notice.
    pub const ERROR_BG: Color32 = Color32::from_rgb(0x45, 0x1a, 0x1a);

    /// Background behind a success notice.
    pub const SUCCESS_BG: Color32 = Color32::from_rgb(0x14, 0x3a, 0x24);
}

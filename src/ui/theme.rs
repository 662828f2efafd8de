use crossterm::style::Color;

/// Design tokens for the BFG CLI.
///
/// All icons and colors used in output are sourced from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const SKIP: &str = "○";
    pub const ARROW: &str = "↳";
    pub const PACKAGE: &str = "📦";
    pub const BUILD: &str = "⚙";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const SKIP: &str = "[SKIP]";
    pub const ARROW: &str = "->";
    pub const PACKAGE: &str = "[PKG]";
    pub const BUILD: &str = "[BUILD]";
}

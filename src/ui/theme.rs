use ratatui::style::Color;

/// Clinic theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::clinic()
    }
}

impl Theme {
    pub fn clinic() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            accent: Color::Rgb(115, 218, 202),  // #73DACA
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            warning: Color::Rgb(247, 118, 142), // #F7768E
        }
    }

    pub fn current() -> Self {
        Self::clinic()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn warning() -> Color {
        Theme::current().warning
    }
}

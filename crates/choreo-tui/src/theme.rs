use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Per-section accents
    pub hero: Color,
    pub about: Color,
    pub services: Color,
    pub contact: Color,

    // Semantic colors
    pub accent: Color,
    pub hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Gruvbox Dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            hero: Color::Rgb(0xd8, 0xa6, 0x57),
            about: Color::Rgb(0x7d, 0xae, 0xa3),
            services: Color::Rgb(0xa9, 0xb6, 0x65),
            contact: Color::Rgb(0xd3, 0x86, 0x9b),
            accent: Color::Rgb(0xe7, 0x8a, 0x4e),
            hint: Color::Rgb(0x7c, 0x6f, 0x64),
        }
    }
}

impl Theme {
    /// Accent color for a section by track index.
    pub fn section_accent(&self, index: usize) -> Color {
        match index {
            0 => self.hero,
            1 => self.about,
            2 => self.services,
            _ => self.contact,
        }
    }
}

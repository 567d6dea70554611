//! Color scheme system for the pathpick terminal UI.
//!
//! Provides dark, light, and colorblind-friendly palettes, plus a
//! monochrome scheme for `--no-color`.

use ratatui::style::Color;

use super::input::FileCategory;

/// Color scheme for the pathpick TUI.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Color for directories
    pub dirs: Color,
    /// Checkbox color for selected rows
    pub checked: Color,
    /// Color for excluded paths in the candidates panel
    pub excluded: Color,
    /// Cursor highlight
    pub selected: Color,

    // File category colors (icons and the summary panel)
    pub images: Color,
    pub audio: Color,
    pub video: Color,
    pub code: Color,
    pub documents: Color,
    pub archives: Color,
    pub database: Color,

    // Text colors
    /// Primary text color
    pub text: Color,
    /// Secondary, dimmed text
    pub text_dim: Color,
    /// Border color for panels
    pub border: Color,

    // Header and status bar
    pub header_fg: Color,
    pub header_bg: Color,
    pub accent: Color,
    pub path_fg: Color,
    pub hint_fg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
    pub size_fg: Color,
    pub key_fg: Color,
    pub search_fg: Color,
    pub warning_fg: Color,
    /// Background for overlays (help, confirmation)
    pub overlay_bg: Color,
}

impl Default for ColorScheme {
    /// Returns the dark color scheme as the default.
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Creates a dark color scheme.
    pub fn dark() -> Self {
        Self {
            dirs: Color::Rgb(100, 149, 237),     // Cornflower blue
            checked: Color::Rgb(80, 250, 123),   // Green
            excluded: Color::Rgb(255, 85, 85),   // Red
            selected: Color::Rgb(255, 215, 0),   // Gold highlight

            images: Color::Rgb(97, 175, 239),    // Soft blue
            audio: Color::Rgb(50, 205, 50),      // Lime green
            video: Color::Rgb(138, 43, 226),     // Blue violet
            code: Color::Rgb(241, 250, 140),     // Yellow
            documents: Color::Rgb(255, 99, 71),  // Tomato
            archives: Color::Rgb(255, 165, 0),   // Orange
            database: Color::Rgb(123, 104, 238), // Medium slate blue

            text: Color::Rgb(248, 248, 242),     // Off-white
            text_dim: Color::Rgb(136, 136, 136), // Medium gray
            border: Color::Rgb(98, 114, 164),    // Muted purple-blue

            header_fg: Color::Rgb(248, 248, 242),
            header_bg: Color::Rgb(40, 42, 54),
            accent: Color::Rgb(189, 147, 249),   // Purple accent
            path_fg: Color::Rgb(139, 233, 253),  // Cyan for paths
            hint_fg: Color::Rgb(98, 114, 164),
            status_fg: Color::Rgb(248, 248, 242),
            status_bg: Color::Rgb(68, 71, 90),
            size_fg: Color::Rgb(80, 250, 123),
            key_fg: Color::Rgb(255, 184, 108),   // Orange for keys
            search_fg: Color::Rgb(139, 233, 253),
            warning_fg: Color::Rgb(255, 184, 108),
            overlay_bg: Color::Rgb(30, 30, 40),
        }
    }

    /// Creates a light color scheme for bright terminals.
    pub fn light() -> Self {
        Self {
            dirs: Color::Rgb(30, 80, 180),       // Deep blue
            checked: Color::Rgb(22, 130, 80),    // Dark green
            excluded: Color::Rgb(180, 30, 30),   // Dark red
            selected: Color::Rgb(0, 100, 200),   // Strong blue

            images: Color::Rgb(30, 80, 180),
            audio: Color::Rgb(0, 140, 0),
            video: Color::Rgb(100, 30, 180),
            code: Color::Rgb(184, 134, 11),      // Dark goldenrod
            documents: Color::Rgb(178, 34, 34),  // Firebrick
            archives: Color::Rgb(200, 120, 0),
            database: Color::Rgb(72, 61, 139),   // Dark slate blue

            text: Color::Rgb(30, 30, 30),
            text_dim: Color::Rgb(100, 100, 100),
            border: Color::Rgb(80, 80, 120),

            header_fg: Color::Rgb(30, 30, 30),
            header_bg: Color::Rgb(230, 230, 235),
            accent: Color::Rgb(100, 60, 180),
            path_fg: Color::Rgb(0, 100, 150),
            hint_fg: Color::Rgb(120, 120, 140),
            status_fg: Color::Rgb(30, 30, 30),
            status_bg: Color::Rgb(210, 210, 220),
            size_fg: Color::Rgb(22, 130, 80),
            key_fg: Color::Rgb(180, 100, 50),
            search_fg: Color::Rgb(0, 100, 150),
            warning_fg: Color::Rgb(180, 100, 50),
            overlay_bg: Color::Rgb(245, 245, 250),
        }
    }

    /// Creates a colorblind-friendly scheme (Okabe-Ito palette).
    pub fn colorblind() -> Self {
        Self {
            dirs: Color::Rgb(86, 180, 233),      // Sky blue
            checked: Color::Rgb(0, 158, 115),    // Bluish green
            excluded: Color::Rgb(213, 94, 0),    // Vermillion
            selected: Color::Rgb(255, 255, 255), // White for maximum contrast

            images: Color::Rgb(0, 114, 178),
            audio: Color::Rgb(0, 158, 115),
            video: Color::Rgb(204, 121, 167),
            code: Color::Rgb(240, 228, 66),
            documents: Color::Rgb(230, 159, 0),
            archives: Color::Rgb(213, 94, 0),
            database: Color::Rgb(86, 180, 233),

            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(170, 170, 170),
            border: Color::Rgb(136, 136, 136),

            header_fg: Color::Rgb(255, 255, 255),
            header_bg: Color::Rgb(40, 40, 50),
            accent: Color::Rgb(86, 180, 233),
            path_fg: Color::Rgb(240, 228, 66),
            hint_fg: Color::Rgb(153, 153, 153),
            status_fg: Color::Rgb(255, 255, 255),
            status_bg: Color::Rgb(60, 60, 70),
            size_fg: Color::Rgb(0, 158, 115),
            key_fg: Color::Rgb(230, 159, 0),
            search_fg: Color::Rgb(86, 180, 233),
            warning_fg: Color::Rgb(230, 159, 0),
            overlay_bg: Color::Rgb(30, 30, 40),
        }
    }

    /// Terminal default colors everywhere. Emphasis comes from modifiers only.
    pub fn monochrome() -> Self {
        let c = Color::Reset;
        Self {
            dirs: c,
            checked: c,
            excluded: c,
            selected: c,
            images: c,
            audio: c,
            video: c,
            code: c,
            documents: c,
            archives: c,
            database: c,
            text: c,
            text_dim: c,
            border: c,
            header_fg: c,
            header_bg: c,
            accent: c,
            path_fg: c,
            hint_fg: c,
            status_fg: c,
            status_bg: c,
            size_fg: c,
            key_fg: c,
            search_fg: c,
            warning_fg: c,
            overlay_bg: c,
        }
    }

    /// Pick a scheme by name. Unknown names fall back to the dark scheme.
    pub fn from_name(name: &str, no_color: bool) -> Self {
        if no_color {
            return Self::monochrome();
        }
        match name {
            "light" => Self::light(),
            "colorblind" => Self::colorblind(),
            _ => Self::dark(),
        }
    }

    /// Maps a file category to its icon color.
    pub fn category_color(&self, category: FileCategory) -> Color {
        match category {
            FileCategory::Images => self.images,
            FileCategory::Audio => self.audio,
            FileCategory::Video => self.video,
            FileCategory::Code => self.code,
            FileCategory::Documents => self.documents,
            FileCategory::Archives => self.archives,
            FileCategory::Database => self.database,
            FileCategory::Other => self.text_dim,
        }
    }
}

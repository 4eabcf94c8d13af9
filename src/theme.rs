/// Colors for the composed preview surface: banner highlight + viewport
/// background behind transparent SVGs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Warning highlight behind the banner.
pub const LIGHT_YELLOW: Color = Color { r: 255, g: 255, b: 224 };

/// Default viewport background.
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

/// CSS for a checkerboard viewport background, so transparent regions of an
/// SVG stay distinguishable from the page.
pub const CHECKERBOARD_CSS: &str = "background-image: \
linear-gradient(45deg, #e0e0e0 25%, transparent 25%), \
linear-gradient(-45deg, #e0e0e0 25%, transparent 25%), \
linear-gradient(45deg, transparent 75%, #e0e0e0 75%), \
linear-gradient(-45deg, transparent 75%, #e0e0e0 75%); \
background-size: 16px 16px; \
background-position: 0 0, 0 8px, 8px -8px, -8px 0;";

impl Color {
    /// Parse `#rrggbb` (leading `#` optional). Returns None on anything else.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 { return None; }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Format as `#rrggbb` for embedding in the rendered document's CSS.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

//! Player customization
//!
//! Colors and icon picked in the editor panel. Lives for the whole session
//! and is never touched by gameplay.

use serde::{Deserialize, Serialize};

/// An sRGB color as chosen in a color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the format `<input type="color">` reports)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Opaque linear RGBA, for sRGB render targets
    pub fn to_linear(&self) -> [f32; 4] {
        fn decode(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b), 1.0]
    }
}

/// Player glyph variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconKind {
    #[default]
    Square,
    Cat,
    Star,
}

impl IconKind {
    pub const ALL: [IconKind; 3] = [IconKind::Square, IconKind::Cat, IconKind::Star];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Square => "square",
            IconKind::Cat => "cat",
            IconKind::Star => "star",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "sq" => Some(IconKind::Square),
            "cat" => Some(IconKind::Cat),
            "star" => Some(IconKind::Star),
            _ => None,
        }
    }
}

/// Cosmetic choices read by the renderer every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    pub player_color: Rgb,
    pub enemy_color: Rgb,
    pub background_color: Rgb,
    pub icon: IconKind,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            player_color: Rgb::new(0xa0, 0x20, 0xf0),
            enemy_color: Rgb::new(0xff, 0x33, 0x33),
            background_color: Rgb::BLACK,
            icon: IconKind::Square,
        }
    }
}

/// Owner of the customization: the editor writes, the renderer reads
#[derive(Debug, Clone, Default)]
pub struct CustomizationStore {
    current: Customization,
    editor_open: bool,
}

impl CustomizationStore {
    pub fn new(current: Customization) -> Self {
        Self {
            current,
            editor_open: false,
        }
    }

    pub fn get(&self) -> &Customization {
        &self.current
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn set_editor_open(&mut self, open: bool) {
        self.editor_open = open;
    }

    pub fn set_player_color(&mut self, color: Rgb) {
        self.current.player_color = color;
    }

    pub fn set_enemy_color(&mut self, color: Rgb) {
        self.current.enemy_color = color;
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.current.background_color = color;
    }

    pub fn set_icon(&mut self, icon: IconKind) {
        if icon != self.current.icon {
            log::info!("Icon set to {}", icon.as_str());
        }
        self.current.icon = icon;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb::from_hex("#A020F0"), Some(Rgb::new(0xa0, 0x20, 0xf0)));
        assert_eq!(Rgb::from_hex("#ff3333"), Some(Rgb::new(0xff, 0x33, 0x33)));
        assert_eq!(Rgb::from_hex(" #000000 "), Some(Rgb::BLACK));
    }

    #[test]
    fn test_hex_parse_rejects_garbage() {
        assert_eq!(Rgb::from_hex("A020F0"), None);
        assert_eq!(Rgb::from_hex("#A020F"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(0xa0, 0x20, 0xf0).to_hex(), "#a020f0");
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Rgb::BLACK.to_linear(), [0.0, 0.0, 0.0, 1.0]);
        let white = Rgb::WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        // Mid grey is darker in linear space
        assert!(Rgb::new(128, 128, 128).to_linear()[0] < 0.25);
    }

    #[test]
    fn test_icon_names() {
        for icon in IconKind::ALL {
            assert_eq!(IconKind::from_str(icon.as_str()), Some(icon));
        }
        assert_eq!(IconKind::from_str("STAR"), Some(IconKind::Star));
        assert_eq!(IconKind::from_str("dog"), None);
    }

    #[test]
    fn test_store_writes() {
        let mut store = CustomizationStore::default();
        assert_eq!(store.get(), &Customization::default());

        store.set_background_color(Rgb::WHITE);
        store.set_icon(IconKind::Cat);
        assert_eq!(store.get().background_color, Rgb::WHITE);
        assert_eq!(store.get().icon, IconKind::Cat);
        assert_eq!(store.get().player_color, Rgb::new(0xa0, 0x20, 0xf0));
    }
}

use eframe::egui;

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xA8, 0xE6, 0x8F);
pub const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(0x94, 0xD3, 0x7C);
pub const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(0x1E, 0x6B, 0x2E);
pub const SNAKE_BODY: egui::Color32 = egui::Color32::from_rgb(0x2E, 0x8B, 0x57);
pub const SNAKE_EYE: egui::Color32 = egui::Color32::WHITE;
const FOOD_FALLBACK: egui::Color32 = egui::Color32::from_rgb(0x8B, 0x00, 0x00);

/// `#RRGGBB` to a color; anything else falls back to dark red.
pub fn parse_hex_color(value: &str) -> egui::Color32 {
    if value.len() != 7 {
        return FOOD_FALLBACK;
    }
    egui::Color32::from_hex(value).unwrap_or(FOOD_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_color() {
        assert_eq!(parse_hex_color("#4B0082"), egui::Color32::from_rgb(0x4B, 0x00, 0x82));
    }

    #[test]
    fn test_malformed_color_falls_back() {
        assert_eq!(parse_hex_color("4B0082"), FOOD_FALLBACK);
        assert_eq!(parse_hex_color("#4B00"), FOOD_FALLBACK);
        assert_eq!(parse_hex_color("#ZZ0082"), FOOD_FALLBACK);
        assert_eq!(parse_hex_color("#4B008200"), FOOD_FALLBACK);
    }
}

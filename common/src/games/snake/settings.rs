use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_FOOD_PALETTE: &[&str] = &[
    "#8B0000", "#4B0082", "#006400", "#8B4513", "#483D8B", "#800000", "#2F4F4F", "#5D3FD3",
];

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub field_size: i32,
    pub start_position: Point,
    pub start_direction: Direction,
    pub base_speed: f32,
    pub speed_increment: f32,
    pub score_unit: u32,
    pub initial_food: Point,
    pub food_palette: Vec<String>,
    pub frame_interval_ms: u32,
}

impl SnakeSettings {
    pub fn field(&self) -> FieldSize {
        FieldSize::new(self.field_size)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_size: 18,
            start_position: Point::new(1, 1),
            start_direction: Direction::Right,
            base_speed: 5.0,
            speed_increment: 0.5,
            score_unit: 1,
            initial_food: Point::new(6, 7),
            food_palette: DEFAULT_FOOD_PALETTE.iter().map(|c| c.to_string()).collect(),
            frame_interval_ms: 16,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_size < 5 || self.field_size > 100 {
            return Err("field_size must be between 5 and 100".to_string());
        }
        let field = self.field();
        if !field.contains(self.start_position) {
            return Err("start_position must be inside the grid".to_string());
        }
        if self.start_direction == Direction::Idle {
            return Err("start_direction must not be Idle".to_string());
        }
        if !field.contains(self.initial_food) {
            return Err("initial_food must be inside the grid".to_string());
        }
        if self.initial_food == self.start_position {
            return Err("initial_food must not overlap start_position".to_string());
        }
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err("base_speed must be a positive number".to_string());
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err("speed_increment must not be negative".to_string());
        }
        if self.score_unit == 0 {
            return Err("score_unit must be at least 1".to_string());
        }
        if self.food_palette.is_empty() {
            return Err("food_palette must contain at least one color".to_string());
        }
        if let Some(bad) = self.food_palette.iter().find(|c| !is_hex_color(c)) {
            return Err(format!("food_palette entry '{}' is not a #RRGGBB color", bad));
        }
        if self.frame_interval_ms == 0 || self.frame_interval_ms > 1000 {
            return Err("frame_interval_ms must be between 1 and 1000".to_string());
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_settings_survive_yaml() {
        let settings = SnakeSettings::default();
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&settings).unwrap();
        let loaded: SnakeSettings = serializer.deserialize(&text).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_start_on_wall_is_rejected() {
        let settings = SnakeSettings {
            start_position: Point::new(0, 1),
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_palette_color_is_rejected() {
        let settings = SnakeSettings {
            food_palette: vec!["#12345".to_string()],
            ..SnakeSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("#12345"));
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let settings = SnakeSettings {
            base_speed: 0.0,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}

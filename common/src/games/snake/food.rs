use super::entity::Snake;
use crate::games::SessionRng;
use super::types::{FieldSize, Food, Point};

const MAX_RANDOM_ATTEMPTS: usize = 100;
const FALLBACK_COLOR: &str = "#8B0000";

/// Draws a free interior cell for new food, or `None` when the snake fills the board.
pub fn place_food(
    field_size: &FieldSize,
    snake: &Snake,
    palette: &[String],
    rng: &mut SessionRng,
) -> Option<Food> {
    let position = pick_free_cell(field_size, snake, rng)?;
    Some(Food {
        position,
        color: pick_color(palette, rng),
    })
}

/// Random palette entry; an empty palette yields the fallback color.
pub(crate) fn pick_color(palette: &[String], rng: &mut SessionRng) -> String {
    rng.choose(palette)
        .cloned()
        .unwrap_or_else(|| FALLBACK_COLOR.to_string())
}

fn pick_free_cell(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if snake.len() >= field_size.interior_cell_count() {
        return None;
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let x = rng.random_range(1..field_size.extent);
        let y = rng.random_range(1..field_size.extent);
        let pos = Point::new(x, y);

        if !snake.occupies(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Point> = field_size
        .interior()
        .filter(|pos| !snake.occupies(pos))
        .collect();
    rng.choose(&free).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec!["#8B0000".to_string(), "#4B0082".to_string()]
    }

    #[test]
    fn test_food_never_lands_on_snake() {
        let field = FieldSize::new(6);
        let body: Vec<Point> = field.interior().take(20).collect();
        let snake = Snake::from_segments(&body);
        let mut rng = SessionRng::new(3);

        for _ in 0..200 {
            let food = place_food(&field, &snake, &palette(), &mut rng).unwrap();
            assert!(field.contains(food.position));
            assert!(!snake.occupies(&food.position));
            assert!(palette().contains(&food.color));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let field = FieldSize::new(5);
        let free = Point::new(3, 2);
        let body: Vec<Point> = field.interior().filter(|p| *p != free).collect();
        let snake = Snake::from_segments(&body);
        let mut rng = SessionRng::new(11);

        let food = place_food(&field, &snake, &palette(), &mut rng).unwrap();
        assert_eq!(food.position, free);
    }

    #[test]
    fn test_full_board_has_no_food() {
        let field = FieldSize::new(4);
        let body: Vec<Point> = field.interior().collect();
        let snake = Snake::from_segments(&body);
        let mut rng = SessionRng::new(5);

        assert!(place_food(&field, &snake, &palette(), &mut rng).is_none());
    }

    #[test]
    fn test_empty_palette_uses_fallback_color() {
        let field = FieldSize::new(18);
        let snake = Snake::new(Point::new(1, 1));
        let mut rng = SessionRng::new(5);

        let food = place_food(&field, &snake, &[], &mut rng).unwrap();
        assert_eq!(food.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_pick_color_stays_in_palette() {
        let mut rng = SessionRng::new(8);
        for _ in 0..50 {
            assert!(palette().contains(&pick_color(&palette(), &mut rng)));
        }
        assert_eq!(pick_color(&[], &mut rng), FALLBACK_COLOR);
    }
}

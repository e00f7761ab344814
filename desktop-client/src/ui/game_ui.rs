use common::games::snake::{Direction, Point, SnakeSnapshot};
use eframe::egui;

use crate::colors::{BOARD_BACKGROUND, GRID_LINE, SNAKE_BODY, SNAKE_EYE, SNAKE_HEAD, parse_hex_color};
use crate::command_sender::CommandSender;

pub fn direction_for_key(key: egui::Key) -> Option<Direction> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Direction::Up),
        egui::Key::ArrowDown | egui::Key::S => Some(Direction::Down),
        egui::Key::ArrowLeft | egui::Key::A => Some(Direction::Left),
        egui::Key::ArrowRight | egui::Key::D => Some(Direction::Right),
        _ => None,
    }
}

pub struct SnakeGameUi {
    cell_size: f32,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Forwards every heading key pressed this frame; the session filters them.
    pub fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let directions: Vec<Direction> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, repeat: false, ..
                    } => direction_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for direction in directions {
            command_sender.turn(direction);
        }
    }

    pub fn render_board(&self, ui: &mut egui::Ui, snapshot: Option<&SnakeSnapshot>, extent: i32) {
        let cells = (extent - 1).max(1) as f32;
        let size = egui::vec2(cells * self.cell_size, cells * self.cell_size);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 4.0, BOARD_BACKGROUND);
        for i in 1..(extent - 1) {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [rect.min + egui::vec2(offset, 0.0), rect.min + egui::vec2(offset, size.y)],
                egui::Stroke::new(1.0, GRID_LINE),
            );
            painter.line_segment(
                [rect.min + egui::vec2(0.0, offset), rect.min + egui::vec2(size.x, offset)],
                egui::Stroke::new(1.0, GRID_LINE),
            );
        }

        let Some(snapshot) = snapshot else {
            return;
        };

        if let Some(food) = &snapshot.food {
            let cell = self.cell_rect(rect, food.position);
            painter.circle_filled(cell.center(), self.cell_size * 0.4, parse_hex_color(&food.color));
        }

        for (index, segment) in snapshot.segments.iter().enumerate().rev() {
            let cell = self.cell_rect(rect, *segment).shrink(1.0);
            if index == 0 {
                painter.rect_filled(cell, 6.0, SNAKE_HEAD);
                self.draw_eyes(&painter, cell, snapshot.heading);
            } else {
                painter.rect_filled(cell, 3.0, SNAKE_BODY);
            }
        }
    }

    fn cell_rect(&self, board: egui::Rect, point: Point) -> egui::Rect {
        let min = board.min
            + egui::vec2(
                (point.x - 1) as f32 * self.cell_size,
                (point.y - 1) as f32 * self.cell_size,
            );
        egui::Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size))
    }

    /// Eyes sit on the side of the head facing the heading.
    fn draw_eyes(&self, painter: &egui::Painter, head: egui::Rect, heading: Direction) {
        let (dx, dy) = heading.delta();
        let forward = egui::vec2(dx as f32, dy as f32) * head.width() * 0.2;
        let side = egui::vec2(-dy as f32, dx as f32) * head.width() * 0.2;
        let side = if side == egui::Vec2::ZERO {
            egui::vec2(head.width() * 0.2, 0.0)
        } else {
            side
        };
        let radius = head.width() * 0.1;

        painter.circle_filled(head.center() + forward + side, radius, SNAKE_EYE);
        painter.circle_filled(head.center() + forward - side, radius, SNAKE_EYE);
    }
}

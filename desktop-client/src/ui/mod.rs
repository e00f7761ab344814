mod game_ui;

use common::games::snake::SessionCommand;
use eframe::egui;

use crate::command_sender::CommandSender;
use crate::state::SharedState;
use game_ui::SnakeGameUi;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: SnakeGameUi,
    field_extent: i32,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        cell_size: f32,
        field_extent: i32,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: SnakeGameUi::new(cell_size),
            field_extent,
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, score: u32, speed: Option<f32>) {
        ui.horizontal(|ui| {
            if ui.button("▶ Play").clicked() {
                self.command_sender.send(SessionCommand::Start);
            }
            if ui.button("■ End").clicked() {
                self.command_sender.send(SessionCommand::End);
            }
            ui.separator();
            ui.label(egui::RichText::new(format!("Score: {}", score)).strong());
            ui.label(format!("HighScore: {}", self.shared_state.high_score()));
            if let Some(speed) = speed {
                ui.label(format!("Speed: {:.1}", speed));
            }
        });
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        let events = self.shared_state.events();
        if events.is_empty() {
            ui.label("Use Arrow Keys or WASD to steer");
            return;
        }
        for event in events.iter().rev() {
            ui.label(event.as_str());
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        let snapshot = self.shared_state.get_snapshot();
        let active = snapshot.as_ref().is_some_and(|s| s.active);
        if active {
            self.game_ui.handle_input(ctx, &self.command_sender);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(
                ui,
                snapshot.as_ref().map(|s| s.score).unwrap_or(0),
                snapshot.as_ref().map(|s| s.speed),
            );
            ui.separator();

            ui.vertical_centered(|ui| {
                self.game_ui.render_board(ui, snapshot.as_ref(), self.field_extent);

                if snapshot.as_ref().is_some_and(|s| !s.active) {
                    ui.label(
                        egui::RichText::new("Game Over! Click Play to restart.")
                            .color(egui::Color32::RED)
                            .size(20.0),
                    );
                }
            });

            ui.separator();
            self.render_event_log(ui);
        });
    }
}

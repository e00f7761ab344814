mod colors;
mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::snake::SessionCommand;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use command_sender::CommandSender;
use offline::{build_session, run_snake_game};
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "grid_snake")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    /// Fixes the food sequence, useful for reproducing a game.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = config::get_config_manager(&args.config).get_config()?;
    log!("Loaded config from {}", args.config);

    let shared_state = SharedState::new(config.ui.event_log_size, 0);
    let session = build_session(&config, &shared_state, args.seed);
    shared_state.set_high_score(session.high_score());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let command_sender = CommandSender::new(command_tx);

    let game_thread = std::thread::spawn(move || {
        match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(run_snake_game(session, command_rx)),
            Err(e) => log!("Failed to start game runtime: {}", e),
        }
    });

    let extent = config.game.field_size;
    let board_side = (extent - 1) as f32 * config.ui.cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_side + 60.0, board_side + 260.0])
            .with_title("Grid Snake"),
        ..Default::default()
    };

    let app_sender = command_sender.clone();
    let cell_size = config.ui.cell_size;
    let run_result = eframe::run_native(
        "Grid Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                app_sender,
                cell_size,
                extent,
            )))
        }),
    );

    command_sender.send(SessionCommand::Shutdown);
    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }

    run_result?;
    Ok(())
}

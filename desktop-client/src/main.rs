mod config;
mod input;
mod score_submitter;
mod tick_clock;
mod ui;

use std::path::PathBuf;
use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};
use eframe::egui;

use score_submitter::ScoreSubmitter;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("SnakeClient".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(args.config);
    let config = config_manager.get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let submitter = ScoreSubmitter::start(&config.server)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 680.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(config_manager, config, rng, submitter)))),
    )?;

    log!("Client closed");
    Ok(())
}

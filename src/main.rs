mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::PanelScoresApp;
use clap::Parser;
use config::Cli;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Panel Scores – Student Performance",
        options,
        Box::new(move |_cc| Ok(Box::new(PanelScoresApp::new(cli.data)))),
    )
}

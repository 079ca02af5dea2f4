use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::OmniCalcApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting OmniCalc egui application");

    // Phone-ish portrait window: keypad on top of a display fits this shape
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 720.0])
            .with_min_inner_size([380.0, 600.0])
            .with_title("OmniCalc")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "OmniCalc",
        options,
        Box::new(|cc| {
            match OmniCalcApp::new(cc) {
                Ok(app) => {
                    info!("Successfully initialized OmniCalc app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}

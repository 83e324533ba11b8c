//! SiDing GUI
//!
//! A graphical interface for playing SiDing against the computer or another player.

use siding::ui::SidingApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("SiDing 四顶"),
        ..Default::default()
    };

    eframe::run_native(
        "SiDing",
        options,
        Box::new(|cc| Ok(Box::new(SidingApp::new(cc)))),
    )
}

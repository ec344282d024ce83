//! Point / OBB collision demo
//!
//! Move the selected entity with WASD (XY plane) and left control / left
//! shift (Z), swap the selection with space, rotate it by dragging with the
//! left mouse button. The window title reports a collision.

mod window;

use std::path::PathBuf;

use point_obb::core::config::{ApplicationConfig, Config};
use point_obb::foundation::logging;
use point_obb::Engine;
use window::Window;

const CONFIG_ENV: &str = "POINT_OBB_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/point_obb.toml";

fn load_config() -> Result<ApplicationConfig, Box<dyn std::error::Error>> {
    let path = std::env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        Ok(ApplicationConfig::load_from_file(&path)?)
    } else if std::env::var_os(CONFIG_ENV).is_some() {
        Err(format!("config file {} not found", path.display()).into())
    } else {
        Ok(ApplicationConfig::default())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.engine.log_level);

    log::info!("Starting Point - OBB Collision Detection demo");
    log::info!("Controls: WASD move in XY, LeftCtrl/LeftShift move along Z");
    log::info!("Controls: Space swaps box/point, left-drag rotates, Escape quits");

    let mut engine = Engine::new(&config)?;

    log::info!("Creating window...");
    let mut window = Window::new(&config.window.title, config.window.width, config.window.height)?;
    log::info!("Window created successfully");

    let frames = engine.run(&mut window);
    log::info!("Demo finished after {frames} frames");
    Ok(())
}

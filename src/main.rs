//! Pixel Pong entry point
//!
//! Opens the window, then runs the frame loop until quit.

use pixel_pong::platform::{SystemClock, native};
use pixel_pong::{GameLoop, PlatformError, Settings};

fn run() -> Result<(), PlatformError> {
    let settings = Settings::load();
    let (input, renderer) = native::open(&settings)?;
    let mut game = GameLoop::new(renderer, input, SystemClock::new());
    game.run()
}

fn main() {
    env_logger::init();
    log::info!("Pixel Pong starting...");

    if let Err(e) = run() {
        log::error!("Fatal: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

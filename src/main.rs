mod config;
mod console;
mod logging;
mod menu;
mod render;
mod roster;
mod util;

use tracing::{info, warn};

use crate::console::StdConsole;
use crate::menu::{ExitReason, Session, SessionSettings};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cfg = config::load_config()?;

    logging::init(&cfg.log)?;
    info!("Logging Initialised. Starting Oscar roster manager");
    match &cfg.source {
        Some(path) => info!(config = %path.display(), "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let settings = SessionSettings {
        pause_after_action: cfg.pause_after_action,
    };
    let clear_screen = cfg.clear_screen;

    let shell = tokio::task::spawn_blocking(move || {
        let mut session = Session::new(StdConsole::new(clear_screen), settings);
        session.run()
    });

    tokio::select! {
        joined = shell => {
            let reason = joined??;
            info!(?reason, "Session finished");
            if reason == ExitReason::InputClosed {
                print!("{}", menu::farewell());
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            warn!("Interrupted by user");
            println!("\n\n⚠️  Programa interrompido pelo utilizador.");
            print!("{}", menu::farewell());
            // The shell thread is parked on stdin and cannot be joined.
            std::process::exit(0);
        }
    }

    Ok(())
}

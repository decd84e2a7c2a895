//! Hi-Lo entry point
//!
//! Initializes logging, seeds the session RNG, and runs the game loop over
//! locked stdin/stdout. The process always exits 0; every failure mode is
//! reported on the terminal or the log instead.

use std::io;
use std::path::Path;

use rand::Rng;

fn main() {
    env_logger::init();
    log::info!("Hi-Lo starting");

    let seed: u64 = rand::rng().random();
    log::info!("Session seed: {seed}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = hilo::app::run(
        &mut stdin.lock(),
        &mut stdout.lock(),
        Path::new(hilo::consts::SCORE_FILE),
        seed,
    ) {
        // The terminal went away; nothing sensible left to print.
        log::warn!("Terminal I/O error: {err}");
    }
}

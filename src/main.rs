// What you SEE:
// • An 800x600 window filled with slow rainbow waves (default).
// • `--variant static` opens a quiet 400x400 window instead.
// • `--palette-strip` overlays the rainbow the waves are cycling through.
// • Close the window or press ESC to quit.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{error, info};

use plasma::config::Args;
use plasma::draw::Drawer;
use plasma::error::Error;
use plasma::pacer::AppState;

fn run(args: &Args) -> Result<(), Error> {
    let preset = args.variant.preset();
    info!(variant = ?args.variant, width = preset.width, height = preset.height, "starting");

    /* --- Window setup ---
       Visual: a black window opens at the fixed screen position. */
    let mut drawer = Drawer::new(preset.title, preset.width, preset.height, preset.position)?;

    /* --- Field + palette, computed once ---
       Visual: nothing yet; the first frame shows up on the first tick. */
    let mut app = AppState::new(
        preset.width,
        preset.height,
        preset.compositor,
        args.palette_strip,
        Instant::now(),
    );

    app.run(&mut drawer)?;
    info!(elapsed = app.clock.elapsed(), "stopped");
    Ok(())
}

/// Visual: a modal error box; the process waits until it is dismissed.
fn alert(e: &Error) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Plasma")
        .set_description(e.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // the log line on stderr is the fallback when no dialog can be shown
            error!(exit_code = e.exit_code(), "{e}");
            if e.wants_alert() {
                alert(&e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

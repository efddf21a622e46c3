// Command line and the two compiled-in window presets.

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::compositor::Compositor;

/// Which program to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// 800x600 animated plasma
    Plasma,
    /// 400x400 window that draws nothing per frame
    Static,
}

/// Fixed window setup for a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub title: &'static str,
    pub width: usize,
    pub height: usize,
    pub position: (isize, isize),
    pub compositor: Compositor,
}

pub const WINDOW_POSITION: (isize, isize) = (300, 0);

impl Variant {
    pub fn preset(self) -> Preset {
        match self {
            Variant::Plasma => Preset {
                title: "Plasma",
                width: 800,
                height: 600,
                position: WINDOW_POSITION,
                compositor: Compositor::Plasma,
            },
            Variant::Static => Preset {
                title: "Plasma",
                width: 400,
                height: 400,
                position: WINDOW_POSITION,
                compositor: Compositor::Static,
            },
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "plasma", about = "Animated plasma effect in a window. ESC quits.")]
pub struct Args {
    /// Which window to open
    #[arg(long, value_enum, default_value_t = Variant::Plasma)]
    pub variant: Variant,

    /// Draw the 360-entry palette as a strip in the top-left corner
    #[arg(long, default_value_t = false)]
    pub palette_strip: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_animated_plasma() {
        let args = Args::try_parse_from(["plasma"]).unwrap();
        assert_eq!(args.variant, Variant::Plasma);
        assert!(!args.palette_strip);
        assert_eq!(args.log_level(), Level::INFO);

        let p = args.variant.preset();
        assert_eq!((p.width, p.height), (800, 600));
        assert_eq!(p.compositor, Compositor::Plasma);
        assert_eq!(p.position, (300, 0));
    }

    #[test]
    fn static_variant_is_small_and_idle() {
        let args = Args::try_parse_from(["plasma", "--variant", "static", "--palette-strip"]).unwrap();
        assert_eq!(args.variant, Variant::Static);
        assert!(args.palette_strip);

        let p = args.variant.preset();
        assert_eq!((p.width, p.height), (400, 400));
        assert_eq!(p.compositor, Compositor::Static);
    }

    #[test]
    fn verbosity_raises_the_level() {
        let args = Args::try_parse_from(["plasma", "-v"]).unwrap();
        assert_eq!(args.log_level(), Level::DEBUG);
        let args = Args::try_parse_from(["plasma", "-vvv"]).unwrap();
        assert_eq!(args.log_level(), Level::TRACE);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Args::try_parse_from(["plasma", "--variant", "fire"]).is_err());
    }
}

// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing the pixel buffer to the window failed
    DimensionMismatch {
        // Field and frame buffer disagree on size
        field: (usize, usize),
        frame: (usize, usize),
    },
}

impl Error {
    /// Process exit code for this failure. Normal shutdown exits with 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::WindowInit(_) => 1,
            Error::WindowUpdate(_) => 2,
            Error::DimensionMismatch { .. } => 3,
        }
    }

    /// Startup failures the user may never see on a terminal get a message box.
    pub fn wants_alert(&self) -> bool {
        matches!(self, Error::WindowInit(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::DimensionMismatch { field, frame } => write!(
                f,
                "Dimension mismatch: field is {}x{}, frame is {}x{}",
                field.0, field.1, frame.0, frame.1
            ),
        }
    }
}

impl std::error::Error for Error {}

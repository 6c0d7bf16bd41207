// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    ImageLoad(String),         // Background image missing, unreadable or not decodable
    ImageSave(String),         // Encoding/writing the output image failed
    ConfigValidation(String),  // A parameter the caller supplied is unusable
    DimensionMismatch(String), // Two canvases that must line up don't
    Input(String),             // Reading an answer from the terminal failed
    WindowInit(String),        // Creating the viewer window failed
    WindowUpdate(String),      // Updating the window buffer failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ImageLoad(s) => write!(f, "Image load error: {s}"),
            Error::ImageSave(s) => write!(f, "Image save error: {s}"),
            Error::ConfigValidation(s) => write!(f, "Invalid configuration: {s}"),
            Error::DimensionMismatch(s) => write!(f, "Dimension mismatch: {s}"),
            Error::Input(s) => write!(f, "Input error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unrecognized sysex: {0}")]
    Unrecognized(String),

    #[error("Sysex error: {0}")]
    Sysex(String),

    #[error("Unknown device: {0}")]
    UnknownDevice(String),

    #[error("{device}: patch number {number} out of range (0..{max})")]
    InvalidPatchNumber {
        device: &'static str,
        number: i32,
        max: i32,
    },

    #[error("{device}: bank {bank} out of range (0..{max})")]
    InvalidBank {
        device: &'static str,
        bank: i32,
        max: i32,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

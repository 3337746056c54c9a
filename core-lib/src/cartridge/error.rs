use thiserror::Error;

/// Errors that can occur when loading a cartridge image.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("ROM image too small: {0} bytes (header requires at least 0x150)")]
    ImageTooSmall(usize),
}

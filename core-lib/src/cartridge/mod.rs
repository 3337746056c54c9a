//! Cartridge image handling: header inspection, ROM reads, external RAM.

use tracing::{debug, warn};

mod error;
pub use error::CartridgeError;

/// External cartridge RAM size (0xA000-0xBFFF).
const EXTERNAL_RAM_SIZE: usize = 0x2000;

/// Cartridge type byte at 0x0147, decoded for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeKind {
    RomOnly,
    Mbc1,
    Mbc2,
    Mbc3,
    Mbc5,
    Other(u8),
}

impl From<u8> for CartridgeKind {
    fn from(value: u8) -> Self {
        match value {
            0x00 | 0x08 | 0x09 => Self::RomOnly,
            0x01..=0x03 => Self::Mbc1,
            0x05 | 0x06 => Self::Mbc2,
            0x0F..=0x13 => Self::Mbc3,
            0x19..=0x1E => Self::Mbc5,
            other => Self::Other(other),
        }
    }
}

/// A loaded cartridge: the ROM image plus 8 KiB of external RAM.
///
/// Only ROM-only cartridges are fully supported; banked types are accepted
/// with a warning and behave as if no mapper were present.
pub struct Cartridge {
    rom: Vec<u8>,
    ram: [u8; EXTERNAL_RAM_SIZE],
    kind: CartridgeKind,
    title: String,
}

impl Cartridge {
    /// Wrap a raw ROM image. The image must at least cover the header area.
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < 0x150 {
            return Err(CartridgeError::ImageTooSmall(rom.len()));
        }

        let kind = CartridgeKind::from(rom[0x147]);
        let title = rom[0x134..0x144]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect::<String>();

        debug!(title, ?kind, size = rom.len(), "cartridge loaded");
        if kind != CartridgeKind::RomOnly {
            warn!(?kind, "unsupported mapper, treating cartridge as ROM-only");
        }

        Ok(Self {
            rom,
            ram: [0; EXTERNAL_RAM_SIZE],
            kind,
            title,
        })
    }

    /// Title string from the cartridge header.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub const fn kind(&self) -> CartridgeKind {
        self.kind
    }

    /// Read from the ROM region (0x0000-0x7FFF). Reads past the end of a
    /// short image return 0xFF, like an unconnected bus.
    pub fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    /// ROM is not writable; a mapper would decode these writes.
    pub fn write_rom(&mut self, _addr: u16, _value: u8) {}

    /// Read from external RAM (0xA000-0xBFFF).
    pub fn read_ram(&self, addr: u16) -> u8 {
        self.ram[(addr as usize - 0xA000) % EXTERNAL_RAM_SIZE]
    }

    /// Write to external RAM (0xA000-0xBFFF).
    pub fn write_ram(&mut self, addr: u16, value: u8) {
        self.ram[(addr as usize - 0xA000) % EXTERNAL_RAM_SIZE] = value;
    }
}

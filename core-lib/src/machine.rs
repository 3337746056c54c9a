//! The assembled console: CPU plus MMU, clocked one frame at a time.

use crate::cartridge::CartridgeError;
use crate::cpu::CPU;
use crate::mmu::{Button, MMU};
use crate::ppu::Shade;

/// CPU cycles per 59.7 Hz frame: 456 cycles x 154 scanlines.
pub const CYCLES_PER_FRAME: u32 = 70_224;

/// One whole Game Boy. The MMU owns the memory map and every clocked
/// peripheral; the CPU drives it through exclusive borrows, so a `Machine`
/// is single-threaded by construction.
pub struct Machine {
    pub cpu: CPU,
    pub mmu: MMU,
}

impl Machine {
    /// Boot a machine with the given cartridge image.
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        Ok(Self {
            cpu: CPU::new(),
            mmu: MMU::new(rom)?,
        })
    }

    /// Run one frame's worth of emulation: instructions execute atomically,
    /// then the PPU and timer catch up on the cycles each one cost.
    pub fn run_frame(&mut self) {
        let mut spent = 0;
        while spent < CYCLES_PER_FRAME {
            let mut cycles = self.cpu.step(&mut self.mmu);
            if cycles == 0 {
                // Guarantee forward progress whatever the CPU reports.
                cycles = 4;
            }
            self.mmu.step(cycles);
            spent += cycles;
        }
    }

    /// The most recently rendered frame, row-major 160x144.
    pub fn frame(&self) -> &[Shade] {
        &self.mmu.ppu.frame_buffer[..]
    }

    /// Joypad bridge: host key went down.
    pub fn press(&mut self, button: Button) {
        self.mmu.press(button);
    }

    /// Joypad bridge: host key went up.
    pub fn release(&mut self, button: Button) {
        self.mmu.release(button);
    }
}

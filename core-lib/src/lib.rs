//! dotboy-core: emulation of the original Game Boy (DMG).
//!
//! The crate models the console as a [`Machine`]: a Sharp LR35902 CPU
//! stepping against an MMU that owns the cartridge, video, timer, joypad,
//! and interrupt hardware. Frontends drive [`Machine::run_frame`] at
//! ~60 Hz, blit the shade buffer, and feed button edges back in.

pub mod cartridge;
pub mod cpu;
pub mod interrupts;
pub mod machine;
pub mod mmu;
pub mod ppu;
pub mod timer;

pub use cartridge::{Cartridge, CartridgeError};
pub use cpu::CPU;
pub use machine::{Machine, CYCLES_PER_FRAME};
pub use mmu::{Button, MMU};
pub use ppu::{Shade, SCREEN_HEIGHT, SCREEN_WIDTH};

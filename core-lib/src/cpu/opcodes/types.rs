//! The opcode descriptor carried by both dispatch tables.

use crate::cpu::CPU;
use crate::mmu::Bus;

/// Executes one instruction. Returns true when a tested condition was met,
/// so the dispatcher can charge the extra cycles of the taken path.
pub type Exec = Box<dyn Fn(&mut CPU, &mut dyn Bus) -> bool + Send + Sync>;

/// One entry of the 256-way dispatch tables, decoded once at startup.
pub struct Opcode {
    /// Mnemonic for debugging and disassembly.
    pub mnemonic: &'static str,
    /// Cycle cost of the untaken/unconditional path, fetch included.
    pub base_cycles: u32,
    /// Extra cycles charged when `exec` reports the condition as met.
    pub conditional_cycles: u32,
    pub exec: Exec,
}

//! The CB-prefixed decoder: rotates, shifts, SWAP, and the bit operations.
//!
//! The prefixed opcode space is perfectly regular: bits 0-2 pick the
//! operand (B, C, D, E, H, L, (HL), A), bits 3-5 pick the sub-operation or
//! bit number, bits 6-7 pick the family. The table is generated in loops
//! over that grid.

use once_cell::sync::Lazy;

use super::types::Opcode;
use crate::cpu::{CPU, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use crate::mmu::Bus;

/// Operand slot encoded in the low three bits of a CB opcode.
#[derive(Debug, Clone, Copy)]
enum Target {
    B,
    C,
    D,
    E,
    H,
    L,
    HlIndirect,
    A,
}

impl Target {
    /// In encoding order: `cb & 7` indexes this array.
    const ALL: [Self; 8] = [
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::H,
        Self::L,
        Self::HlIndirect,
        Self::A,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::H => "H",
            Self::L => "L",
            Self::HlIndirect => "(HL)",
            Self::A => "A",
        }
    }

    fn load(self, cpu: &CPU, bus: &mut dyn Bus) -> u8 {
        match self {
            Self::B => cpu.regs.b,
            Self::C => cpu.regs.c,
            Self::D => cpu.regs.d,
            Self::E => cpu.regs.e,
            Self::H => cpu.regs.h,
            Self::L => cpu.regs.l,
            Self::HlIndirect => bus.read(cpu.regs.hl()),
            Self::A => cpu.regs.a,
        }
    }

    fn store(self, cpu: &mut CPU, bus: &mut dyn Bus, value: u8) {
        match self {
            Self::B => cpu.regs.b = value,
            Self::C => cpu.regs.c = value,
            Self::D => cpu.regs.d = value,
            Self::E => cpu.regs.e = value,
            Self::H => cpu.regs.h = value,
            Self::L => cpu.regs.l = value,
            Self::HlIndirect => bus.write(cpu.regs.hl(), value),
            Self::A => cpu.regs.a = value,
        }
    }

    /// Read-modify-write cost; (HL) pays for both memory accesses.
    const fn cycles(self) -> u32 {
        match self {
            Self::HlIndirect => 16,
            _ => 8,
        }
    }

    /// BIT only reads, so (HL) is cheaper than the read-modify-write ops.
    const fn bit_cycles(self) -> u32 {
        match self {
            Self::HlIndirect => 12,
            _ => 8,
        }
    }
}

/// Rotate/shift kernels: value and incoming carry in, result and carry out.
type RotOp = fn(u8, bool) -> (u8, bool);

const ROT_OPS: [(&str, RotOp); 8] = [
    ("RLC", |v, _| (v.rotate_left(1), v & 0x80 != 0)),
    ("RRC", |v, _| (v.rotate_right(1), v & 0x01 != 0)),
    ("RL", |v, c| ((v << 1) | u8::from(c), v & 0x80 != 0)),
    ("RR", |v, c| ((v >> 1) | (u8::from(c) << 7), v & 0x01 != 0)),
    ("SLA", |v, _| (v << 1, v & 0x80 != 0)),
    ("SRA", |v, _| ((v >> 1) | (v & 0x80), v & 0x01 != 0)),
    ("SWAP", |v, _| (v.rotate_left(4), false)),
    ("SRL", |v, _| (v >> 1, v & 0x01 != 0)),
];

pub static CB_OPCODES: Lazy<[Opcode; 256]> = Lazy::new(|| {
    let mut table: [Opcode; 256] = std::array::from_fn(|_| Opcode {
        mnemonic: "??",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|_, _| false),
    });

    // 0x00-0x3F: rotates and shifts.
    for (op_idx, &(name, op)) in ROT_OPS.iter().enumerate() {
        for (t_idx, &target) in Target::ALL.iter().enumerate() {
            table[op_idx * 8 + t_idx] = Opcode {
                mnemonic: Box::leak(format!("{name} {}", target.name()).into_boxed_str()),
                base_cycles: target.cycles(),
                conditional_cycles: 0,
                exec: Box::new(move |cpu, bus| {
                    let value = target.load(cpu, bus);
                    let (result, carry) = op(value, cpu.regs.flag(FLAG_C));
                    cpu.regs.f = 0;
                    cpu.regs.set_flag(FLAG_Z, result == 0);
                    cpu.regs.set_flag(FLAG_C, carry);
                    target.store(cpu, bus, result);
                    false
                }),
            };
        }
    }

    // 0x40-0x7F: BIT b — test only, carry survives.
    for bit in 0..8u8 {
        for (t_idx, &target) in Target::ALL.iter().enumerate() {
            table[0x40 + bit as usize * 8 + t_idx] = Opcode {
                mnemonic: Box::leak(format!("BIT {bit}, {}", target.name()).into_boxed_str()),
                base_cycles: target.bit_cycles(),
                conditional_cycles: 0,
                exec: Box::new(move |cpu, bus| {
                    let value = target.load(cpu, bus);
                    cpu.regs.set_flag(FLAG_Z, value >> bit & 1 == 0);
                    cpu.regs.set_flag(FLAG_N, false);
                    cpu.regs.set_flag(FLAG_H, true);
                    false
                }),
            };
        }
    }

    // 0x80-0xBF: RES b — no flag effects.
    for bit in 0..8u8 {
        for (t_idx, &target) in Target::ALL.iter().enumerate() {
            table[0x80 + bit as usize * 8 + t_idx] = Opcode {
                mnemonic: Box::leak(format!("RES {bit}, {}", target.name()).into_boxed_str()),
                base_cycles: target.cycles(),
                conditional_cycles: 0,
                exec: Box::new(move |cpu, bus| {
                    let value = target.load(cpu, bus) & !(1 << bit);
                    target.store(cpu, bus, value);
                    false
                }),
            };
        }
    }

    // 0xC0-0xFF: SET b — no flag effects.
    for bit in 0..8u8 {
        for (t_idx, &target) in Target::ALL.iter().enumerate() {
            table[0xC0 + bit as usize * 8 + t_idx] = Opcode {
                mnemonic: Box::leak(format!("SET {bit}, {}", target.name()).into_boxed_str()),
                base_cycles: target.cycles(),
                conditional_cycles: 0,
                exec: Box::new(move |cpu, bus| {
                    let value = target.load(cpu, bus) | (1 << bit);
                    target.store(cpu, bus, value);
                    false
                }),
            };
        }
    }

    table
});

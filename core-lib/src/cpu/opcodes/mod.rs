//! The primary 256-entry opcode table.
//!
//! Regular instruction families come from the macros in the submodules;
//! one-off instructions are written out directly at the end. Opcodes the
//! hardware leaves undefined keep the default entry: a 4-cycle no-op, so a
//! corrupted cartridge cannot crash the core.

use once_cell::sync::Lazy;

pub mod alu;
pub mod cb;
pub mod jump;
pub mod load_store;
pub mod types;

pub use cb::CB_OPCODES;
pub use types::{Exec, Opcode};

use crate::cpu::{FLAG_C, FLAG_H, FLAG_N, FLAG_Z};
use crate::{
    add_hl_rr, alu_hl, alu_n, alu_r, call_cc_nn, call_nn, dec_r, dec_rr, inc_r, inc_rr, jp_cc_nn,
    jp_hl, jp_nn, jr_cc_e, jr_e, ld_a_rr, ld_hl_r, ld_r_hl, ld_r_n, ld_r_r, ld_rr_a, ld_rr_nn,
    pop_rr, push_rr, ret, ret_cc, reti, rst,
};

pub static OPCODES: Lazy<[Opcode; 256]> = Lazy::new(|| {
    let mut table: [Opcode; 256] = std::array::from_fn(|_| Opcode {
        // Undefined opcode: consume the byte, charge a NOP.
        mnemonic: "??",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|_, _| false),
    });

    // --- 8-bit loads ---
    ld_r_r!(table, 0x40, b, b);
    ld_r_r!(table, 0x41, b, c);
    ld_r_r!(table, 0x42, b, d);
    ld_r_r!(table, 0x43, b, e);
    ld_r_r!(table, 0x44, b, h);
    ld_r_r!(table, 0x45, b, l);
    ld_r_r!(table, 0x47, b, a);
    ld_r_r!(table, 0x48, c, b);
    ld_r_r!(table, 0x49, c, c);
    ld_r_r!(table, 0x4A, c, d);
    ld_r_r!(table, 0x4B, c, e);
    ld_r_r!(table, 0x4C, c, h);
    ld_r_r!(table, 0x4D, c, l);
    ld_r_r!(table, 0x4F, c, a);
    ld_r_r!(table, 0x50, d, b);
    ld_r_r!(table, 0x51, d, c);
    ld_r_r!(table, 0x52, d, d);
    ld_r_r!(table, 0x53, d, e);
    ld_r_r!(table, 0x54, d, h);
    ld_r_r!(table, 0x55, d, l);
    ld_r_r!(table, 0x57, d, a);
    ld_r_r!(table, 0x58, e, b);
    ld_r_r!(table, 0x59, e, c);
    ld_r_r!(table, 0x5A, e, d);
    ld_r_r!(table, 0x5B, e, e);
    ld_r_r!(table, 0x5C, e, h);
    ld_r_r!(table, 0x5D, e, l);
    ld_r_r!(table, 0x5F, e, a);
    ld_r_r!(table, 0x60, h, b);
    ld_r_r!(table, 0x61, h, c);
    ld_r_r!(table, 0x62, h, d);
    ld_r_r!(table, 0x63, h, e);
    ld_r_r!(table, 0x64, h, h);
    ld_r_r!(table, 0x65, h, l);
    ld_r_r!(table, 0x67, h, a);
    ld_r_r!(table, 0x68, l, b);
    ld_r_r!(table, 0x69, l, c);
    ld_r_r!(table, 0x6A, l, d);
    ld_r_r!(table, 0x6B, l, e);
    ld_r_r!(table, 0x6C, l, h);
    ld_r_r!(table, 0x6D, l, l);
    ld_r_r!(table, 0x6F, l, a);
    ld_r_r!(table, 0x78, a, b);
    ld_r_r!(table, 0x79, a, c);
    ld_r_r!(table, 0x7A, a, d);
    ld_r_r!(table, 0x7B, a, e);
    ld_r_r!(table, 0x7C, a, h);
    ld_r_r!(table, 0x7D, a, l);
    ld_r_r!(table, 0x7F, a, a);

    ld_r_n!(table, 0x06, b);
    ld_r_n!(table, 0x0E, c);
    ld_r_n!(table, 0x16, d);
    ld_r_n!(table, 0x1E, e);
    ld_r_n!(table, 0x26, h);
    ld_r_n!(table, 0x2E, l);
    ld_r_n!(table, 0x3E, a);

    ld_r_hl!(table, 0x46, b);
    ld_r_hl!(table, 0x4E, c);
    ld_r_hl!(table, 0x56, d);
    ld_r_hl!(table, 0x5E, e);
    ld_r_hl!(table, 0x66, h);
    ld_r_hl!(table, 0x6E, l);
    ld_r_hl!(table, 0x7E, a);

    ld_hl_r!(table, 0x70, b);
    ld_hl_r!(table, 0x71, c);
    ld_hl_r!(table, 0x72, d);
    ld_hl_r!(table, 0x73, e);
    ld_hl_r!(table, 0x74, h);
    ld_hl_r!(table, 0x75, l);
    ld_hl_r!(table, 0x77, a);

    ld_a_rr!(table, 0x0A, "LD A, (BC)", bc);
    ld_a_rr!(table, 0x1A, "LD A, (DE)", de);
    ld_rr_a!(table, 0x02, "LD (BC), A", bc);
    ld_rr_a!(table, 0x12, "LD (DE), A", de);

    // --- 16-bit loads and stack ---
    ld_rr_nn!(table, 0x01, "LD BC, nn", set_bc);
    ld_rr_nn!(table, 0x11, "LD DE, nn", set_de);
    ld_rr_nn!(table, 0x21, "LD HL, nn", set_hl);
    ld_rr_nn!(table, 0x31, "LD SP, nn", set_sp);

    push_rr!(table, 0xC5, "PUSH BC", bc);
    push_rr!(table, 0xD5, "PUSH DE", de);
    push_rr!(table, 0xE5, "PUSH HL", hl);
    push_rr!(table, 0xF5, "PUSH AF", af);
    pop_rr!(table, 0xC1, "POP BC", set_bc);
    pop_rr!(table, 0xD1, "POP DE", set_de);
    pop_rr!(table, 0xE1, "POP HL", set_hl);
    pop_rr!(table, 0xF1, "POP AF", set_af);

    // --- 16-bit arithmetic ---
    inc_rr!(table, 0x03, "INC BC", bc, set_bc);
    inc_rr!(table, 0x13, "INC DE", de, set_de);
    inc_rr!(table, 0x23, "INC HL", hl, set_hl);
    inc_rr!(table, 0x33, "INC SP", sp, set_sp);
    dec_rr!(table, 0x0B, "DEC BC", bc, set_bc);
    dec_rr!(table, 0x1B, "DEC DE", de, set_de);
    dec_rr!(table, 0x2B, "DEC HL", hl, set_hl);
    dec_rr!(table, 0x3B, "DEC SP", sp, set_sp);

    add_hl_rr!(table, 0x09, "ADD HL, BC", bc);
    add_hl_rr!(table, 0x19, "ADD HL, DE", de);
    add_hl_rr!(table, 0x29, "ADD HL, HL", hl);
    add_hl_rr!(table, 0x39, "ADD HL, SP", sp);

    // --- 8-bit arithmetic and logic ---
    alu_r!(table, 0x80, "ADD A, B", alu::add_a, b);
    alu_r!(table, 0x81, "ADD A, C", alu::add_a, c);
    alu_r!(table, 0x82, "ADD A, D", alu::add_a, d);
    alu_r!(table, 0x83, "ADD A, E", alu::add_a, e);
    alu_r!(table, 0x84, "ADD A, H", alu::add_a, h);
    alu_r!(table, 0x85, "ADD A, L", alu::add_a, l);
    alu_r!(table, 0x87, "ADD A, A", alu::add_a, a);
    alu_hl!(table, 0x86, "ADD A, (HL)", alu::add_a);
    alu_n!(table, 0xC6, "ADD A, n", alu::add_a);

    alu_r!(table, 0x88, "ADC A, B", alu::adc_a, b);
    alu_r!(table, 0x89, "ADC A, C", alu::adc_a, c);
    alu_r!(table, 0x8A, "ADC A, D", alu::adc_a, d);
    alu_r!(table, 0x8B, "ADC A, E", alu::adc_a, e);
    alu_r!(table, 0x8C, "ADC A, H", alu::adc_a, h);
    alu_r!(table, 0x8D, "ADC A, L", alu::adc_a, l);
    alu_r!(table, 0x8F, "ADC A, A", alu::adc_a, a);
    alu_hl!(table, 0x8E, "ADC A, (HL)", alu::adc_a);
    alu_n!(table, 0xCE, "ADC A, n", alu::adc_a);

    alu_r!(table, 0x90, "SUB B", alu::sub_a, b);
    alu_r!(table, 0x91, "SUB C", alu::sub_a, c);
    alu_r!(table, 0x92, "SUB D", alu::sub_a, d);
    alu_r!(table, 0x93, "SUB E", alu::sub_a, e);
    alu_r!(table, 0x94, "SUB H", alu::sub_a, h);
    alu_r!(table, 0x95, "SUB L", alu::sub_a, l);
    alu_r!(table, 0x97, "SUB A", alu::sub_a, a);
    alu_hl!(table, 0x96, "SUB (HL)", alu::sub_a);
    alu_n!(table, 0xD6, "SUB n", alu::sub_a);

    alu_r!(table, 0x98, "SBC A, B", alu::sbc_a, b);
    alu_r!(table, 0x99, "SBC A, C", alu::sbc_a, c);
    alu_r!(table, 0x9A, "SBC A, D", alu::sbc_a, d);
    alu_r!(table, 0x9B, "SBC A, E", alu::sbc_a, e);
    alu_r!(table, 0x9C, "SBC A, H", alu::sbc_a, h);
    alu_r!(table, 0x9D, "SBC A, L", alu::sbc_a, l);
    alu_r!(table, 0x9F, "SBC A, A", alu::sbc_a, a);
    alu_hl!(table, 0x9E, "SBC A, (HL)", alu::sbc_a);
    alu_n!(table, 0xDE, "SBC A, n", alu::sbc_a);

    alu_r!(table, 0xA0, "AND B", alu::and_a, b);
    alu_r!(table, 0xA1, "AND C", alu::and_a, c);
    alu_r!(table, 0xA2, "AND D", alu::and_a, d);
    alu_r!(table, 0xA3, "AND E", alu::and_a, e);
    alu_r!(table, 0xA4, "AND H", alu::and_a, h);
    alu_r!(table, 0xA5, "AND L", alu::and_a, l);
    alu_r!(table, 0xA7, "AND A", alu::and_a, a);
    alu_hl!(table, 0xA6, "AND (HL)", alu::and_a);
    alu_n!(table, 0xE6, "AND n", alu::and_a);

    alu_r!(table, 0xA8, "XOR B", alu::xor_a, b);
    alu_r!(table, 0xA9, "XOR C", alu::xor_a, c);
    alu_r!(table, 0xAA, "XOR D", alu::xor_a, d);
    alu_r!(table, 0xAB, "XOR E", alu::xor_a, e);
    alu_r!(table, 0xAC, "XOR H", alu::xor_a, h);
    alu_r!(table, 0xAD, "XOR L", alu::xor_a, l);
    alu_r!(table, 0xAF, "XOR A", alu::xor_a, a);
    alu_hl!(table, 0xAE, "XOR (HL)", alu::xor_a);
    alu_n!(table, 0xEE, "XOR n", alu::xor_a);

    alu_r!(table, 0xB0, "OR B", alu::or_a, b);
    alu_r!(table, 0xB1, "OR C", alu::or_a, c);
    alu_r!(table, 0xB2, "OR D", alu::or_a, d);
    alu_r!(table, 0xB3, "OR E", alu::or_a, e);
    alu_r!(table, 0xB4, "OR H", alu::or_a, h);
    alu_r!(table, 0xB5, "OR L", alu::or_a, l);
    alu_r!(table, 0xB7, "OR A", alu::or_a, a);
    alu_hl!(table, 0xB6, "OR (HL)", alu::or_a);
    alu_n!(table, 0xF6, "OR n", alu::or_a);

    alu_r!(table, 0xB8, "CP B", alu::cp_a, b);
    alu_r!(table, 0xB9, "CP C", alu::cp_a, c);
    alu_r!(table, 0xBA, "CP D", alu::cp_a, d);
    alu_r!(table, 0xBB, "CP E", alu::cp_a, e);
    alu_r!(table, 0xBC, "CP H", alu::cp_a, h);
    alu_r!(table, 0xBD, "CP L", alu::cp_a, l);
    alu_r!(table, 0xBF, "CP A", alu::cp_a, a);
    alu_hl!(table, 0xBE, "CP (HL)", alu::cp_a);
    alu_n!(table, 0xFE, "CP n", alu::cp_a);

    inc_r!(table, 0x04, b);
    inc_r!(table, 0x0C, c);
    inc_r!(table, 0x14, d);
    inc_r!(table, 0x1C, e);
    inc_r!(table, 0x24, h);
    inc_r!(table, 0x2C, l);
    inc_r!(table, 0x3C, a);
    dec_r!(table, 0x05, b);
    dec_r!(table, 0x0D, c);
    dec_r!(table, 0x15, d);
    dec_r!(table, 0x1D, e);
    dec_r!(table, 0x25, h);
    dec_r!(table, 0x2D, l);
    dec_r!(table, 0x3D, a);

    // --- Control flow ---
    jp_nn!(table, 0xC3);
    jp_hl!(table, 0xE9);
    jr_e!(table, 0x18);
    call_nn!(table, 0xCD);
    ret!(table, 0xC9);
    reti!(table, 0xD9);

    jp_cc_nn!(table, 0xC2, "NZ", FLAG_Z, 0);
    jp_cc_nn!(table, 0xCA, "Z", FLAG_Z, FLAG_Z);
    jp_cc_nn!(table, 0xD2, "NC", FLAG_C, 0);
    jp_cc_nn!(table, 0xDA, "C", FLAG_C, FLAG_C);
    jr_cc_e!(table, 0x20, "NZ", FLAG_Z, 0);
    jr_cc_e!(table, 0x28, "Z", FLAG_Z, FLAG_Z);
    jr_cc_e!(table, 0x30, "NC", FLAG_C, 0);
    jr_cc_e!(table, 0x38, "C", FLAG_C, FLAG_C);
    call_cc_nn!(table, 0xC4, "NZ", FLAG_Z, 0);
    call_cc_nn!(table, 0xCC, "Z", FLAG_Z, FLAG_Z);
    call_cc_nn!(table, 0xD4, "NC", FLAG_C, 0);
    call_cc_nn!(table, 0xDC, "C", FLAG_C, FLAG_C);
    ret_cc!(table, 0xC0, "NZ", FLAG_Z, 0);
    ret_cc!(table, 0xC8, "Z", FLAG_Z, FLAG_Z);
    ret_cc!(table, 0xD0, "NC", FLAG_C, 0);
    ret_cc!(table, 0xD8, "C", FLAG_C, FLAG_C);

    rst!(table, 0xC7, 0x00);
    rst!(table, 0xCF, 0x08);
    rst!(table, 0xD7, 0x10);
    rst!(table, 0xDF, 0x18);
    rst!(table, 0xE7, 0x20);
    rst!(table, 0xEF, 0x28);
    rst!(table, 0xF7, 0x30);
    rst!(table, 0xFF, 0x38);

    // --- One-off instructions ---
    table[0x00] = Opcode {
        mnemonic: "NOP",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|_, _| false),
    };
    table[0x07] = Opcode {
        mnemonic: "RLCA",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            let a = cpu.regs.a;
            cpu.regs.a = a.rotate_left(1);
            // The A rotates clear Z, unlike their CB cousins.
            cpu.regs.f = 0;
            cpu.regs.set_flag(FLAG_C, a & 0x80 != 0);
            false
        }),
    };
    table[0x0F] = Opcode {
        mnemonic: "RRCA",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            let a = cpu.regs.a;
            cpu.regs.a = a.rotate_right(1);
            cpu.regs.f = 0;
            cpu.regs.set_flag(FLAG_C, a & 0x01 != 0);
            false
        }),
    };
    table[0x17] = Opcode {
        mnemonic: "RLA",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            let a = cpu.regs.a;
            cpu.regs.a = (a << 1) | u8::from(cpu.regs.flag(FLAG_C));
            cpu.regs.f = 0;
            cpu.regs.set_flag(FLAG_C, a & 0x80 != 0);
            false
        }),
    };
    table[0x1F] = Opcode {
        mnemonic: "RRA",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            let a = cpu.regs.a;
            cpu.regs.a = (a >> 1) | (u8::from(cpu.regs.flag(FLAG_C)) << 7);
            cpu.regs.f = 0;
            cpu.regs.set_flag(FLAG_C, a & 0x01 != 0);
            false
        }),
    };
    table[0x08] = Opcode {
        mnemonic: "LD (nn), SP",
        base_cycles: 20,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let addr = cpu.fetch16(bus);
            bus.write(addr, cpu.regs.sp as u8);
            bus.write(addr.wrapping_add(1), (cpu.regs.sp >> 8) as u8);
            false
        }),
    };
    table[0x10] = Opcode {
        mnemonic: "STOP",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            // Two-byte encoding; skip the padding byte.
            let _ = cpu.fetch8(bus);
            false
        }),
    };
    table[0x22] = Opcode {
        mnemonic: "LD (HL+), A",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let hl = cpu.regs.hl();
            bus.write(hl, cpu.regs.a);
            cpu.regs.set_hl(hl.wrapping_add(1));
            false
        }),
    };
    table[0x2A] = Opcode {
        mnemonic: "LD A, (HL+)",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let hl = cpu.regs.hl();
            cpu.regs.a = bus.read(hl);
            cpu.regs.set_hl(hl.wrapping_add(1));
            false
        }),
    };
    table[0x32] = Opcode {
        mnemonic: "LD (HL-), A",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let hl = cpu.regs.hl();
            bus.write(hl, cpu.regs.a);
            cpu.regs.set_hl(hl.wrapping_sub(1));
            false
        }),
    };
    table[0x3A] = Opcode {
        mnemonic: "LD A, (HL-)",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let hl = cpu.regs.hl();
            cpu.regs.a = bus.read(hl);
            cpu.regs.set_hl(hl.wrapping_sub(1));
            false
        }),
    };
    table[0x27] = Opcode {
        mnemonic: "DAA",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            alu::daa(cpu);
            false
        }),
    };
    table[0x2F] = Opcode {
        mnemonic: "CPL",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.regs.a = !cpu.regs.a;
            cpu.regs.set_flag(FLAG_N, true);
            cpu.regs.set_flag(FLAG_H, true);
            false
        }),
    };
    table[0x37] = Opcode {
        mnemonic: "SCF",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.regs.set_flag(FLAG_N, false);
            cpu.regs.set_flag(FLAG_H, false);
            cpu.regs.set_flag(FLAG_C, true);
            false
        }),
    };
    table[0x3F] = Opcode {
        mnemonic: "CCF",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            let carry = cpu.regs.flag(FLAG_C);
            cpu.regs.set_flag(FLAG_N, false);
            cpu.regs.set_flag(FLAG_H, false);
            cpu.regs.set_flag(FLAG_C, !carry);
            false
        }),
    };
    table[0x34] = Opcode {
        mnemonic: "INC (HL)",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let addr = cpu.regs.hl();
            let value = bus.read(addr);
            let result = alu::inc8(cpu, value);
            bus.write(addr, result);
            false
        }),
    };
    table[0x35] = Opcode {
        mnemonic: "DEC (HL)",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let addr = cpu.regs.hl();
            let value = bus.read(addr);
            let result = alu::dec8(cpu, value);
            bus.write(addr, result);
            false
        }),
    };
    table[0x36] = Opcode {
        mnemonic: "LD (HL), n",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let value = cpu.fetch8(bus);
            bus.write(cpu.regs.hl(), value);
            false
        }),
    };
    table[0x76] = Opcode {
        mnemonic: "HALT",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.halted = true;
            false
        }),
    };
    table[0xE0] = Opcode {
        mnemonic: "LDH (n), A",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let offset = cpu.fetch8(bus);
            bus.write(0xFF00 + u16::from(offset), cpu.regs.a);
            false
        }),
    };
    table[0xF0] = Opcode {
        mnemonic: "LDH A, (n)",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let offset = cpu.fetch8(bus);
            cpu.regs.a = bus.read(0xFF00 + u16::from(offset));
            false
        }),
    };
    table[0xE2] = Opcode {
        mnemonic: "LD (C), A",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            bus.write(0xFF00 + u16::from(cpu.regs.c), cpu.regs.a);
            false
        }),
    };
    table[0xF2] = Opcode {
        mnemonic: "LD A, (C)",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            cpu.regs.a = bus.read(0xFF00 + u16::from(cpu.regs.c));
            false
        }),
    };
    table[0xE8] = Opcode {
        mnemonic: "ADD SP, e",
        base_cycles: 16,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let offset = cpu.fetch8(bus);
            cpu.regs.sp = alu::add_sp_offset(cpu, offset);
            false
        }),
    };
    table[0xF8] = Opcode {
        mnemonic: "LD HL, SP+e",
        base_cycles: 12,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let offset = cpu.fetch8(bus);
            let result = alu::add_sp_offset(cpu, offset);
            cpu.regs.set_hl(result);
            false
        }),
    };
    table[0xF9] = Opcode {
        mnemonic: "LD SP, HL",
        base_cycles: 8,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.regs.sp = cpu.regs.hl();
            false
        }),
    };
    table[0xEA] = Opcode {
        mnemonic: "LD (nn), A",
        base_cycles: 16,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let addr = cpu.fetch16(bus);
            bus.write(addr, cpu.regs.a);
            false
        }),
    };
    table[0xFA] = Opcode {
        mnemonic: "LD A, (nn)",
        base_cycles: 16,
        conditional_cycles: 0,
        exec: Box::new(|cpu, bus| {
            let addr = cpu.fetch16(bus);
            cpu.regs.a = bus.read(addr);
            false
        }),
    };
    table[0xF3] = Opcode {
        mnemonic: "DI",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.ime = false;
            false
        }),
    };
    table[0xFB] = Opcode {
        mnemonic: "EI",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|cpu, _| {
            cpu.ime = true;
            false
        }),
    };
    // Never executed: the dispatcher resolves the prefix into CB_OPCODES.
    table[0xCB] = Opcode {
        mnemonic: "PREFIX CB",
        base_cycles: 4,
        conditional_cycles: 0,
        exec: Box::new(|_, _| false),
    };

    table
});

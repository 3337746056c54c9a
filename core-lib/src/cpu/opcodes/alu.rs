//! Arithmetic/logic helpers and the table macros that wire them to opcodes.
//!
//! Every helper owns the full flag contract of its instruction family; the
//! macros only differ in where the right-hand operand comes from (register,
//! `(HL)`, or immediate).

use crate::cpu::{CPU, FLAG_C, FLAG_H, FLAG_N, FLAG_Z};

/// ADD A, value
pub(crate) fn add_a(cpu: &mut CPU, value: u8) {
    let a = cpu.regs.a;
    let result = u16::from(a) + u16::from(value);
    cpu.regs.f = 0;
    cpu.regs.set_flag(FLAG_Z, result & 0xFF == 0);
    cpu.regs.set_flag(FLAG_H, (a & 0xF) + (value & 0xF) > 0xF);
    cpu.regs.set_flag(FLAG_C, result > 0xFF);
    cpu.regs.a = result as u8;
}

/// ADC A, value — like ADD but the incoming carry joins both sums.
pub(crate) fn adc_a(cpu: &mut CPU, value: u8) {
    let a = cpu.regs.a;
    let carry = u8::from(cpu.regs.flag(FLAG_C));
    let result = u16::from(a) + u16::from(value) + u16::from(carry);
    cpu.regs.f = 0;
    cpu.regs.set_flag(FLAG_Z, result & 0xFF == 0);
    cpu.regs.set_flag(FLAG_H, (a & 0xF) + (value & 0xF) + carry > 0xF);
    cpu.regs.set_flag(FLAG_C, result > 0xFF);
    cpu.regs.a = result as u8;
}

/// SUB value
pub(crate) fn sub_a(cpu: &mut CPU, value: u8) {
    cp_a(cpu, value);
    cpu.regs.a = cpu.regs.a.wrapping_sub(value);
}

/// SBC A, value
pub(crate) fn sbc_a(cpu: &mut CPU, value: u8) {
    let a = cpu.regs.a;
    let carry = u8::from(cpu.regs.flag(FLAG_C));
    let result = a.wrapping_sub(value).wrapping_sub(carry);
    cpu.regs.f = FLAG_N;
    cpu.regs.set_flag(FLAG_Z, result == 0);
    cpu.regs.set_flag(FLAG_H, (a & 0xF) < (value & 0xF) + carry);
    cpu.regs
        .set_flag(FLAG_C, u16::from(value) + u16::from(carry) > u16::from(a));
    cpu.regs.a = result;
}

/// AND value
pub(crate) fn and_a(cpu: &mut CPU, value: u8) {
    cpu.regs.a &= value;
    cpu.regs.f = FLAG_H;
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a == 0);
}

/// XOR value
pub(crate) fn xor_a(cpu: &mut CPU, value: u8) {
    cpu.regs.a ^= value;
    cpu.regs.f = 0;
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a == 0);
}

/// OR value
pub(crate) fn or_a(cpu: &mut CPU, value: u8) {
    cpu.regs.a |= value;
    cpu.regs.f = 0;
    cpu.regs.set_flag(FLAG_Z, cpu.regs.a == 0);
}

/// CP value — SUB flags without the writeback.
pub(crate) fn cp_a(cpu: &mut CPU, value: u8) {
    let a = cpu.regs.a;
    cpu.regs.f = FLAG_N;
    cpu.regs.set_flag(FLAG_Z, a == value);
    cpu.regs.set_flag(FLAG_H, (a & 0xF) < (value & 0xF));
    cpu.regs.set_flag(FLAG_C, a < value);
}

/// INC for 8-bit operands. Carry survives.
pub(crate) fn inc8(cpu: &mut CPU, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    cpu.regs.set_flag(FLAG_Z, result == 0);
    cpu.regs.set_flag(FLAG_N, false);
    cpu.regs.set_flag(FLAG_H, value & 0xF == 0xF);
    result
}

/// DEC for 8-bit operands. Carry survives.
pub(crate) fn dec8(cpu: &mut CPU, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    cpu.regs.set_flag(FLAG_Z, result == 0);
    cpu.regs.set_flag(FLAG_N, true);
    cpu.regs.set_flag(FLAG_H, value & 0xF == 0);
    result
}

/// ADD HL, value — 16-bit add with bit-11/bit-15 carries, Z untouched.
pub(crate) fn add_hl(cpu: &mut CPU, value: u16) {
    let hl = cpu.regs.hl();
    let result = u32::from(hl) + u32::from(value);
    cpu.regs.set_flag(FLAG_N, false);
    cpu.regs.set_flag(FLAG_H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
    cpu.regs.set_flag(FLAG_C, result > 0xFFFF);
    cpu.regs.set_hl(result as u16);
}

/// Shared by ADD SP,e and LD HL,SP+e: sign-extended add with the H/C
/// flags computed from the unsigned byte sums.
pub(crate) fn add_sp_offset(cpu: &mut CPU, offset: u8) -> u16 {
    let sp = cpu.regs.sp;
    let extended = i32::from(offset as i8);
    let result = (i32::from(sp) + extended) as u16;
    cpu.regs.f = 0;
    cpu.regs
        .set_flag(FLAG_H, (sp & 0xF) + u16::from(offset & 0xF) > 0xF);
    cpu.regs
        .set_flag(FLAG_C, (sp & 0xFF) + u16::from(offset) > 0xFF);
    result
}

/// DAA: decimal-adjust A after a BCD add or subtract, driven by N/H/C.
pub(crate) fn daa(cpu: &mut CPU) {
    let mut a = cpu.regs.a;
    let mut carry = cpu.regs.flag(FLAG_C);

    if cpu.regs.flag(FLAG_N) {
        // After a subtraction only the recorded borrows matter.
        if cpu.regs.flag(FLAG_H) {
            a = a.wrapping_sub(0x06);
        }
        if carry {
            a = a.wrapping_sub(0x60);
        }
    } else {
        if cpu.regs.flag(FLAG_H) || a & 0xF > 0x09 {
            let (adjusted, overflow) = a.overflowing_add(0x06);
            a = adjusted;
            carry |= overflow;
        }
        if carry || a > 0x99 {
            a = a.wrapping_add(0x60);
            carry = true;
        }
    }

    cpu.regs.set_flag(FLAG_Z, a == 0);
    cpu.regs.set_flag(FLAG_H, false);
    cpu.regs.set_flag(FLAG_C, carry);
    cpu.regs.a = a;
}

/// ALU op with a register operand.
#[macro_export]
macro_rules! alu_r {
    ($table:ident, $code:expr, $mnemonic:expr, $op:path, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 4,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$reg;
                $op(cpu, value);
                false
            }),
        };
    };
}

/// ALU op reading its operand at (HL).
#[macro_export]
macro_rules! alu_hl {
    ($table:ident, $code:expr, $mnemonic:expr, $op:path) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let value = bus.read(cpu.regs.hl());
                $op(cpu, value);
                false
            }),
        };
    };
}

/// ALU op with an immediate operand.
#[macro_export]
macro_rules! alu_n {
    ($table:ident, $code:expr, $mnemonic:expr, $op:path) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let value = cpu.fetch8(bus);
                $op(cpu, value);
                false
            }),
        };
    };
}

/// INC r
#[macro_export]
macro_rules! inc_r {
    ($table:ident, $code:expr, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("INC ", stringify!($reg)),
            base_cycles: 4,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$reg;
                cpu.regs.$reg = $crate::cpu::opcodes::alu::inc8(cpu, value);
                false
            }),
        };
    };
}

/// DEC r
#[macro_export]
macro_rules! dec_r {
    ($table:ident, $code:expr, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("DEC ", stringify!($reg)),
            base_cycles: 4,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$reg;
                cpu.regs.$reg = $crate::cpu::opcodes::alu::dec8(cpu, value);
                false
            }),
        };
    };
}

/// ADD HL, rr
#[macro_export]
macro_rules! add_hl_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$getter();
                $crate::cpu::opcodes::alu::add_hl(cpu, value);
                false
            }),
        };
    };
}

//! Jump, call, return, and restart opcode macros.
//!
//! Conditional variants take the flag mask and the value it must equal for
//! the branch to be taken (`FLAG_Z`/`0` encodes NZ, `FLAG_C`/`FLAG_C`
//! encodes C, and so on). They always consume their operand bytes and
//! report whether the branch happened, so the dispatcher can charge the
//! taken-path cycles.

/// Apply a signed 8-bit displacement to a 16-bit address, wrapping.
pub(crate) const fn relative_target(pc: u16, offset: u8) -> u16 {
    pc.wrapping_add(offset as i8 as u16)
}

/// JP nn
#[macro_export]
macro_rules! jp_nn {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "JP nn",
            base_cycles: 16,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.pc = cpu.fetch16(bus);
                false
            }),
        };
    };
}

/// JP cc, nn
#[macro_export]
macro_rules! jp_cc_nn {
    ($table:ident, $code:expr, $cc:expr, $flag:expr, $expected:expr) => {
        $table[$code] = Opcode {
            mnemonic: concat!("JP ", $cc, ", nn"),
            base_cycles: 12,
            conditional_cycles: 4,
            exec: Box::new(|cpu, bus| {
                let target = cpu.fetch16(bus);
                if cpu.regs.f & $flag == $expected {
                    cpu.regs.pc = target;
                    true
                } else {
                    false
                }
            }),
        };
    };
}

/// JP (HL) — despite the notation, no memory access: PC takes HL.
#[macro_export]
macro_rules! jp_hl {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "JP (HL)",
            base_cycles: 4,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                cpu.regs.pc = cpu.regs.hl();
                false
            }),
        };
    };
}

/// JR e — the displacement applies to PC after the operand is consumed.
#[macro_export]
macro_rules! jr_e {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "JR e",
            base_cycles: 12,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let offset = cpu.fetch8(bus);
                cpu.regs.pc = $crate::cpu::opcodes::jump::relative_target(cpu.regs.pc, offset);
                false
            }),
        };
    };
}

/// JR cc, e
#[macro_export]
macro_rules! jr_cc_e {
    ($table:ident, $code:expr, $cc:expr, $flag:expr, $expected:expr) => {
        $table[$code] = Opcode {
            mnemonic: concat!("JR ", $cc, ", e"),
            base_cycles: 8,
            conditional_cycles: 4,
            exec: Box::new(|cpu, bus| {
                let offset = cpu.fetch8(bus);
                if cpu.regs.f & $flag == $expected {
                    cpu.regs.pc = $crate::cpu::opcodes::jump::relative_target(cpu.regs.pc, offset);
                    true
                } else {
                    false
                }
            }),
        };
    };
}

/// CALL nn — pushes the address of the following instruction.
#[macro_export]
macro_rules! call_nn {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "CALL nn",
            base_cycles: 24,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let target = cpu.fetch16(bus);
                let ret = cpu.regs.pc;
                cpu.push16(bus, ret);
                cpu.regs.pc = target;
                false
            }),
        };
    };
}

/// CALL cc, nn
#[macro_export]
macro_rules! call_cc_nn {
    ($table:ident, $code:expr, $cc:expr, $flag:expr, $expected:expr) => {
        $table[$code] = Opcode {
            mnemonic: concat!("CALL ", $cc, ", nn"),
            base_cycles: 12,
            conditional_cycles: 12,
            exec: Box::new(|cpu, bus| {
                let target = cpu.fetch16(bus);
                if cpu.regs.f & $flag == $expected {
                    let ret = cpu.regs.pc;
                    cpu.push16(bus, ret);
                    cpu.regs.pc = target;
                    true
                } else {
                    false
                }
            }),
        };
    };
}

/// RET
#[macro_export]
macro_rules! ret {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "RET",
            base_cycles: 16,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.pc = cpu.pop16(bus);
                false
            }),
        };
    };
}

/// RET cc
#[macro_export]
macro_rules! ret_cc {
    ($table:ident, $code:expr, $cc:expr, $flag:expr, $expected:expr) => {
        $table[$code] = Opcode {
            mnemonic: concat!("RET ", $cc),
            base_cycles: 8,
            conditional_cycles: 12,
            exec: Box::new(|cpu, bus| {
                if cpu.regs.f & $flag == $expected {
                    cpu.regs.pc = cpu.pop16(bus);
                    true
                } else {
                    false
                }
            }),
        };
    };
}

/// RETI — RET plus immediate interrupt re-enable.
#[macro_export]
macro_rules! reti {
    ($table:ident, $code:expr) => {
        $table[$code] = Opcode {
            mnemonic: "RETI",
            base_cycles: 16,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.pc = cpu.pop16(bus);
                cpu.ime = true;
                false
            }),
        };
    };
}

/// RST n — one-byte call to a fixed low vector.
#[macro_export]
macro_rules! rst {
    ($table:ident, $code:expr, $target:expr) => {
        $table[$code] = Opcode {
            mnemonic: concat!("RST ", stringify!($target)),
            base_cycles: 16,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let ret = cpu.regs.pc;
                cpu.push16(bus, ret);
                cpu.regs.pc = $target;
                false
            }),
        };
    };
}

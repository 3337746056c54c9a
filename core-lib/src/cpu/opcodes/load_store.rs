//! Load, store, and stack opcode macros.

/// LD r, r'
#[macro_export]
macro_rules! ld_r_r {
    ($table:ident, $code:expr, $dst:ident, $src:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("LD ", stringify!($dst), ", ", stringify!($src)),
            base_cycles: 4,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                #[allow(clippy::self_assignment)]
                {
                    cpu.regs.$dst = cpu.regs.$src;
                }
                false
            }),
        };
    };
}

/// LD r, n
#[macro_export]
macro_rules! ld_r_n {
    ($table:ident, $code:expr, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("LD ", stringify!($reg), ", n"),
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.$reg = cpu.fetch8(bus);
                false
            }),
        };
    };
}

/// LD r, (HL)
#[macro_export]
macro_rules! ld_r_hl {
    ($table:ident, $code:expr, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("LD ", stringify!($reg), ", (HL)"),
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.$reg = bus.read(cpu.regs.hl());
                false
            }),
        };
    };
}

/// LD (HL), r
#[macro_export]
macro_rules! ld_hl_r {
    ($table:ident, $code:expr, $reg:ident) => {
        $table[$code] = Opcode {
            mnemonic: concat!("LD (HL), ", stringify!($reg)),
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                bus.write(cpu.regs.hl(), cpu.regs.$reg);
                false
            }),
        };
    };
}

/// LD rr, nn
#[macro_export]
macro_rules! ld_rr_nn {
    ($table:ident, $code:expr, $mnemonic:expr, $setter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 12,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let value = cpu.fetch16(bus);
                cpu.regs.$setter(value);
                false
            }),
        };
    };
}

/// INC rr — no flag effects on 16-bit inc/dec.
#[macro_export]
macro_rules! inc_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident, $setter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$getter().wrapping_add(1);
                cpu.regs.$setter(value);
                false
            }),
        };
    };
}

/// DEC rr
#[macro_export]
macro_rules! dec_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident, $setter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, _| {
                let value = cpu.regs.$getter().wrapping_sub(1);
                cpu.regs.$setter(value);
                false
            }),
        };
    };
}

/// PUSH rr
#[macro_export]
macro_rules! push_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 16,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let value = cpu.regs.$getter();
                cpu.push16(bus, value);
                false
            }),
        };
    };
}

/// POP rr — popping into AF forces the low nibble of F to zero.
#[macro_export]
macro_rules! pop_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $setter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 12,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                let value = cpu.pop16(bus);
                cpu.regs.$setter(value);
                false
            }),
        };
    };
}

/// LD A, (rr)
#[macro_export]
macro_rules! ld_a_rr {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                cpu.regs.a = bus.read(cpu.regs.$getter());
                false
            }),
        };
    };
}

/// LD (rr), A
#[macro_export]
macro_rules! ld_rr_a {
    ($table:ident, $code:expr, $mnemonic:expr, $getter:ident) => {
        $table[$code] = Opcode {
            mnemonic: $mnemonic,
            base_cycles: 8,
            conditional_cycles: 0,
            exec: Box::new(|cpu, bus| {
                bus.write(cpu.regs.$getter(), cpu.regs.a);
                false
            }),
        };
    };
}

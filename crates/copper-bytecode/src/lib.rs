//! Bytecode format shared by the copper assembler and virtual machine.
//!
//! This crate contains:
//! - Opcode numbering and the mnemonic name table ([`Opcode`])
//! - Machine limits (memory size, register file size)
//! - 16-bit little-endian split/join helpers
//!
//! The persisted image is a flat byte sequence with no header or footer.
//! Addresses and string lengths embedded in the image are 16-bit
//! little-endian; embedded strings are length-prefixed, while bytes placed
//! by the `data`/`db` directives are raw.

pub mod opcode;

#[cfg(test)]
mod opcode_tests;

pub use opcode::Opcode;

/// Total bytes of machine memory (RAM).
///
/// Programs must be strictly smaller, so the final byte of memory is
/// always 0. That byte is the EXIT opcode, which is how programs that run
/// off the end of their code terminate.
pub const MEM_SIZE: usize = 0xffff;

/// Number of registers in the register file. Valid indices are
/// `0..REGISTER_COUNT`.
pub const REGISTER_COUNT: usize = 15;

/// Highest register literal the assembler accepts (`#15`).
///
/// Note that this is one past the last valid runtime index; a program
/// naming `#15` assembles but faults when the instruction executes.
pub const MAX_REGISTER_LITERAL: u8 = 15;

/// Split a 16-bit value into little-endian bytes (low byte first).
pub const fn u16_to_le(value: u16) -> [u8; 2] {
    [(value & 0xff) as u8, (value >> 8) as u8]
}

/// Join little-endian bytes into a 16-bit value.
pub const fn u16_from_le(lo: u8, hi: u8) -> u16 {
    lo as u16 | (hi as u16) << 8
}

//! The ALU (Arithmetic and Logic Unit) of the LS-8.

use super::opcode::Opcode;
use super::registers::Registers;
use super::{EmuError, EmuResult};

/// Applies the arithmetic operation `op` to two general purpose registers,
/// storing the result in the first.
///
/// Results wrap modulo 256 to stay inside the 8-bit register width. Only
/// the ADD/MUL handlers route here; any other opcode is rejected.
pub fn apply(registers: &mut Registers, op: Opcode, reg_a: u8, reg_b: u8) -> EmuResult<()> {
    let lhs = registers.get(reg_a)?;
    let rhs = registers.get(reg_b)?;
    let result = match op {
        Opcode::Add => lhs.wrapping_add(rhs),
        Opcode::Mul => lhs.wrapping_mul(rhs),
        _ => return Err(EmuError::UnsupportedAluOp(op)),
    };
    registers.set(reg_a, result)
}

//! The emulator module for the LS-8.

use thiserror::Error;

use self::opcode::Opcode;

pub mod alu;
pub mod cpu;
pub mod opcode;
pub mod ram;
pub mod registers;

/// An error raised while executing a program. None of these are
/// recoverable; each one stops the machine.
#[derive(Debug, Error)]
pub enum EmuError {
    #[error("invalid instruction {opcode:#04x} at address {pc:#04x}")]
    InvalidOpcode { opcode: u8, pc: u16 },
    #[error("invalid register: {0}")]
    InvalidRegister(u8),
    #[error("memory access out of bounds: {addr:#06x}")]
    OutOfBounds { addr: u16 },
    #[error("stack underflow at address {pc:#04x}")]
    StackUnderflow { pc: u16 },
    #[error("unsupported ALU operation: {0:?}")]
    UnsupportedAluOp(Opcode),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Type alias for Result<T, [EmuError]>.
pub type EmuResult<T> = Result<T, EmuError>;

use super::{EmuError, EmuResult};

/// The number of general purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Where the stack pointer sits on reset. The bytes above it, up to
/// [`STACK_TOP`], are reserved.
pub const SP_INIT: u8 = 0xF3;

/// The notional empty-stack position. POP never advances SP past it.
pub const STACK_TOP: u8 = 0xFF;

bitflags::bitflags! {
    /// The CPU status flags register, laid out `0b00000LGE`.
    ///
    /// Reserved for future comparison instructions; no opcode in the
    /// current instruction set reads or writes it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Fl: u8 {
        /// Set if the last comparison was equal.
        const EQUAL = 1 << 0;
        /// Set if the last comparison was greater-than.
        const GREATER = 1 << 1;
        /// Set if the last comparison was less-than.
        const LESS = 1 << 2;
    }
}

/// The LS-8 register file: eight general purpose registers (`R0`-`R7`)
/// plus the stack pointer, status flags, and program counter.
///
/// The program counter is wider than a machine byte so that a runaway
/// program trips the fetch bounds check instead of silently wrapping.
#[derive(Debug)]
pub struct Registers {
    gp: [u8; NUM_REGISTERS],
    /// Stack pointer.
    pub sp: u8,
    /// Status flags.
    pub fl: Fl,
    /// Program counter.
    pub pc: u16,
}

impl Registers {
    /// Creates a new [`Registers`] instance in its reset state.
    pub fn new() -> Self {
        Self {
            gp: [0; NUM_REGISTERS],
            sp: SP_INIT,
            fl: Fl::empty(),
            pc: 0,
        }
    }

    /// Returns the value of general purpose register `index`.
    pub fn get(&self, index: u8) -> EmuResult<u8> {
        self.gp
            .get(index as usize)
            .copied()
            .ok_or(EmuError::InvalidRegister(index))
    }

    /// Sets general purpose register `index` to `value`.
    pub fn set(&mut self, index: u8, value: u8) -> EmuResult<()> {
        match self.gp.get_mut(index as usize) {
            Some(reg) => {
                *reg = value;
                Ok(())
            }
            None => Err(EmuError::InvalidRegister(index)),
        }
    }

    /// Returns the general purpose register file as a slice.
    pub fn gp(&self) -> &[u8] {
        &self.gp
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

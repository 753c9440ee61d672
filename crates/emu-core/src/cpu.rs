//! CPU trait shared by the status-flag models.

use crate::control::Boundary;
use crate::error::Result;

/// A CPU whose status word is built from lazily evaluated flags.
///
/// Instruction semantics live in the execution loop. This trait covers
/// the state that loop shares with debuggers and front panels: the status
/// word, the interrupt and halt signalling, and the instruction boundary.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Returns the current program counter.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Assemble the full status word, reserved bits included.
    fn status_word(&self) -> u16;

    /// Replace the status word (POP, RTI, debugger edits).
    fn set_status_word(&mut self, value: u16);

    /// Returns true while a halt request is outstanding.
    fn is_halted(&self) -> bool;

    /// Signal a hardware interrupt at the given request level.
    fn interrupt(&mut self, level: u8) -> Result<()>;

    /// Close the instruction just executed.
    ///
    /// `taken` selects the longer state count of conditional calls and
    /// returns.
    fn end_instruction(&mut self, opcode: u8, taken: bool) -> Boundary;

    /// Sample interrupts while no instruction is running (halted).
    fn poll(&mut self) -> Boundary;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}

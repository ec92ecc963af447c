use thiserror::Error;

/// Unrecoverable machine faults.
///
/// Any of these indicates a malformed or hostile ROM. The interpreter
/// latches the fault and refuses to execute further instructions until it
/// is reset; the faulting condition stays readable for diagnostics.
///
/// Unknown opcodes are deliberately not here: they are logged and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("memory access out of bounds at {address:#06X}")]
    MemoryOutOfBounds { address: u16 },
    #[error("call stack overflow: too many nested subroutine calls")]
    StackOverflow,
    #[error("call stack underflow: return with no subroutine call outstanding")]
    StackUnderflow,
}

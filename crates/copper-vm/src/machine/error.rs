//! Runtime errors for machine execution.

/// Fatal errors during execution.
///
/// The machine never retries: the first error aborts the current `run`
/// and is returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("register [{0}] is out of range")]
    RegisterOutOfRange(u8),

    #[error("address [{0:#06x}] is out of range")]
    AddressOutOfRange(u16),

    #[error("value [{0}] is out of range")]
    ValueOutOfRange(u16),

    #[error("division by zero")]
    DivisionByZero,

    #[error("register [{register}] holds {found}, expected {expected}")]
    TypeMismatch {
        register: u8,
        expected: &'static str,
        found: &'static str,
    },

    #[error("stack underflow")]
    StackUnderflow,

    #[error("trap function not defined: {0:#06x}")]
    UndefinedTrap(u16),

    #[error("invalid trap number: {0}")]
    InvalidTrap(u16),

    #[error("failed to convert string ({0}) to int")]
    StringParse(String),

    #[error("error invoking system ({command}): {reason}")]
    System { command: String, reason: String },

    #[error("timeout during execution")]
    Timeout,

    #[error("unknown opcode {op:#04x} at {ip:#06x}")]
    UnknownOpcode { op: u8, ip: u16 },

    #[error("program is too large for memory: RAM size => 65535 bytes, program size => {size} bytes")]
    ProgramTooLarge { size: usize },

    #[error("string is too large for memory: RAM size => 65535 bytes, string size => {size} bytes")]
    StringTooLarge { size: usize },

    #[error("reading beyond RAM")]
    BeyondRam,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

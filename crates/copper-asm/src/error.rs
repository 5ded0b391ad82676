//! Assembly error types.

use std::fmt;

use crate::token::TokenKind;

/// Error that aborts assembly.
///
/// These correspond to source that can never encode: a token of the wrong
/// kind where the operand grammar requires a specific one, or a register
/// operand outside the `#0..#15` range. Recoverable problems (an unknown
/// top-level token, a use of an undefined label) are reported to standard
/// output instead and assembly continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssembleError {
    /// The next token was not of the required kind.
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// A register literal outside `#0..#15`.
    RegisterOutOfBounds(String),
    /// A register operand that is not `#` followed by a number.
    MalformedRegister(String),
    /// An operand kind the mnemonic can never encode.
    InvalidOperand {
        mnemonic: &'static str,
        found: TokenKind,
    },
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            }
            Self::RegisterOutOfBounds(literal) => {
                write!(f, "register is out of bounds: {literal}")
            }
            Self::MalformedRegister(literal) => {
                write!(f, "malformed register: {literal}")
            }
            Self::InvalidOperand { mnemonic, found } => {
                write!(f, "invalid operand for {mnemonic}: {found}")
            }
        }
    }
}

impl std::error::Error for AssembleError {}

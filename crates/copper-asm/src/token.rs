//! Token kinds produced by the lexer.

use std::fmt;

/// A lexed token: a kind plus its literal text.
///
/// String literals carry their escape-processed content without the
/// surrounding quotes. Label literals keep the leading `:`; the assembler
/// strips it when recording the definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Token {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token. The lexer returns it forever once the
    /// source is exhausted.
    pub fn eof() -> Token {
        Token::new(TokenKind::Eof, "")
    }
}

/// Every kind of token, including one kind per mnemonic keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Comma,
    Str,
    Label,
    Eof,
    Int,
    Illegal,
    Ident,

    // Math
    Add,
    Sub,
    Mul,
    Div,
    Inc,
    Dec,
    And,
    Or,
    Xor,

    // Control flow
    Call,
    Ret,
    Jmp,
    JmpZ,
    JmpNz,

    // Stack
    Push,
    Pop,

    // Types
    IsInt,
    IsStr,
    IntToStr,
    StrToInt,

    // Compare and store
    Cmp,
    Store,

    // Output
    PrintInt,
    PrintStr,

    // Memory
    Peek,
    Poke,

    // Misc
    Concat,
    Data,
    Db,
    Exit,
    MemCpy,
    Nop,
    Rand,
    System,
    Trap,
}

impl TokenKind {
    /// Map an identifier to its keyword kind, or `Ident` if it is not a
    /// reserved mnemonic. Lookup is case-sensitive (`memCpy` is the only
    /// mixed-case keyword).
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "add" => TokenKind::Add,
            "sub" => TokenKind::Sub,
            "mul" => TokenKind::Mul,
            "div" => TokenKind::Div,
            "inc" => TokenKind::Inc,
            "dec" => TokenKind::Dec,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "xor" => TokenKind::Xor,
            "call" => TokenKind::Call,
            "ret" => TokenKind::Ret,
            "jmp" => TokenKind::Jmp,
            "jmp_z" => TokenKind::JmpZ,
            "jmp_nz" => TokenKind::JmpNz,
            "push" => TokenKind::Push,
            "pop" => TokenKind::Pop,
            "is_int" => TokenKind::IsInt,
            "is_str" => TokenKind::IsStr,
            "int_to_str" => TokenKind::IntToStr,
            "str_to_int" => TokenKind::StrToInt,
            "cmp" => TokenKind::Cmp,
            "store" => TokenKind::Store,
            "print_int" => TokenKind::PrintInt,
            "print_str" => TokenKind::PrintStr,
            "peek" => TokenKind::Peek,
            "poke" => TokenKind::Poke,
            "concat" => TokenKind::Concat,
            "data" => TokenKind::Data,
            "db" => TokenKind::Db,
            "exit" => TokenKind::Exit,
            "memCpy" => TokenKind::MemCpy,
            "nop" => TokenKind::Nop,
            "rand" => TokenKind::Rand,
            "system" => TokenKind::System,
            "trap" => TokenKind::Trap,
            _ => TokenKind::Ident,
        }
    }

    /// Name used in diagnostics and the token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comma => "COMMA",
            TokenKind::Str => "STR",
            TokenKind::Label => "LABEL",
            TokenKind::Eof => "EOF",
            TokenKind::Int => "INT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Ident => "IDENT",
            TokenKind::Add => "ADD",
            TokenKind::Sub => "SUB",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Inc => "INC",
            TokenKind::Dec => "DEC",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Call => "CALL",
            TokenKind::Ret => "RET",
            TokenKind::Jmp => "JMP",
            TokenKind::JmpZ => "JMP_Z",
            TokenKind::JmpNz => "JMP_NZ",
            TokenKind::Push => "PUSH",
            TokenKind::Pop => "POP",
            TokenKind::IsInt => "IS_INT",
            TokenKind::IsStr => "IS_STR",
            TokenKind::IntToStr => "INT_TO_STR",
            TokenKind::StrToInt => "STR_TO_INT",
            TokenKind::Cmp => "CMP",
            TokenKind::Store => "STORE",
            TokenKind::PrintInt => "PRINT_INT",
            TokenKind::PrintStr => "PRINT_STR",
            TokenKind::Peek => "PEEK",
            TokenKind::Poke => "POKE",
            TokenKind::Concat => "CONCAT",
            TokenKind::Data => "DATA",
            TokenKind::Db => "DB",
            TokenKind::Exit => "EXIT",
            TokenKind::MemCpy => "MEM_CPY",
            TokenKind::Nop => "NOP",
            TokenKind::Rand => "RAND",
            TokenKind::System => "SYSTEM",
            TokenKind::Trap => "TRAP",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

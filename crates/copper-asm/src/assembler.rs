//! Single-pass assembler.
//!
//! Tokens are pulled with a two-token lookahead and dispatched to
//! per-mnemonic emitters that append to a flat byte buffer. Label
//! references emit two placeholder bytes and record a fixup; once the
//! whole input has been read, every fixup is patched with the recorded
//! definition address. A label that was never defined patches to 0 with a
//! warning on standard output.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;

use copper_bytecode::{u16_to_le, Opcode, MAX_REGISTER_LITERAL};

use crate::error::AssembleError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

type Result<T> = std::result::Result<T, AssembleError>;

/// Assembles a token stream into a bytecode image.
pub struct Assembler<'src> {
    lexer: Lexer<'src>,
    cur: Token,
    peek: Token,
    code: Vec<u8>,
    /// Label name to the byte offset at which it was defined.
    definitions: IndexMap<String, usize>,
    /// Placeholder byte offset to the label name it awaits.
    fixups: IndexMap<usize, String>,
}

impl<'src> Assembler<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Assembler<'src> {
        // Prime the two-token lookahead.
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Assembler {
            lexer,
            cur,
            peek,
            code: Vec::new(),
            definitions: IndexMap::new(),
            fixups: IndexMap::new(),
        }
    }

    /// Consume the whole token stream and complete the image, including
    /// the label back-patch pass.
    pub fn assemble(&mut self) -> Result<()> {
        while self.cur.kind != TokenKind::Eof {
            match self.cur.kind {
                TokenKind::Label => {
                    let name = self.cur.literal.trim_start_matches(':').to_string();
                    self.definitions.insert(name, self.code.len());
                }
                TokenKind::Add => self.three_reg_op(Opcode::Add)?,
                TokenKind::Sub => self.three_reg_op(Opcode::Sub)?,
                TokenKind::Mul => self.three_reg_op(Opcode::Mul)?,
                TokenKind::Div => self.three_reg_op(Opcode::Div)?,
                TokenKind::And => self.three_reg_op(Opcode::And)?,
                TokenKind::Or => self.three_reg_op(Opcode::Or)?,
                TokenKind::Xor => self.three_reg_op(Opcode::Xor)?,
                TokenKind::Concat => self.three_reg_op(Opcode::Concat)?,
                TokenKind::MemCpy => self.three_reg_op(Opcode::MemCpy)?,
                TokenKind::Inc => self.one_reg_op(Opcode::Inc)?,
                TokenKind::Dec => self.one_reg_op(Opcode::Dec)?,
                TokenKind::Push => self.one_reg_op(Opcode::Push)?,
                TokenKind::Pop => self.one_reg_op(Opcode::Pop)?,
                TokenKind::IsInt => self.one_reg_op(Opcode::IsInt)?,
                TokenKind::IsStr => self.one_reg_op(Opcode::IsStr)?,
                TokenKind::IntToStr => self.one_reg_op(Opcode::IntToStr)?,
                TokenKind::StrToInt => self.one_reg_op(Opcode::StrToInt)?,
                TokenKind::PrintInt => self.one_reg_op(Opcode::IntPrint)?,
                TokenKind::PrintStr => self.one_reg_op(Opcode::StrPrint)?,
                TokenKind::Rand => self.one_reg_op(Opcode::IntRand)?,
                TokenKind::System => self.one_reg_op(Opcode::System)?,
                TokenKind::Peek => self.two_reg_op(Opcode::Peek)?,
                TokenKind::Poke => self.two_reg_op(Opcode::Poke)?,
                TokenKind::Jmp => self.jump_op(Opcode::Jmp)?,
                TokenKind::JmpZ => self.jump_op(Opcode::JmpZ)?,
                TokenKind::JmpNz => self.jump_op(Opcode::JmpNz)?,
                TokenKind::Call => self.jump_op(Opcode::Call)?,
                TokenKind::Ret => self.code.push(Opcode::Ret.byte()),
                TokenKind::Exit => self.code.push(Opcode::Exit.byte()),
                TokenKind::Nop => self.code.push(Opcode::Nop.byte()),
                TokenKind::Cmp => self.cmp_op()?,
                TokenKind::Store => self.store_op()?,
                TokenKind::Data | TokenKind::Db => self.data_op()?,
                TokenKind::Trap => self.trap_op()?,
                _ => {
                    println!(
                        "unhandled token: {} ({:?})",
                        self.cur.kind, self.cur.literal
                    );
                }
            }
            self.advance();
        }

        self.patch_labels();
        Ok(())
    }

    /// Print the token stream instead of assembling it.
    pub fn dump(&mut self) {
        while self.cur.kind != TokenKind::Eof {
            println!(
                "token: type -> {}, literal -> {}",
                self.cur.kind, self.cur.literal
            );
            self.advance();
        }
    }

    /// The assembled image.
    pub fn output(&self) -> &[u8] {
        &self.code
    }

    /// Take ownership of the assembled image.
    pub fn into_output(self) -> Vec<u8> {
        self.code
    }

    /// Persist the image as raw bytes.
    pub fn write_file(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.code)
    }

    fn advance(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advance iff the next token has the required kind.
    fn expect_next(&mut self, expected: TokenKind) -> Result<()> {
        if self.peek.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(AssembleError::UnexpectedToken {
                expected,
                found: self.peek.kind,
            })
        }
    }

    /// Expect the next token to be a register operand and parse it.
    fn expect_register(&mut self) -> Result<u8> {
        self.expect_next(TokenKind::Ident)?;
        parse_register(&self.cur.literal)
    }

    /// `op reg`
    fn one_reg_op(&mut self, op: Opcode) -> Result<()> {
        let reg = self.expect_register()?;
        self.code.push(op.byte());
        self.code.push(reg);
        Ok(())
    }

    /// `op reg, reg`
    fn two_reg_op(&mut self, op: Opcode) -> Result<()> {
        let a = self.expect_register()?;
        self.expect_next(TokenKind::Comma)?;
        let b = self.expect_register()?;
        self.code.extend_from_slice(&[op.byte(), a, b]);
        Ok(())
    }

    /// `op dst, a, b`
    fn three_reg_op(&mut self, op: Opcode) -> Result<()> {
        let dst = self.expect_register()?;
        self.expect_next(TokenKind::Comma)?;
        let a = self.expect_register()?;
        self.expect_next(TokenKind::Comma)?;
        let b = self.expect_register()?;
        self.code.extend_from_slice(&[op.byte(), dst, a, b]);
        Ok(())
    }

    /// `jmp`/`jmp_z`/`jmp_nz`/`call` with an absolute address or a label.
    fn jump_op(&mut self, op: Opcode) -> Result<()> {
        self.code.push(op.byte());
        self.advance();
        match self.cur.kind {
            TokenKind::Int => {
                let addr = self.parse_int(&self.cur.literal);
                self.code.extend_from_slice(&u16_to_le(addr));
            }
            TokenKind::Ident => {
                self.push_label_placeholder();
            }
            found => {
                return Err(AssembleError::InvalidOperand {
                    mnemonic: op.mnemonic(),
                    found,
                })
            }
        }
        Ok(())
    }

    /// `trap num` with a numeric target only.
    fn trap_op(&mut self) -> Result<()> {
        self.advance();
        if self.cur.kind != TokenKind::Int {
            return Err(AssembleError::InvalidOperand {
                mnemonic: "TRAP",
                found: self.cur.kind,
            });
        }
        let num = self.parse_int(&self.cur.literal);
        self.code.push(Opcode::Trap.byte());
        self.code.extend_from_slice(&u16_to_le(num));
        Ok(())
    }

    /// `cmp reg, <int | string | register | label>`
    fn cmp_op(&mut self) -> Result<()> {
        self.reg_and_operand(Opcode::CmpInt, Opcode::CmpStr, Opcode::CmpReg, "CMP")
    }

    /// `store reg, <int | string | register | label>`
    fn store_op(&mut self) -> Result<()> {
        self.reg_and_operand(Opcode::IntStore, Opcode::StrStore, Opcode::RegStore, "STORE")
    }

    /// Shared grammar of `cmp` and `store`: a destination register, a
    /// comma, then a second operand that selects the opcode. A label
    /// operand encodes like the integer form with a fixup for its
    /// address.
    fn reg_and_operand(
        &mut self,
        int_op: Opcode,
        str_op: Opcode,
        reg_op: Opcode,
        mnemonic: &'static str,
    ) -> Result<()> {
        let reg = self.expect_register()?;
        self.expect_next(TokenKind::Comma)?;
        self.advance();
        match self.cur.kind {
            TokenKind::Int => {
                let value = self.parse_int(&self.cur.literal);
                self.code.extend_from_slice(&[int_op.byte(), reg]);
                self.code.extend_from_slice(&u16_to_le(value));
            }
            TokenKind::Str => {
                let bytes = self.cur.literal.clone().into_bytes();
                self.code.extend_from_slice(&[str_op.byte(), reg]);
                self.code.extend_from_slice(&u16_to_le(bytes.len() as u16));
                self.code.extend_from_slice(&bytes);
            }
            TokenKind::Ident if self.cur.literal.starts_with('#') => {
                let src = parse_register(&self.cur.literal)?;
                self.code.extend_from_slice(&[reg_op.byte(), reg, src]);
            }
            TokenKind::Ident => {
                // A bare identifier is a label; its address encodes like
                // the integer form.
                self.code.extend_from_slice(&[int_op.byte(), reg]);
                self.push_label_placeholder();
            }
            found => {
                return Err(AssembleError::InvalidOperand { mnemonic, found });
            }
        }
        Ok(())
    }

    /// `data`/`db`: a string emits its raw bytes, otherwise a
    /// comma-separated list of integers emits one byte each (values are
    /// truncated to their low 8 bits).
    fn data_op(&mut self) -> Result<()> {
        self.advance();
        if self.cur.kind == TokenKind::Str {
            let bytes = self.cur.literal.clone().into_bytes();
            self.code.extend_from_slice(&bytes);
            return Ok(());
        }

        if self.cur.kind != TokenKind::Int {
            return Err(AssembleError::UnexpectedToken {
                expected: TokenKind::Int,
                found: self.cur.kind,
            });
        }
        let value = self.parse_int(&self.cur.literal);
        self.code.push(value as u8);

        while self.peek.kind == TokenKind::Comma {
            self.advance();
            self.expect_next(TokenKind::Int)?;
            let value = self.parse_int(&self.cur.literal);
            self.code.push(value as u8);
        }
        Ok(())
    }

    /// Record a fixup for the label in `cur` and emit the two placeholder
    /// bytes it will patch.
    fn push_label_placeholder(&mut self) {
        self.fixups.insert(self.code.len(), self.cur.literal.clone());
        self.code.extend_from_slice(&[0, 0]);
    }

    /// Patch every placeholder with its label's definition address.
    fn patch_labels(&mut self) {
        for (&offset, name) in &self.fixups {
            let addr = match self.definitions.get(name) {
                Some(&addr) => addr,
                None => {
                    println!("possible use of undefined label '{name}'");
                    0
                }
            };
            self.code[offset] = (addr & 0xff) as u8;
            self.code[offset + 1] = (addr >> 8) as u8;
        }
    }

    /// Parse an integer literal, decimal or `0x…` hex, truncated to 16
    /// bits. A literal the lexer accepted but that does not parse (for
    /// example `12x3`) is reported and assembles as 0.
    fn parse_int(&self, literal: &str) -> u16 {
        match parse_number(literal) {
            Some(value) => value as u16,
            None => {
                println!("invalid integer literal '{literal}', assembling as 0");
                0
            }
        }
    }
}

/// Parse `#N` into a register index, enforcing the `0..=15` literal
/// range. The `#` prefix is tolerated missing, matching how numeric
/// identifiers reach this point through the operand grammar.
fn parse_register(literal: &str) -> Result<u8> {
    let digits = literal.strip_prefix('#').unwrap_or(literal);
    let index: u32 = digits
        .parse()
        .map_err(|_| AssembleError::MalformedRegister(literal.to_string()))?;
    if index > MAX_REGISTER_LITERAL as u32 {
        return Err(AssembleError::RegisterOutOfBounds(literal.to_string()));
    }
    Ok(index as u8)
}

/// Decimal or `0x…`/`0X…` hex.
fn parse_number(literal: &str) -> Option<u64> {
    if let Some(hex) = literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        literal.parse().ok()
    }
}

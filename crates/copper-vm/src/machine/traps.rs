//! Host trap callbacks.
//!
//! The `trap` instruction dispatches through a table of host callbacks
//! keyed by trap number. Every number in `[0, 0xffff)` resolves: numbers
//! without a registered callback fall back to a handler that reports the
//! trap as undefined, so the table is fully populated before any
//! execution begins.

use std::collections::HashMap;

use crate::machine::error::RuntimeError;
use crate::machine::value::Value;
use crate::machine::vm::Machine;

/// A host callback invoked by the `trap` instruction.
///
/// Plain function pointers keep the table `Copy`-friendly: the machine
/// looks a callback up by value and then hands itself to it mutably.
pub type TrapFn = fn(&mut Machine, u16) -> Result<(), RuntimeError>;

/// Mapping from trap numbers to callbacks.
#[derive(Clone)]
pub struct TrapTable {
    entries: HashMap<u16, TrapFn>,
}

impl TrapTable {
    /// An empty table; every number reports undefined.
    pub fn new() -> TrapTable {
        TrapTable {
            entries: HashMap::new(),
        }
    }

    /// A table with the three built-in traps installed.
    pub fn with_builtins() -> TrapTable {
        let mut table = TrapTable::new();
        table.install(0, str_len);
        table.install(1, read_string);
        table.install(2, strip_whitespace);
        table
    }

    /// Install or replace the callback for a trap number.
    pub fn install(&mut self, number: u16, callback: TrapFn) {
        self.entries.insert(number, callback);
    }

    /// Resolve a trap number.
    pub fn lookup(&self, number: u16) -> TrapFn {
        self.entries.get(&number).copied().unwrap_or(undefined)
    }
}

impl Default for TrapTable {
    fn default() -> TrapTable {
        TrapTable::with_builtins()
    }
}

/// Fallback for numbers without a registered callback.
fn undefined(_machine: &mut Machine, number: u16) -> Result<(), RuntimeError> {
    Err(RuntimeError::UndefinedTrap(number))
}

/// Trap 0: replace the string in register 0 with its length.
fn str_len(machine: &mut Machine, _number: u16) -> Result<(), RuntimeError> {
    let len = machine.get_str(0)?.len();
    machine.set_register(0, Value::clamped(len as i64));
    Ok(())
}

/// Trap 1: read one line from standard input, newline included, into
/// register 0.
fn read_string(machine: &mut Machine, _number: u16) -> Result<(), RuntimeError> {
    let line = machine.read_line()?;
    machine.set_register(0, Value::Str(line));
    Ok(())
}

/// Trap 2: strip leading and trailing whitespace from the string in
/// register 0.
fn strip_whitespace(machine: &mut Machine, _number: u16) -> Result<(), RuntimeError> {
    let bytes = machine.get_str(0)?;
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    let trimmed = bytes[start..end].to_vec();
    machine.set_register(0, Value::Str(trimmed));
    Ok(())
}

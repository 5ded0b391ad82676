//! Virtual machine executing copper bytecode images.
//!
//! [`Machine`] holds the full execution state: 15 typed registers, 64 KiB
//! of byte-addressable memory shared by code and data, a call/data stack,
//! the zero flag, and the instruction pointer. Programs are loaded at
//! offset 0 and run until an EXIT instruction or a fatal error.
//!
//! Code and data share one address space, and POKE/MEM_CPY may rewrite
//! instructions that are about to execute; nothing is cached between
//! steps.

pub mod machine;

pub use machine::{
    Deadline, Machine, MachineBuilder, NoopTracer, PrintTracer, RuntimeError, Tracer, TrapFn,
    TrapTable, Value,
};

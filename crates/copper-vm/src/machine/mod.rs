//! Machine state and the decode-dispatch loop.

mod error;
mod rng;
mod trace;
mod traps;
mod value;
mod vm;

#[cfg(test)]
mod value_tests;

pub use error::RuntimeError;
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use traps::{TrapFn, TrapTable};
pub use value::Value;
pub use vm::{Deadline, Machine, MachineBuilder};

//! Execution tracing hooks.
//!
//! The tracer is a zero-cost abstraction: [`NoopTracer`]'s methods are
//! `#[inline(always)]` empty functions the compiler eliminates, so the
//! traced and untraced loops compile to the same code.

use copper_bytecode::Opcode;

/// Instrumentation hook invoked once per executed instruction.
pub trait Tracer {
    /// Called after the opcode byte is fetched, before it is dispatched.
    /// `ip` is the address of the opcode itself.
    fn instruction(&mut self, ip: u16, op: Opcode);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn instruction(&mut self, _ip: u16, _op: Opcode) {}
}

/// Tracer printing one `IP opcode [MNEMONIC]` line per step.
///
/// The CLI selects this when the `DEBUG` environment variable is
/// non-empty.
pub struct PrintTracer;

impl Tracer for PrintTracer {
    fn instruction(&mut self, ip: u16, op: Opcode) {
        println!("{ip:04x} {:02x} [{}]", op.byte(), op.mnemonic());
    }
}

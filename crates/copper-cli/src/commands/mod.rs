//! One module per subcommand.

pub mod compile;
pub mod dump;
pub mod execute;
pub mod run;

use std::path::Path;

use copper_asm::{Assembler, Lexer};
use copper_vm::{Machine, PrintTracer};

/// Per-instruction tracing is switched on by a non-empty `DEBUG`
/// environment variable.
pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("DEBUG").is_some_and(|value| !value.is_empty())
}

/// Run a loaded machine, tracing when `DEBUG` is set, and report any
/// runtime error.
pub(crate) fn run_machine(machine: &mut Machine, file: &Path) -> bool {
    let result = if debug_enabled() {
        machine.run_with_tracer(&mut PrintTracer)
    } else {
        machine.run()
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            eprintln!("error running {}: {e}", file.display());
            false
        }
    }
}

/// Read and assemble one source file.
pub(crate) fn assemble_file(file: &Path) -> Option<Vec<u8>> {
    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error reading {}: {e}", file.display());
            return None;
        }
    };
    let mut assembler = Assembler::new(Lexer::new(&source));
    if let Err(e) = assembler.assemble() {
        eprintln!("error compiling {}: {e}", file.display());
        return None;
    }
    Some(assembler.into_output())
}

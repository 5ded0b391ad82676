//! Compile source files and run them without writing bytecode to disk.

use std::path::PathBuf;

use copper_vm::Machine;

use super::{assemble_file, run_machine};

pub fn run(files: &[PathBuf]) -> bool {
    for file in files {
        let Some(code) = assemble_file(file) else {
            return false;
        };
        let mut machine = Machine::new();
        machine.load_bytes(&code);
        if !run_machine(&mut machine, file) {
            return false;
        }
    }
    true
}

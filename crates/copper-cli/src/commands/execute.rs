//! Run compiled bytecode images.

use std::path::PathBuf;

use copper_vm::Machine;

use super::run_machine;

pub fn run(files: &[PathBuf]) -> bool {
    for file in files {
        let mut machine = Machine::new();
        if let Err(e) = machine.load_file(file) {
            eprintln!("error reading {}: {e}", file.display());
            return false;
        }
        if !run_machine(&mut machine, file) {
            return false;
        }
    }
    true
}

//! Compile source files into `.raw` siblings.

use std::path::PathBuf;

use super::assemble_file;

pub fn run(files: &[PathBuf]) -> bool {
    for file in files {
        let Some(code) = assemble_file(file) else {
            return false;
        };
        println!("generated bytecode is {} bytes long", code.len());
        let output = file.with_extension("raw");
        if let Err(e) = std::fs::write(&output, &code) {
            eprintln!("error writing {}: {e}", output.display());
            return false;
        }
    }
    true
}

//! Print the token stream of source files.

use std::path::PathBuf;

use copper_asm::{Assembler, Lexer};

pub fn run(files: &[PathBuf]) -> bool {
    for file in files {
        let source = match std::fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error reading {}: {e}", file.display());
                return false;
            }
        };
        Assembler::new(Lexer::new(&source)).dump();
    }
    true
}

//! End-to-end scenarios: assemble a source program, run it, and check
//! the bytes written to standard output.

use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use indoc::indoc;

use copper_asm::{Assembler, Lexer};
use copper_vm::{Machine, RuntimeError, Value};

/// Clonable writer so a test can keep a handle on the machine's output.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn assemble(source: &str) -> Vec<u8> {
    let mut assembler = Assembler::new(Lexer::new(source));
    assembler.assemble().expect("assembly should succeed");
    assembler.into_output()
}

fn run_source(source: &str) -> (Machine, SharedBuf) {
    let out = SharedBuf::default();
    let mut machine = Machine::builder().stdout(out.clone()).build();
    machine.load_bytes(&assemble(source));
    machine.run().expect("program should run to EXIT");
    (machine, out)
}

#[test]
fn call_return_prints_hex_with_width_by_magnitude() {
    let (_, out) = run_source(indoc! {r#"
        store #1, 15
        call print
        store #1, 6
        call print
        store #1, 255
        call print
        exit
        :print
        print_int #1
        store #1, "\n"
        print_str #1
        ret
    "#});
    assert_eq!(out.contents(), "0f\n06\nff\n");
}

#[test]
fn print_int_widens_to_four_digits_at_0x100() {
    let (_, out) = run_source(indoc! {r#"
        store #1, 255
        print_int #1
        store #2, "\n"
        print_str #2
        store #1, 256
        print_int #1
        print_str #2
        exit
    "#});
    assert_eq!(out.contents(), "ff\n0100\n");
}

#[test]
fn integer_compare_takes_the_equal_branch() {
    let (_, out) = run_source(indoc! {r#"
        store #1, 4
        cmp #1, 4
        jmp_z eq
        store #1, "bad\n"
        print_str #1
        exit
        :eq
        store #1, "ok\n"
        print_str #1
        exit
    "#});
    assert_eq!(out.contents(), "ok\n");
}

#[test]
fn countdown_loop_with_sub_setting_the_flag() {
    let (_, out) = run_source(indoc! {r#"
        store #1, 11
        store #2, 1
        :repeat
        sub #1, #1, #2
        print_int #1
        store #3, "\n"
        print_str #3
        jmp_nz repeat
        exit
    "#});
    assert_eq!(
        out.contents(),
        "0a\n09\n08\n07\n06\n05\n04\n03\n02\n01\n00\n"
    );
}

#[test]
fn types_round_trip_through_the_flag() {
    let (machine, _) = run_source(indoc! {r#"
        store #1, "32"
        str_to_int #1
        is_int #1
        exit
    "#});
    assert_eq!(machine.register(1), &Value::Int(32));
    assert!(machine.zero_flag());

    let (machine, _) = run_source(indoc! {r#"
        store #1, "32"
        str_to_int #1
        int_to_str #1
        is_str #1
        exit
    "#});
    assert_eq!(machine.register(1), &Value::Str(b"32".to_vec()));
    assert!(machine.zero_flag());
}

#[test]
fn self_modifying_code_via_poke_terminates() {
    // Write NOP at 0x5000 and EXIT at 0x5001, then jump there.
    let (_, out) = run_source(indoc! {"
        store #1, 0x50
        store #2, 0x5000
        poke #1, #2
        store #1, 0
        store #2, 0x5001
        poke #1, #2
        jmp 0x5000
    "});
    assert_eq!(out.contents(), "");
}

#[test]
fn trap_0_measures_banana() {
    let (machine, _) = run_source(indoc! {r#"
        store #0, "banana"
        trap 0
        exit
    "#});
    assert_eq!(machine.register(0), &Value::Int(6));
}

#[test]
fn traps_1_and_2_read_and_trim_a_line() {
    let source = indoc! {r#"
        trap 1
        trap 2
        print_str #0
        exit
    "#};
    let out = SharedBuf::default();
    let mut machine = Machine::builder()
        .stdout(out.clone())
        .stdin(Cursor::new(b"  spaced out  \n".to_vec()))
        .build();
    machine.load_bytes(&assemble(source));
    machine.run().unwrap();
    assert_eq!(out.contents(), "spaced out");
}

#[test]
fn push_pop_restores_a_register_around_a_store() {
    let (machine, _) = run_source(indoc! {r#"
        store #1, 1234
        push #1
        store #1, 9
        pop #1
        exit
    "#});
    assert_eq!(machine.register(1), &Value::Int(1234));
}

#[test]
fn nested_calls_return_in_order() {
    let (_, out) = run_source(indoc! {r#"
        call outer
        store #1, "done\n"
        print_str #1
        exit
        :outer
        store #1, "outer\n"
        print_str #1
        call inner
        ret
        :inner
        store #1, "inner\n"
        print_str #1
        ret
    "#});
    assert_eq!(out.contents(), "outer\ninner\ndone\n");
}

#[test]
fn data_bytes_execute_as_code() {
    // data can spell out instructions: store #1, 5 ; print_int #1 ; exit
    let (_, out) = run_source(indoc! {"
        data 0x01, 0x01, 0x05, 0x00
        data 0x02, 0x01
        data 0x00
    "});
    assert_eq!(out.contents(), "05");
}

#[test]
fn label_address_can_be_stored_and_compared() {
    let (machine, _) = run_source(indoc! {"
        store #1, spot
        cmp #1, spot
        :spot
        exit
    "});
    // `spot` is at offset 8: two 4-byte instructions precede it.
    assert_eq!(machine.register(1), &Value::Int(8));
    assert!(machine.zero_flag());
}

#[test]
fn mem_cpy_duplicates_a_region() {
    let (machine, _) = run_source(indoc! {r#"
        jmp start
        :src
        data "copy me"
        :start
        store #1, 0x7000
        store #2, src
        store #3, 7
        memCpy #1, #2, #3
        exit
    "#});
    assert_eq!(&machine.memory()[0x7000..0x7007], b"copy me");
}

#[test]
fn division_by_zero_surfaces_as_an_error() {
    let source = indoc! {"
        store #1, 5
        store #2, 0
        div #3, #1, #2
        exit
    "};
    let mut machine = Machine::builder().stdout(SharedBuf::default()).build();
    machine.load_bytes(&assemble(source));
    assert!(matches!(
        machine.run(),
        Err(RuntimeError::DivisionByZero)
    ));
}

#[test]
fn register_fifteen_assembles_but_faults_at_runtime() {
    let mut machine = Machine::builder().stdout(SharedBuf::default()).build();
    machine.load_bytes(&assemble("inc #15\nexit"));
    assert!(matches!(
        machine.run(),
        Err(RuntimeError::RegisterOutOfRange(15))
    ));
}

#[test]
fn system_prints_captured_child_output() {
    let (_, out) = run_source(indoc! {r#"
        store #1, "echo copper"
        system #1
        exit
    "#});
    assert_eq!(out.contents(), "copper\n\n");
}

#[test]
fn system_honors_quoted_arguments() {
    let (_, out) = run_source(indoc! {r#"
        store #1, "echo 'two words'"
        system #1
        exit
    "#});
    assert_eq!(out.contents(), "two words\n\n");
}

#[test]
fn unterminated_programs_fall_through_to_implicit_exit() {
    // No exit anywhere: execution walks into zeroed memory and stops.
    let (machine, _) = run_source("store #1, 3");
    assert_eq!(machine.register(1), &Value::Int(3));
}

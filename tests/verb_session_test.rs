// Bitfield parser session driven through an in-memory console
use zvocab::config::{Annotation, Config};
use zvocab::console::Console;
use zvocab::session::run_verb_session;
use zvocab::SessionError;

fn run_verbs(input: &str, config: &Config) -> (Result<(), SessionError>, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let result = run_verb_session(&mut console, config);
    let output = String::from_utf8(console.into_output()).expect("output is utf-8");
    (result, output)
}

#[test]
fn test_reports_set_high_bits() {
    let (result, output) = run_verbs("261\n", &Config::default());
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Encoded number: low bits: 5\nBit 8 is true.\nAll other bits are false.\nEncoded number: "
    );
}

#[test]
fn test_all_high_bits() {
    let (_, output) = run_verbs("65280\n", &Config::default());
    for bit in 8..=15 {
        assert!(output.contains(&format!("Bit {} is true.\n", bit)));
    }
    assert!(output.contains("low bits: 0\n"));
}

#[test]
fn test_same_input_same_report() {
    let (_, output) = run_verbs("16440\n16440\n", &Config::default());
    let reports: Vec<&str> = output
        .split("Encoded number: ")
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0], reports[1]);
}

#[test]
fn test_verb_annotation() {
    let mut config = Config::default();
    config.verbs.annotate = Annotation::Verb;

    // 0x6000 | 90: direct and indirect object, verb 90
    let (_, output) = run_verbs("24666\n", &config);
    assert!(output.contains("low bits: 90 (verb id)\n"));
    assert!(output.contains("Bit 13 is true. (indirect object)\n"));
    assert!(output.contains("Bit 14 is true. (direct object)\n"));
}

#[test]
fn test_garbage_input_ends_session() {
    let (result, _) = run_verbs("0x105\n", &Config::default());
    assert!(matches!(result, Err(SessionError::Console(_))));
}

#[test]
fn test_numbers_past_64_bits_keep_low_word() {
    // 2^64 + 1
    let (result, output) = run_verbs("18446744073709551617\n", &Config::default());
    assert!(result.is_ok());
    assert!(output.contains("low bits: 1\nAll other bits are false.\n"));
}

#[test]
fn test_negative_number_reads_as_twos_complement() {
    let (result, output) = run_verbs("-1\n", &Config::default());
    assert!(result.is_ok());
    assert!(output.contains("low bits: 255\n"));
    assert!(output.contains("Bit 15 is true.\n"));
}

#[test]
fn test_object_annotation() {
    let mut config = Config::default();
    config.verbs.annotate = Annotation::Object;

    // 0x6000 | 3: search adventurer and room, preposition 3
    let (result, output) = run_verbs("24579\n", &config);
    assert!(result.is_ok());
    assert!(output.contains("low bits: 3 (preposition id)\n"));
    assert!(output.contains("Bit 13 is true. (search room)\n"));
    assert!(output.contains("Bit 14 is true. (search adventurer)\n"));
}

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

fn main() {
    let test_case_definitions_path = Path::new("src").join("demangling_test_data.txt");
    println!(
        "cargo:rerun-if-changed={}",
        test_case_definitions_path.display()
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("generated_tests.rs");
    let mut output = File::create(&dest_path).unwrap();

    let test_case_definitions = BufReader::new(File::open(test_case_definitions_path).unwrap());

    let mut prev_line = String::new();

    for line in test_case_definitions.lines().map(|l| l.unwrap()) {
        if !line.trim().is_empty() && !line.starts_with('#') && prev_line.starts_with('#') {
            let (mangled, demangled) = match line.find(' ') {
                Some(end_of_mangled_name) => (
                    &line[..end_of_mangled_name],
                    line[end_of_mangled_name + 1..].trim(),
                ),
                None => panic!("test case without expected output: {}", line),
            };

            let title: String = prev_line[1..]
                .trim()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
                .collect();

            writeln!(output, "#[test] fn demangle_{}() {{", title).unwrap();
            writeln!(output, "  assert_eq!(crate::demangle({:?}), {:?});", mangled, demangled).unwrap();
            writeln!(output, "}}").unwrap();
        }

        prev_line = line;
    }
}

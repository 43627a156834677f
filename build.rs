//! Build script to generate the embedded answer list
//!
//! Reads the word list file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/answers.txt",
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Candidate solution words",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/answers.txt");
}

fn generate_word_list(input: &str, output: &Path, const_name: &str, doc: &str) {
    let content = fs::read_to_string(input).unwrap_or_else(|e| panic!("reading {input}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut file = fs::File::create(output).unwrap();

    writeln!(file, "/// {doc} ({} words)", words.len()).unwrap();
    writeln!(file, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(file, "    \"{word}\",").unwrap();
    }
    writeln!(file, "];").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "/// Number of entries in [`{const_name}`]").unwrap();
    writeln!(
        file,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    )
    .unwrap();
}

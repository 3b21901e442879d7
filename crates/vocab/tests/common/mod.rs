//! Common test utilities shared across integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the vocab binary built for these tests
pub fn vocab_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vocab"))
}

/// Run the vocab binary in the specified directory with colors disabled
pub fn run_vocab_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(vocab_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute vocab binary")
}

/// Write `content` to `name` inside `dir` and return its path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

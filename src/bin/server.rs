//! Relay server binary.
//! Run with: cargo run --bin clipscout-server

use std::process::ExitCode;

use clipscout::startup;

fn main() -> ExitCode {
    startup::run()
}

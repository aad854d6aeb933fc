//! InfoScope query server binary.
//! Run with: cargo run --bin infoscope-server

use std::process::ExitCode;

use infoscope::start_infoscope;

fn main() -> ExitCode {
    start_infoscope::run()
}

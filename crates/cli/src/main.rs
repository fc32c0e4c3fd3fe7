use std::process::ExitCode;

fn main() -> ExitCode {
    drobe_cli::run()
}

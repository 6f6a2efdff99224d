//! Entrypoint.

use owo_colors::OwoColorize;

fn main() {
    match botstart::initialize_command_line() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{}", format!("ERROR: {}", err).red());
            err.chain()
                .skip(1)
                .for_each(|cause| eprintln!("{}", format!("because: {}", cause).red()));
            std::process::exit(botstart::exit_code_for_error(&err));
        }
    }
}

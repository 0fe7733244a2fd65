//! `cpp-which`: exits successfully only if every given command is on PATH.

use cpp_scaffold::{
    cli::{get_args, WhichArgs},
    which::{missing_commands, missing_message},
};

fn main() {
    let args: WhichArgs = get_args();

    let missing = missing_commands(&args.commands);
    if let Some(message) = missing_message(&missing) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

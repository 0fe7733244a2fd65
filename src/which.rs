//! Command availability checks.

use log::debug;

/// Returns the commands that do not resolve on `PATH`, in input order.
pub fn missing_commands<S: AsRef<str>>(commands: &[S]) -> Vec<String> {
    commands
        .iter()
        .map(AsRef::as_ref)
        .filter(|command| match which::which(command) {
            Ok(path) => {
                debug!("Found '{}' at '{}'", command, path.display());
                false
            }
            Err(_) => true,
        })
        .map(str::to_string)
        .collect()
}

/// Message reported for the missing commands, `None` when nothing is missing.
pub fn missing_message(missing: &[String]) -> Option<String> {
    match missing {
        [] => None,
        [single] => Some(format!("Command '{single}' not found.")),
        many => Some(format!("Commands not found: {}", many.join(", "))),
    }
}

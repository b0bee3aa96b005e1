use std::{
    fmt::Debug,
    process::{Command, ExitStatus},
};

use miette::{ensure, IntoDiagnostic, Result, WrapErr};

use crate::log;

/// Runs a command attached to the current terminal and hands back its exit
/// status once it terminates. A non-zero status is not an error here; what
/// to make of the child's outcome is the caller's call.
pub fn interactive<S: AsRef<str> + Debug>(args: &[S]) -> Result<ExitStatus> {
    ensure!(!args.is_empty(), "no command provided to exec");

    log!("Spawning": "{args:?}");

    let command = args[0].as_ref();
    let args = &args[1..];

    let status = Command::new(command)
        .args(args.iter().map(|s| s.as_ref()))
        .status()
        .into_diagnostic()
        .wrap_err("spawn failed")?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_child_exit_status() {
        let status = interactive(&["sh", "-c", "exit 3"]).unwrap();
        assert_eq!(status.code(), Some(3));

        let status = interactive(&["sh", "-c", "exit 0"]).unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_binary_is_an_error() {
        assert!(interactive(&["lhwsutil-dev-no-such-binary"]).is_err());
    }

    #[test]
    fn empty_command_is_an_error() {
        let args: &[&str] = &[];
        assert!(interactive(args).is_err());
    }
}

//! Azure CLI command execution.
//!
//! Every call to Azure goes through the logged-in `az` CLI. The
//! [`CommandRunner`] trait is the seam between the enumerators and the
//! process, so tests can script responses.

use crate::config;
use crate::error::{AzError, Result};
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Runs a command line and returns its stdout.
pub trait CommandRunner {
    fn run(&self, cmd: &str) -> Result<String>;
}

/// The real `az` CLI on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AzCli;

impl CommandRunner for AzCli {
    fn run(&self, cmd: &str) -> Result<String> {
        run(cmd)
    }
}

/// Run a shell command and return its stdout.
///
/// The command string is split on spaces, with quoted substrings preserved.
///
/// # Returns
/// * `Ok(String)` - The stdout output on success
/// * `Err(AzError::Command)` - If the command cannot start, exits non-zero,
///   or produces more than [`config::MAX_OUTPUT_BYTES`]
pub fn run(cmd: &str) -> Result<String> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = match cmds.split_first() {
        Some((program, args)) if !program.is_empty() => (program, args),
        _ => return Err(command_error(cmd, "empty command".to_string())),
    };

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        command_error(cmd, format!("Failed to execute command: {e}"))
    })?;

    if output.status.success() {
        log::debug!("Success cmd: {cmd}");
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());

        if output.stdout.len() > config::MAX_OUTPUT_BYTES {
            return Err(command_error(
                cmd,
                format!("Response too large: {} bytes", output.stdout.len()),
            ));
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(command_error(cmd, format!("ERROR running: {}", stderr.trim())));
    }

    String::from_utf8(output.stdout).map_err(|e| command_error(cmd, format!("Invalid UTF-8: {e}")))
}

fn command_error(cmd: &str, message: String) -> AzError {
    AzError::Command {
        cmd: cmd.to_string(),
        message,
    }
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Scripted runner for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use super::CommandRunner;
    use crate::error::{AzError, Result};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Answers each command with the first scripted response whose needle
    /// occurs in the command line.
    #[derive(Default)]
    pub struct FakeRunner {
        responses: Vec<(String, std::result::Result<String, String>)>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, needle: &str, body: &str) -> Self {
            self.responses.push((needle.to_string(), Ok(body.to_string())));
            self
        }

        pub fn respond_file(self, needle: &str, file: &str) -> Self {
            let path = format!("src/tests/test_data/{file}");
            let body = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Error reading test data {path}: {e}"));
            self.respond(needle, &body)
        }

        pub fn fail(mut self, needle: &str, message: &str) -> Self {
            self.responses
                .push((needle.to_string(), Err(message.to_string())));
            self
        }

        /// Shared log of every command line run, in order.
        pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
            Rc::clone(&self.calls)
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, cmd: &str) -> Result<String> {
            self.calls.borrow_mut().push(cmd.to_string());
            let scripted = self
                .responses
                .iter()
                .find(|(needle, _)| cmd.contains(needle.as_str()));
            match scripted {
                Some((_, Ok(body))) => Ok(body.clone()),
                Some((_, Err(message))) => Err(AzError::Command {
                    cmd: cmd.to_string(),
                    message: message.clone(),
                }),
                None => Err(AzError::Command {
                    cmd: cmd.to_string(),
                    message: "no scripted response".to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_strip_complex() {
        let input = "Hello 'World War'  'fail' Rust";
        let expected = vec!["Hello", "World War", "fail", "Rust"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_nospaces() {
        let input = "NoSpacesHere";
        let expected = vec!["NoSpacesHere"];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_arm_url() {
        let input = "az rest --method get --url 'https://management.azure.com/subscriptions/s1/resourcegroups?api-version=2021-04-01&%24skiptoken=abc' --output json";
        let expected = vec![
            "az",
            "rest",
            "--method",
            "get",
            "--url",
            "https://management.azure.com/subscriptions/s1/resourcegroups?api-version=2021-04-01&%24skiptoken=abc",
            "--output",
            "json",
        ];
        assert_eq!(split_and_strip(input), expected);
    }

    #[test]
    fn test_split_and_strip_resource_id() {
        let input = "az resource show --ids '/subscriptions/s1/resourceGroups/rg (old)/providers/Microsoft.Compute/virtualMachines/vm1' --output json";
        let parts = split_and_strip(input);
        assert_eq!(parts.len(), 7);
        assert_eq!(
            parts[4],
            "/subscriptions/s1/resourceGroups/rg (old)/providers/Microsoft.Compute/virtualMachines/vm1"
        );
    }

    #[test]
    fn test_run_empty_command() {
        let err = run("   ").unwrap_err();
        assert!(matches!(err, AzError::Command { .. }));
    }

    #[test]
    fn test_fake_runner_first_match_wins() {
        let runner = fake::FakeRunner::new()
            .respond("account show", "{}")
            .fail("account", "unreachable");
        let calls = runner.calls();
        assert_eq!(runner.run("az account show").unwrap(), "{}");
        assert!(runner.run("az group list").is_err());
        assert_eq!(calls.borrow().len(), 2);
    }
}

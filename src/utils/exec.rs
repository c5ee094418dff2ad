//! External command execution utilities.
//!
//! Runs the API extractor (and any other configured tool) with its output
//! filtered and forwarded to the logger.

use crate::log;
use anyhow::{Context, Result};
use regex::Regex;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Output},
    sync::OnceLock,
};

/// Run an external command with arguments inside a working directory.
///
/// # Examples
/// ```ignore
/// exec!(filter=&DOXYGEN_FILTER; root; &config.doxygen.command; "docs/Doxyfile")?;
/// ```
#[macro_export]
macro_rules! exec {
    (filter=$filter:expr; $root:expr; $cmd:expr; $($arg:expr),* $(,)?) => {
        $crate::utils::exec::exec(
            $root,
            &$crate::utils::exec::to_cmd_vec($cmd),
            &$crate::utils::exec::filter_args(&[$(::std::ffi::OsString::from($arg)),*]),
            $filter,
        )
    };
}

/// Convert a configured command (`["doxygen"]`, `["wsl", "doxygen"]`, ...) to OS strings.
#[inline]
pub fn to_cmd_vec(cmd: &[String]) -> Vec<OsString> {
    cmd.iter().map(OsString::from).collect()
}

/// Filter out empty args.
#[inline]
pub fn filter_args(args: &[OsString]) -> Vec<OsString> {
    args.iter().filter(|a| !a.is_empty()).cloned().collect()
}

/// Execute a command and capture its output.
///
/// # Errors
/// Returns error if command fails to launch or returns non-zero exit code.
pub fn exec(
    root: &Path,
    cmd: &[OsString],
    args: &[OsString],
    filter: &'static FilterRule,
) -> Result<Output> {
    let (name, mut command) = prepare(root, cmd, args)?;

    let output = command
        .output()
        .with_context(|| format!("Failed to execute `{name}`"))?;

    log_output(&name, &output, filter)?;
    Ok(output)
}

/// Locate the executable of a configured command on `PATH`.
pub fn locate(cmd: &[String]) -> Result<PathBuf> {
    let program = cmd.first().context("Empty command")?;
    which::which(program).with_context(|| format!("`{program}` not found on PATH"))
}

/// Prepare a Command from components.
fn prepare(root: &Path, cmd: &[OsString], args: &[OsString]) -> Result<(String, Command)> {
    let name = cmd
        .first()
        .and_then(|s| s.to_str())
        .context("Empty command")?
        .to_owned();

    let mut command = Command::new(&cmd[0]);
    command.args(&cmd[1..]).args(args).current_dir(root);

    Ok((name, command))
}

// ============================================================================
// Output Filtering
// ============================================================================

fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
    re.replace_all(s, "")
}

/// Filter rule for skipping known noise in command output.
pub struct FilterRule {
    /// Prefixes to match at the start of output lines.
    pub skip_prefixes: &'static [&'static str],
}

impl FilterRule {
    pub const fn new(skip_prefixes: &'static [&'static str]) -> Self {
        Self { skip_prefixes }
    }

    /// Returns true if the line is empty or starts with any of the skip prefixes.
    fn should_skip(&self, line: &str) -> bool {
        line.is_empty() || self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }

    /// Lines of `output` that survive the filter, ANSI codes removed.
    fn kept_lines(&self, output: &str) -> Vec<String> {
        output
            .lines()
            .map(|line| strip_ansi(line).trim().to_owned())
            .filter(|line| !self.should_skip(line))
            .collect()
    }

    fn log(&self, name: &str, output: &str) {
        let lines = self.kept_lines(output);
        if !lines.is_empty() {
            log!(name; "{}", lines.join("\n"));
        }
    }
}

/// Doxygen complains about every tag its version does not know; a shared
/// Doxyfile template is expected to trigger a few of those.
pub const DOXYGEN_FILTER: FilterRule = FilterRule::new(&[
    "warning: ignoring unsupported tag",
    "warning: Tag '",
]);

/// Log command output, filtering known noise.
fn log_output(name: &str, output: &Output, filter: &'static FilterRule) -> Result<()> {
    if !output.status.success() {
        anyhow::bail!(format_error(name, output, filter));
    }

    // On success, only stderr (warnings) is worth showing
    let stderr = String::from_utf8_lossy(&output.stderr);
    filter.log(name, stderr.trim());

    Ok(())
}

/// Format command error message with filtering.
fn format_error(name: &str, output: &Output, filter: &'static FilterRule) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut msg = format!("Command `{name}` failed with {}", output.status);
    let lines = filter.kept_lines(&stderr);
    if !lines.is_empty() {
        msg.push('\n');
        msg.push_str(&lines.join("\n"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cmd_vec() {
        let cmd = to_cmd_vec(&["wsl".to_string(), "doxygen".to_string()]);
        assert_eq!(cmd, vec![OsString::from("wsl"), OsString::from("doxygen")]);
    }

    #[test]
    fn test_filter_args() {
        let args = [OsString::from("a"), OsString::from(""), OsString::from("b")];
        assert_eq!(filter_args(&args), vec![OsString::from("a"), OsString::from("b")]);
    }

    #[test]
    fn test_prepare_empty() {
        assert!(prepare(Path::new("."), &[], &[]).is_err());
    }

    #[test]
    fn test_prepare_valid() {
        let (name, command) = prepare(
            Path::new("/tmp"),
            &to_cmd_vec(&["doxygen".to_string()]),
            &[OsString::from("docs/Doxyfile")],
        )
        .unwrap();
        assert_eq!(name, "doxygen");
        assert_eq!(command.get_current_dir(), Some(Path::new("/tmp")));
        assert_eq!(command.get_args().collect::<Vec<_>>(), vec!["docs/Doxyfile"]);
    }

    #[test]
    fn test_locate_empty_command() {
        assert!(locate(&[]).is_err());
    }

    #[test]
    fn test_locate_missing_binary() {
        assert!(locate(&["doxbridge-no-such-binary".to_string()]).is_err());
    }

    #[test]
    fn test_doxygen_filter_skips_tag_warnings() {
        let output = "warning: ignoring unsupported tag `CLANG_ASSISTED_PARSING' at line 12\n\
                      \n\
                      warning: documented symbol `Foo' was not declared";
        let lines = DOXYGEN_FILTER.kept_lines(output);
        assert_eq!(lines, vec!["warning: documented symbol `Foo' was not declared"]);
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(strip_ansi("Start \x1b[1;33mYellow\x1b[0m End"), "Start Yellow End");
        assert_eq!(strip_ansi("Plain text"), "Plain text");
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_nonzero_exit_is_error() {
        let err = exec(
            Path::new("."),
            &to_cmd_vec(&["false".to_string()]),
            &[],
            &DOXYGEN_FILTER,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Command `false` failed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_macro_success() {
        let dir = tempfile::tempdir().unwrap();
        let output =
            crate::exec!(filter=&DOXYGEN_FILTER; dir.path(); &["true".to_string()];).unwrap();
        assert!(output.status.success());
    }
}

//! Command-line interface: argument parsing and dispatch.

pub mod args;
pub mod report;

pub use args::{CheckArgs, Cli, Commands, ListArgs};
pub use report::Reporter;

use crate::checker::RequirementChecker;
use crate::error::Result;
use crate::manifest::{self, Manifest};
use crate::status::CheckReport;
use std::path::PathBuf;

/// Routes parsed CLI arguments to command handlers.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher rooted at the given working directory.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Dispatch the parsed CLI to the right handler, returning the
    /// process exit code.
    ///
    /// # Errors
    ///
    /// Manifest errors and strict requirement failures propagate; the
    /// caller renders them and exits nonzero.
    pub fn dispatch(&self, cli: &Cli) -> Result<u8> {
        match &cli.command {
            Some(Commands::Check(check_args)) => self.run_check(cli, check_args),
            Some(Commands::List(_)) => self.run_list(cli),
            None => self.run_check(cli, &CheckArgs::default()),
        }
    }

    fn load_manifest(&self, cli: &Cli) -> Result<Manifest> {
        let path = manifest::resolve_path(cli.manifest.as_deref(), &self.cwd);
        tracing::debug!("Loading manifest from {}", path.display());
        Manifest::load(&path)
    }

    fn run_check(&self, cli: &Cli, args: &CheckArgs) -> Result<u8> {
        let manifest = self.load_manifest(cli)?;
        let reporter = Reporter::new(cli.quiet);
        let mut checker = RequirementChecker::new();

        let mut fulfilled = 0;
        let total = manifest.requirements.len();

        for requirement in &manifest.requirements {
            let mut requirement = requirement.clone();
            requirement.warn |= args.lenient;

            let (status, cached) = checker.lookup_or_evaluate(&requirement)?;
            reporter.line(
                &CheckReport {
                    name: requirement.name.clone(),
                    status: status.clone(),
                },
                requirement.warn,
            );

            // Strict failures abort here; lenient ones warn and count.
            if requirement.apply_policy(&status, !cached)? {
                fulfilled += 1;
            }
        }

        reporter.summary(fulfilled, total);
        Ok(u8::from(fulfilled != total))
    }

    fn run_list(&self, cli: &Cli) -> Result<u8> {
        let manifest = self.load_manifest(cli)?;
        let reporter = Reporter::new(cli.quiet);

        for requirement in &manifest.requirements {
            let marker = if requirement.warn { " (warn)" } else { "" };
            reporter.message(&format!(
                "{}: {}{}",
                requirement.name,
                requirement.rendered_command(),
                marker
            ));
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrereqError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn setup_manifest(contents: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(manifest::DEFAULT_MANIFEST), contents).unwrap();
        temp
    }

    fn cli(argv: &[&str]) -> Cli {
        Cli::parse_from(argv)
    }

    #[test]
    fn check_all_fulfilled_exits_zero() {
        let temp = setup_manifest(
            r#"
requirements:
  - name: Shell
    command: [sh, -c, "exit 0"]
"#,
        );
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let code = dispatcher.dispatch(&cli(&["prereq", "--quiet", "check"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn strict_failure_propagates_error() {
        let temp = setup_manifest(
            r#"
requirements:
  - name: Broken
    command: [sh, -c, "echo nope; exit 2"]
"#,
        );
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let err = dispatcher
            .dispatch(&cli(&["prereq", "--quiet", "check"]))
            .unwrap_err();
        assert!(matches!(err, PrereqError::RequirementFailed { .. }));
    }

    #[test]
    fn lenient_flag_aggregates_failures() {
        let temp = setup_manifest(
            r#"
requirements:
  - name: Broken
    command: [sh, -c, "exit 2"]
  - name: Shell
    command: [sh, -c, "exit 0"]
"#,
        );
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let code = dispatcher
            .dispatch(&cli(&["prereq", "--quiet", "check", "--lenient"]))
            .unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn warn_requirement_does_not_abort_strict_run() {
        let temp = setup_manifest(
            r#"
requirements:
  - name: Optional
    command: [definitely-not-a-real-binary-xyz]
    warn: true
  - name: Shell
    command: [sh, -c, "exit 0"]
"#,
        );
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let code = dispatcher.dispatch(&cli(&["prereq", "--quiet", "check"])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn missing_manifest_errors() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let err = dispatcher.dispatch(&cli(&["prereq", "check"])).unwrap_err();
        assert!(matches!(err, PrereqError::ManifestNotFound { .. }));
    }

    #[test]
    fn no_subcommand_defaults_to_check() {
        let temp = setup_manifest("requirements: []");
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let code = dispatcher.dispatch(&cli(&["prereq", "--quiet"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn list_exits_zero_without_running_commands() {
        // The listed command would fail if it ran; list must not run it.
        let temp = setup_manifest(
            r#"
requirements:
  - name: Broken
    command: [sh, -c, "exit 1"]
"#,
        );
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let code = dispatcher.dispatch(&cli(&["prereq", "--quiet", "list"])).unwrap();
        assert_eq!(code, 0);
    }
}

//! Per-language build/run command table and child-process execution
//!
//! The table is data, not control flow: adding a toolchain is a new row, not
//! a new branch. Commands are spawned with inherited stdio so their output
//! streams straight to the terminal.

use crate::error::Error;
use crate::registry::Language;
use colored::Colorize;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Build and run commands for one language's conventional toolchain
#[derive(Debug, Clone, Copy)]
pub struct Toolchain {
    pub language: Language,
    /// Install/build command, argv form
    pub build: &'static [&'static str],
    /// Run command, argv form
    pub run: &'static [&'static str],
}

/// Static toolchain table, one row per supported language
const TOOLCHAINS: &[Toolchain] = &[
    Toolchain {
        language: Language::Go,
        build: &["go", "mod", "tidy"],
        run: &["go", "run", "."],
    },
    Toolchain {
        language: Language::Node,
        build: &["npm", "install"],
        run: &["npm", "start"],
    },
    Toolchain {
        language: Language::Python,
        build: &["pip3", "install", "-r", "requirements.txt"],
        run: &["python3", "main.py"],
    },
];

/// Look up the toolchain for a language. Total: every language has a row.
pub fn for_language(language: Language) -> &'static Toolchain {
    TOOLCHAINS
        .iter()
        .find(|t| t.language == language)
        .unwrap_or_else(|| unreachable!("language {} missing from toolchain table", language))
}

/// Execute a toolchain's build step, then its run step, in `dir`.
///
/// A non-zero build exit aborts with `BuildFailed` carrying the child's exit
/// code; the run step is not attempted. A non-zero run exit surfaces as
/// `RunFailed`. Returns 0 when both steps succeed.
pub async fn run_toolchain(toolchain: &Toolchain, dir: &Path) -> Result<i32, Error> {
    println!(
        "{} {}",
        "Building:".dimmed(),
        toolchain.build.join(" ").yellow()
    );
    let status = exec(toolchain.build, dir).await?;
    if !status.success() {
        return Err(Error::BuildFailed(status.code().unwrap_or(1)));
    }

    println!(
        "{} {}",
        "Running:".dimmed(),
        toolchain.run.join(" ").yellow()
    );
    let status = exec(toolchain.run, dir).await?;
    if !status.success() {
        return Err(Error::RunFailed(status.code().unwrap_or(1)));
    }

    Ok(0)
}

/// Spawn one command with inherited stdio and wait for it
async fn exec(argv: &[&str], dir: &Path) -> Result<ExitStatus, Error> {
    let (program, args) = match argv.split_first() {
        Some(split) => split,
        None => return Err(Error::Io(std::io::Error::other("empty command"))),
    };

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_toolchain_row() {
        for language in [Language::Go, Language::Node, Language::Python] {
            let toolchain = for_language(language);
            assert_eq!(toolchain.language, language);
            assert!(!toolchain.build.is_empty());
            assert!(!toolchain.run.is_empty());
        }
    }

    #[test]
    fn go_toolchain_uses_conventional_commands() {
        let toolchain = for_language(Language::Go);
        assert_eq!(toolchain.build, ["go", "mod", "tidy"]);
        assert_eq!(toolchain.run, ["go", "run", "."]);
    }

    #[tokio::test]
    async fn build_failure_short_circuits_run() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = Toolchain {
            language: Language::Go,
            build: &["sh", "-c", "exit 7"],
            run: &["sh", "-c", "touch run-happened"],
        };

        let err = run_toolchain(&toolchain, tmp.path()).await.unwrap_err();
        match err {
            Error::BuildFailed(code) => assert_eq!(code, 7),
            other => panic!("expected BuildFailed, got {:?}", other),
        }
        assert!(!tmp.path().join("run-happened").exists());
    }

    #[tokio::test]
    async fn run_exit_code_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = Toolchain {
            language: Language::Node,
            build: &["true"],
            run: &["sh", "-c", "exit 5"],
        };

        let err = run_toolchain(&toolchain, tmp.path()).await.unwrap_err();
        match err {
            Error::RunFailed(code) => assert_eq!(code, 5),
            other => panic!("expected RunFailed, got {:?}", other),
        }
        assert_eq!(err_code(&toolchain, tmp.path()).await, 5);
    }

    async fn err_code(toolchain: &Toolchain, dir: &Path) -> i32 {
        run_toolchain(toolchain, dir).await.unwrap_err().exit_code()
    }

    #[tokio::test]
    async fn successful_build_and_run_return_zero() {
        let tmp = tempfile::tempdir().unwrap();
        let toolchain = Toolchain {
            language: Language::Python,
            build: &["sh", "-c", "touch built"],
            run: &["sh", "-c", "test -f built"],
        };

        assert_eq!(run_toolchain(&toolchain, tmp.path()).await.unwrap(), 0);
        assert!(tmp.path().join("built").exists());
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers: a throwaway state root with scripted fake versions.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Fake tool used for every installed version unless a test says otherwise.
///
/// `--version` prints the version, `fail` exits 3 with stderr, `sleep N`
/// sleeps, anything else is echoed back.
pub fn tool_script(version: &str) -> String {
    format!(
        r#"#!/bin/sh
case "$1" in
  --version) echo "tool {version}" ;;
  fail) echo "broken" >&2; exit 3 ;;
  sleep) sleep "$2" ;;
  *) echo "args: $*" ;;
esac
"#
    )
}

/// A `VERSUS_HOME` plus a separate working directory.
pub struct Home {
    root: TempDir,
    work: TempDir,
}

impl Home {
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            work: tempfile::tempdir().unwrap(),
        }
    }

    /// A home with the standard fake tool installed as each version.
    pub fn with_versions(versions: &[&str]) -> Self {
        let home = Self::empty();
        for version in versions {
            home.version(version, &tool_script(version));
        }
        home
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        self.work.path()
    }

    /// Install `script` as version `name`.
    pub fn version(&self, name: &str, script: &str) -> &Self {
        let path = self.root.path().join("versions").join(name).join("bin");
        write_executable(&path, script);
        self
    }

    /// Write a file relative to the working directory.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn versus(&self) -> CliBuilder {
        cli().env("VERSUS_HOME", self.root.path()).current_dir(self.work.path())
    }
}

pub fn write_executable(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// `versus` with color off and logging quiet.
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("versus").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("VERSUS_LOG").env_remove("VERSUS_BINARY");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    fn run(mut self) -> RunAssert {
        RunAssert { output: self.cmd.output().unwrap() }
    }

    /// Run and require exit status 0.
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(run.output.status.success(), "expected success\n{}", run.describe());
        run
    }

    /// Run and require a non-zero exit status.
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn describe(&self) -> String {
        format!("status: {:?}\nstdout:\n{}\nstderr:\n{}", self.output.status.code(), self.stdout(), self.stderr())
    }

    pub fn code_is(self, code: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(code), "{}", self.describe());
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.describe());
        self
    }
}

//! CmdStan compiler
//!
//! Implements `ModelCompiler` by running CmdStan's own build:
//! `make <model path without extension>` inside the CmdStan checkout.
//! The executable and intermediate C++ land next to the model file.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::ModelCompiler;
use crate::error::{BfgError, BfgResult};

/// Environment variable CmdStan itself uses to point at its install
pub const CMDSTAN_ENV: &str = "CMDSTAN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdStanCompiler {
    cmdstan_dir: PathBuf,
    make: String,
}

impl CmdStanCompiler {
    pub fn new(cmdstan_dir: impl Into<PathBuf>) -> Self {
        Self {
            cmdstan_dir: cmdstan_dir.into(),
            make: "make".to_string(),
        }
    }

    /// Use a different make program (e.g. `mingw32-make`)
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = make.into();
        self
    }

    /// Build from an optional configured path, failing if none is set
    pub fn from_config(cmdstan_dir: Option<&Path>, make: Option<&str>) -> BfgResult<Self> {
        let dir = cmdstan_dir.ok_or(BfgError::CompilerNotConfigured)?;
        let compiler = Self::new(dir);
        Ok(match make {
            Some(make) => compiler.with_make(make),
            None => compiler,
        })
    }

    /// The make target CmdStan expects for `model_file`
    pub fn make_target(model_file: &Path) -> BfgResult<PathBuf> {
        let absolute = std::path::absolute(model_file)?;
        let target = absolute.with_extension("");
        if cfg!(windows) {
            Ok(target.with_extension("exe"))
        } else {
            Ok(target)
        }
    }
}

impl ModelCompiler for CmdStanCompiler {
    fn compile(&self, model_file: &Path) -> BfgResult<()> {
        if !self.cmdstan_dir.is_dir() {
            return Err(BfgError::CompilerNotFound {
                path: self.cmdstan_dir.clone(),
            });
        }

        let target = Self::make_target(model_file)?;
        let output = Command::new(&self.make)
            .current_dir(&self.cmdstan_dir)
            .arg(&target)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(BfgError::CompileFailed {
                model: model_file.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn make_target_drops_extension() {
        let target = CmdStanCompiler::make_target(Path::new("/srv/models/demo/demo.stan")).unwrap();
        if cfg!(windows) {
            assert!(target.ends_with("demo.exe"));
        } else {
            assert_eq!(target, PathBuf::from("/srv/models/demo/demo"));
        }
    }

    #[test]
    fn make_target_is_absolute() {
        let target = CmdStanCompiler::make_target(Path::new("models/demo/demo.stan")).unwrap();
        assert!(target.is_absolute());
    }

    #[test]
    fn from_config_requires_a_path() {
        let err = CmdStanCompiler::from_config(None, None).unwrap_err();
        assert!(matches!(err, BfgError::CompilerNotConfigured));
    }

    #[test]
    fn from_config_applies_make_override() {
        let compiler =
            CmdStanCompiler::from_config(Some(Path::new("/opt/cmdstan")), Some("gmake")).unwrap();
        assert_eq!(compiler, CmdStanCompiler::new("/opt/cmdstan").with_make("gmake"));
    }

    #[test]
    fn missing_cmdstan_dir_is_reported() {
        let dir = tempdir().unwrap();
        let compiler = CmdStanCompiler::new(dir.path().join("nope"));

        let err = compiler.compile(&dir.path().join("demo.stan")).unwrap_err();

        assert!(matches!(err, BfgError::CompilerNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn successful_make_is_ok() {
        let dir = tempdir().unwrap();
        let compiler = CmdStanCompiler::new(dir.path()).with_make("true");

        assert!(compiler.compile(&dir.path().join("demo.stan")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_make_reports_exit_code() {
        let dir = tempdir().unwrap();
        let compiler = CmdStanCompiler::new(dir.path()).with_make("false");

        let err = compiler.compile(&dir.path().join("demo.stan")).unwrap_err();

        assert!(matches!(err, BfgError::CompileFailed { code: Some(1), .. }));
    }
}

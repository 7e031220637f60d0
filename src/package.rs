//! Icon container packaging
//!
//! The only platform-specific step of the pipeline. It sits behind the
//! [`Packager`] trait so callers and tests can swap the backend.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::{Error, Result};

/// Turns a populated iconset directory into a single icon container file.
pub trait Packager {
    /// Build `output` from `iconset_dir`, failing loudly on any problem.
    fn build(&self, iconset_dir: &Path, output: &Path) -> Result<()>;
}

/// Runs macOS `iconutil -c icns <iconset> -o <output>`.
#[derive(Debug, Clone)]
pub struct IconutilPackager {
    program: PathBuf,
}

impl IconutilPackager {
    pub fn new() -> Self {
        Self::with_program("iconutil")
    }

    /// Use a different executable that accepts the same arguments.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for IconutilPackager {
    fn default() -> Self {
        Self::new()
    }
}

impl Packager for IconutilPackager {
    fn build(&self, iconset_dir: &Path, output: &Path) -> Result<()> {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let program = self.program.display().to_string();
        debug!("running {program} -c icns {} -o {}", iconset_dir.display(), output.display());

        let out = Command::new(&self.program)
            .arg("-c")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|source| Error::PackagerSpawn {
                program: program.clone(),
                source,
            })?;

        if !out.status.success() {
            return Err(Error::PackagerFailed {
                program,
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }

        info!("packaged {}", output.display());
        Ok(())
    }
}

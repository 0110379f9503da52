//! External-process extraction with streamed progress lines.

use crate::error::{Error, Result};
use bdinstall_platform::command::Command;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::debug;

#[cfg(target_os = "windows")]
const EXTRACT_PROGRAM: &str = "7z.exe";
#[cfg(not(target_os = "windows"))]
const EXTRACT_PROGRAM: &str = "7z";

/// One archive-to-directory extraction job.
pub struct Zip {
    input: PathBuf,
    output: PathBuf,
}

impl Zip {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run `7z x` on the archive, feeding each stdout line to `progress`.
    ///
    /// Returns Ok only when the extractor exits with status zero.
    pub fn extract<F>(&self, mut progress: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        let program = which::which(EXTRACT_PROGRAM).map_err(|_| Error::ExtractorMissing)?;

        let mut child = Command::new(program.to_string_lossy().into_owned())
            .arg("x")
            .arg("-y")
            .arg(format!("-o{}", self.output.display()))
            .arg(&self.input)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(out) = child.stdout.take() {
            for line in BufReader::new(out).lines() {
                let line = line?;
                progress(&line);
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(Error::ExtractionFailed {
                path: self.input.clone(),
                status,
            });
        }

        debug!(archive = %self.input.display(), dest = %self.output.display(), "extraction complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_records_paths() {
        let zip = Zip::new("bd.zip", "out");
        assert_eq!(zip.input(), Path::new("bd.zip"));
        assert_eq!(zip.output(), Path::new("out"));
    }

    #[test]
    fn test_extract_program_name() {
        #[cfg(target_os = "windows")]
        assert_eq!(EXTRACT_PROGRAM, "7z.exe");
        #[cfg(not(target_os = "windows"))]
        assert_eq!(EXTRACT_PROGRAM, "7z");
    }

    #[test]
    fn test_extract_missing_archive_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let zip = Zip::new(tmp.path().join("no-such.zip"), tmp.path().join("out"));

        let mut lines = 0usize;
        let result = zip.extract(|_| lines += 1);

        // Either 7z is absent from the test machine or it reports a
        // non-zero status for the missing archive.
        match result {
            Err(Error::ExtractorMissing) => assert_eq!(lines, 0),
            Err(Error::ExtractionFailed { .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

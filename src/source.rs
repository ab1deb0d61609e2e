//! Where the raw table text comes from.

use crate::error::UpdateError;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Produces the raw text of the pasted country code table.
pub trait TableSource {
    fn read_table(&mut self) -> Result<String, UpdateError>;

    /// Short description used in log messages.
    fn describe(&self) -> String;
}

/// Reads the table from the system clipboard through an external utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardSource {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ClipboardSource {
    fn default() -> Self {
        Self {
            program: "xsel".to_string(),
            args: vec!["--clipboard".to_string(), "--output".to_string()],
        }
    }
}

impl TableSource for ClipboardSource {
    fn read_table(&mut self) -> Result<String, UpdateError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| UpdateError::ClipboardUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(UpdateError::ClipboardFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| UpdateError::ClipboardEncoding)
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            format!("clipboard (`{}`)", self.program)
        } else {
            format!("clipboard (`{} {}`)", self.program, self.args.join(" "))
        }
    }
}

/// Reads the table from a file, or from stdin when the path is `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.to_string_lossy() == "-"
    }
}

impl TableSource for FileSource {
    fn read_table(&mut self) -> Result<String, UpdateError> {
        let read_error = |source: io::Error| UpdateError::InputRead {
            path: self.path.clone(),
            source,
        };

        if self.is_stdin() {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(read_error)?;
            Ok(buf)
        } else {
            fs::read_to_string(&self.path).map_err(read_error)
        }
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn default_clipboard_is_xsel() {
        let source = ClipboardSource::default();
        assert_eq!(source.describe(), "clipboard (`xsel --clipboard --output`)");
    }

    #[test]
    fn missing_clipboard_utility_is_an_environment_error() {
        let mut source = ClipboardSource {
            program: "update-codes-no-such-clipboard-tool".to_string(),
            args: vec![],
        };

        match source.read_table() {
            Err(UpdateError::ClipboardUnavailable { program, .. }) => {
                assert_eq!(program, "update-codes-no-such-clipboard-tool");
            }
            other => panic!("expected ClipboardUnavailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn clipboard_output_is_captured() {
        let mut source = ClipboardSource {
            program: "printf".to_string(),
            args: vec!["Andorra  AD  AND  020\\n".to_string()],
        };
        assert_eq!(source.read_table().unwrap(), "Andorra  AD  AND  020\n");
    }

    #[cfg(unix)]
    #[test]
    fn failing_clipboard_utility_reports_status() {
        let mut source = ClipboardSource {
            program: "false".to_string(),
            args: vec![],
        };
        assert!(matches!(
            source.read_table(),
            Err(UpdateError::ClipboardFailed { .. })
        ));
    }

    #[test]
    fn file_source_reads_contents() {
        let file = assert_fs::NamedTempFile::new("table.txt").unwrap();
        file.write_str("Angola  AO  AGO  024\n").unwrap();

        let mut source = FileSource::new(file.path());
        assert_eq!(source.read_table().unwrap(), "Angola  AO  AGO  024\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let mut source = FileSource::new("does/not/exist.txt");
        let err = source.read_table().unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(FileSource::new("-").describe(), "stdin");
    }
}

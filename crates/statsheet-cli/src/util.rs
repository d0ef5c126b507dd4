use std::{
    fmt, fs,
    io::{self, BufWriter, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Where command results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Buffered writer for a command result.
pub struct Output {
    target: OutputTarget,
    writer: Box<dyn io::Write>,
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl Output {
    /// Opens `path` for writing, or standard output if no path is given.
    pub fn create(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                target: OutputTarget::Stdout,
                writer: Box::new(io::stdout().lock()),
            });
        };
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            target: OutputTarget::File(path),
            writer: Box::new(BufWriter::new(file)),
        })
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Runs `write` against the output and flushes it.
    ///
    /// `what` names the written content in error messages.
    pub fn write_with<F>(&mut self, what: &str, write: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut dyn io::Write) -> io::Result<()>,
    {
        write(&mut *self.writer)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to write {what} to {}", self.target))
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
        self.write_with("JSON", |writer| writeln!(writer, "{json}"))
    }
}

/// Read a whole text file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF-8
pub fn read_text_file<P>(file_kind: &str, path: P) -> anyhow::Result<String>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", file_kind, path.display()))
}

/// Read all of standard input
///
/// # Errors
///
/// Returns error if stdin cannot be read or is not valid UTF-8
pub fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read values from stdin")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("statsheet-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_target_display() {
        assert_eq!(OutputTarget::Stdout.to_string(), "stdout");
        assert_eq!(
            OutputTarget::File(PathBuf::from("out/result.json")).to_string(),
            "out/result.json"
        );
    }

    #[test]
    fn test_write_json_to_file() {
        let path = temp_path("json");
        let mut output = Output::create(Some(path.clone())).unwrap();
        assert_eq!(output.target(), &OutputTarget::File(path.clone()));
        output.write_json(&serde_json::json!({ "count": 2 })).unwrap();
        drop(output);

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(written, "{\n  \"count\": 2\n}\n");
    }

    #[test]
    fn test_write_error_names_target() {
        let path = temp_path("error");
        let mut output = Output::create(Some(path.clone())).unwrap();
        let err = output
            .write_with("report", |_| Err(io::Error::other("disk full")))
            .unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            err.to_string(),
            format!("Failed to write report to {}", path.display())
        );
    }

    #[test]
    fn test_create_in_missing_directory() {
        let err = Output::create(Some(PathBuf::from("/nonexistent/statsheet/out.json")))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to create output file"));
    }
}

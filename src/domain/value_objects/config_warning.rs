use std::path::PathBuf;

/// Unknown key found while reading a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the key path, e.g. `mdoe` for `build.mdoe`
    pub key: String,
    pub file: PathBuf,
    /// 1-based line of the first occurrence
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// `file:line`, or just the file when the line is unknown.
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.file.display(), line),
            None => self.file.display().to_string(),
        }
    }
}

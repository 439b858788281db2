use color_print::cprintln;
use thiserror::Error;

/// `line` fields are 0-based indices into the source lines.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate label: `{name}`")]
    DuplicateLabel { name: String, line: usize },

    #[error("Unresolved symbol: `{name}`")]
    UnresolvedSymbol { name: String, line: usize },

    #[error("Unknown computation: `{code}`")]
    UnknownComputation { code: String, line: usize },

    #[error("Unknown jump: `{code}`")]
    UnknownJump { code: String, line: usize },

    #[error("Malformed instruction: `{code}`")]
    MalformedInstruction { code: String, line: usize },

    #[error("Address out of range: `{value}` (max 32767)")]
    AddressOutOfRange { value: String, line: usize },

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(String, #[source] serde_yaml::Error),
}

impl Error {
    /// Source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::DuplicateLabel { line, .. }
            | Error::UnresolvedSymbol { line, .. }
            | Error::UnknownComputation { line, .. }
            | Error::UnknownJump { line, .. }
            | Error::MalformedInstruction { line, .. }
            | Error::AddressOutOfRange { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag<S: AsRef<str>>(&self, file: &str, lines: &[S]) {
        cprintln!("<red,bold>error</>: {}", self);

        let Some(line_idx) = self.line() else {
            return;
        };

        // line_idx is 0-based, display as 1-based
        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = lines.get(line_idx).map(|s| s.as_ref()).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_only_for_source_errors() {
        let err = Error::UnknownJump {
            code: "JUMP".into(),
            line: 2,
        };
        assert_eq!(err.line(), Some(2));
        err.print_diag("a.asm", &["@1", "D=A", "0;JUMP"]);

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::FileOpen("a.asm".into(), io);
        assert_eq!(err.line(), None);
        err.print_diag::<&str>("a.asm", &[]);
    }
}

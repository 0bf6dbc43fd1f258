use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::CorpusError;

// TreeTagger's UTF-8 tokenizer script, expected on PATH unless a script
// directory is given.
pub const TOKENIZER_SCRIPT: &str = "utf8-tokenize.perl";

// External line tokenizer invoked as a subprocess: raw text goes to the
// child's stdin, one token per stdout line comes back. Blocking, no retry;
// a failing process surfaces as TokenizerExecution.
pub struct ExternalTokenizer {
    command: PathBuf,
    args: Vec<String>,
}

impl ExternalTokenizer {
    pub fn new(
        script_dir: Option<&Path>,
        abbreviation_file: Option<&Path>,
        options: &[&str],
    ) -> Self {
        let command = match script_dir {
            Some(dir) => dir.join(TOKENIZER_SCRIPT),
            None => PathBuf::from(TOKENIZER_SCRIPT),
        };

        let mut tokenizer = Self::with_command(command);
        if let Some(file) = abbreviation_file {
            tokenizer.args.push("-a".to_string());
            tokenizer.args.push(file.display().to_string());
        }
        tokenizer
            .args
            .extend(options.iter().map(|opt| opt.to_string()));

        tokenizer
    }

    pub fn with_command<P: Into<PathBuf>>(command: P) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>, CorpusError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.execution_error(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| self.execution_error(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.execution_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.execution_error(format!("{} ({})", output.status, stderr.trim())));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_string).collect())
    }

    fn execution_error(&self, message: String) -> CorpusError {
        CorpusError::TokenizerExecution {
            command: self.command.display().to_string(),
            message,
        }
    }
}

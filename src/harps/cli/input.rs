use harps::prompt::{OffsetInput, PromptReply};
use std::io::{self, BufRead, IsTerminal, Write};

/// Reads the offset from stdin. EOF cancels, an empty line is "no offset".
pub struct StdinInput;

impl OffsetInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> PromptReply {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprint!("{}", prompt);
            let _ = io::stderr().flush();
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => PromptReply::Cancelled,
            Ok(_) => PromptReply::Line(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "could not read offset, cancelling");
                PromptReply::Cancelled
            }
        }
    }
}

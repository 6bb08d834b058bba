use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Prints `text` in text mode, or `json_value` pretty-printed in JSON mode.
    pub fn emit<T: Serialize + ?Sized>(&self, text: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => println!("{text}"),
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(json_value)?),
        }

        Ok(())
    }
}

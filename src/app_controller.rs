/*!
 * Application controller: host-side orchestration around the formatting
 * engine.
 *
 * The controller plays the role the capture/review UI plays in a browser
 * host: it supplies the transcript snapshot, owns the "nothing to format"
 * precondition, and delivers the formatted result. The engine itself is a
 * pure transform and is never invoked on an empty transcript.
 */

use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::formatter::{TranscriptFormatter, sanitize};

/// Main application controller
pub struct Controller {
    formatter: TranscriptFormatter,
}

impl Controller {
    /// Create a controller from application configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            formatter: TranscriptFormatter::from_config(&config.formatting),
        }
    }

    /// Format one transcript: read it from a file (or stdin), run the
    /// pipeline, and deliver the result to a file (or stdout).
    pub fn run(&self, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
        let raw = match &input {
            Some(path) => {
                if !FileManager::file_exists(path) {
                    return Err(AppError::File(format!("Not a file: {}", path.display())).into());
                }
                debug!("Reading transcript from {}", path.display());
                FileManager::read_text(path)?
            }
            None => {
                debug!("Reading transcript from stdin");
                FileManager::read_stdin()?
            }
        };

        let formatted = self.format_checked(&raw)?;

        match &output {
            Some(path) => {
                FileManager::write_text(path, &formatted)?;
                info!("Formatted transcript written to {}", path.display());
            }
            None => {
                println!("{}", formatted);
            }
        }

        Ok(())
    }

    /// Run the pipeline after enforcing the empty-transcript precondition.
    ///
    /// The check runs on the sanitized text: a transcript that is nothing
    /// but markup has nothing to format either.
    pub fn format_checked(&self, raw: &str) -> Result<String> {
        if sanitize::strip_markup(raw).trim().is_empty() {
            return Err(AppError::EmptyTranscript.into());
        }

        let formatted = self.formatter.format(raw);
        info!(
            "Formatted {} chars into {} chars, {} paragraph(s)",
            raw.len(),
            formatted.len(),
            formatted.split("\n\n").count()
        );
        Ok(formatted)
    }
}

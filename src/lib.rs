/*!
 * # voxscript - Voice Transcript Formatter
 *
 * A Rust library for turning raw voice-to-text transcripts into readable,
 * structured text.
 *
 * ## Features
 *
 * - Strip live-caption markup down to plain text
 * - Repair punctuation and capitalization from recognizer output
 * - Group sentences into paragraphs on length and transition words
 * - Detect ordinal/sequential phrasing and rewrite it as bulleted lists
 * - Injectable marker vocabularies for future localization
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `formatter`: The formatting pipeline and its stages:
 *   - `formatter::sanitize`: Markup stripping
 *   - `formatter::punctuate`: Punctuation and capitalization repair
 *   - `formatter::segment`: Paragraph segmentation
 *   - `formatter::lists`: List detection and bullet formatting
 * - `app_config`: Configuration management
 * - `app_controller`: CLI host orchestration
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod formatter;

// Re-export main types for easier usage
pub use app_config::{Config, FormattingConfig};
pub use errors::AppError;
pub use formatter::{TextStage, TranscriptFormatter, format_transcript};

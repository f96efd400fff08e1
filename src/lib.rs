// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the upload workflow.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the image host (the
//   multipart upload and the follow-up URL lookup).
// - `cli`: Defines the command-line arguments and the sequential driver
//   that uploads each file and collects the resulting URLs.
// - `error`: The error taxonomy for the upload workflow.
//
// Keeping this separation makes it possible to exercise the upload logic
// in integration tests without going through the binary.
pub mod api;
pub mod cli;
pub mod error;

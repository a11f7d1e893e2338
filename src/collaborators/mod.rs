// ABOUTME: External collaborators the wizard talks to: one-time codes, file selection, submission
// Each sits behind a trait so the TUI can run against demo or real backends

pub mod files;
pub mod otp;
pub mod submission;

use thiserror::Error;

pub use files::{FilePicker, FileSlot, LocalFilePicker};
pub use otp::{DemoOtpService, OtpAck, OtpService};
pub use submission::{AccountReceipt, HttpSubmissionClient, LocalSubmission, SubmissionClient};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
    #[error("Timed out after {0} ms")]
    Timeout(u64),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Rejected by server: {0}")]
    Rejected(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, CollaboratorError>;

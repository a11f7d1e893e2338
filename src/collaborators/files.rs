// ABOUTME: File selection for the logo, banner and verification document slots
// The wizard keeps only the returned handle; file contents are never read

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{CollaboratorError, Result};
use crate::wizard::FileHandle;

/// Every file-valued field in the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileSlot {
    StoreLogo,
    StoreBanner,
    BusinessLicense,
    IdentityProof,
    AddressProof,
    TaxCertificate,
}

impl FileSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::StoreLogo => "Store Logo",
            Self::StoreBanner => "Store Banner",
            Self::BusinessLicense => "Business License",
            Self::IdentityProof => "Identity Proof",
            Self::AddressProof => "Address Proof",
            Self::TaxCertificate => "Tax Certificate",
        }
    }

    /// Accepted formats as shown to the user; not enforced
    pub fn hint(&self) -> &'static str {
        match self {
            Self::StoreLogo => "PNG or JPG, 400x400 recommended",
            Self::StoreBanner => "PNG or JPG, 1200x300 recommended",
            Self::BusinessLicense | Self::TaxCertificate => "PDF, JPG or PNG",
            Self::IdentityProof => "Passport, driver's license or national ID",
            Self::AddressProof => "Utility bill or bank statement",
        }
    }
}

pub trait FilePicker {
    /// Resolve what the user typed into a handle. Blank input means no file.
    fn pick(&self, slot: FileSlot, input: &str) -> Result<Option<FileHandle>>;
}

/// Resolves paths on the local filesystem
#[derive(Debug, Clone, Default)]
pub struct LocalFilePicker {
    home: Option<PathBuf>,
}

impl LocalFilePicker {
    pub fn new() -> Self {
        Self { home: dirs::home_dir() }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    fn expand(&self, input: &str) -> PathBuf {
        match (input.strip_prefix("~/"), &self.home) {
            (Some(rest), Some(home)) => home.join(rest),
            _ if input == "~" => self.home.clone().unwrap_or_else(|| PathBuf::from(input)),
            _ => PathBuf::from(input),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl FilePicker for LocalFilePicker {
    fn pick(&self, slot: FileSlot, input: &str) -> Result<Option<FileHandle>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let path = self.expand(trimmed);
        if !path.exists() {
            return Err(CollaboratorError::FileNotFound(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(CollaboratorError::NotAFile(path.display().to_string()));
        }

        debug!(slot = slot.label(), path = %path.display(), "File attached");
        Ok(Some(FileHandle::new(display_name(&path), path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_blank_input_is_no_file() {
        let picker = LocalFilePicker::new();
        assert_eq!(picker.pick(FileSlot::StoreLogo, "   ").unwrap(), None);
    }

    #[test]
    fn test_existing_file_yields_handle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"not really a png").unwrap();

        let picker = LocalFilePicker::new();
        let handle = picker
            .pick(FileSlot::StoreLogo, path.to_str().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(handle.name, "logo.png");
        assert_eq!(handle.path, path);
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("license.pdf"), b"%PDF").unwrap();

        let picker = LocalFilePicker::with_home(dir.path());
        let handle = picker
            .pick(FileSlot::BusinessLicense, "~/license.pdf")
            .unwrap()
            .unwrap();
        assert_eq!(handle.path, dir.path().join("license.pdf"));
    }

    #[test]
    fn test_missing_and_directory_are_errors() {
        let dir = TempDir::new().unwrap();
        let picker = LocalFilePicker::new();

        let missing = dir.path().join("nope.pdf");
        assert!(matches!(
            picker.pick(FileSlot::TaxCertificate, missing.to_str().unwrap()),
            Err(CollaboratorError::FileNotFound(_))
        ));
        assert!(matches!(
            picker.pick(FileSlot::TaxCertificate, dir.path().to_str().unwrap()),
            Err(CollaboratorError::NotAFile(_))
        ));
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown operation '{key}'")]
    NotFound { key: String },
}

/// Identifies one of the supported document-producing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OperationKey {
    #[default]
    MergePdf,
    ImagesToPdf,
    MergeFiles,
}

impl OperationKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            OperationKey::MergePdf => "merge-pdf",
            OperationKey::ImagesToPdf => "images-to-pdf",
            OperationKey::MergeFiles => "merge-files",
        }
    }

    pub fn operation(self) -> &'static Operation {
        match self {
            OperationKey::MergePdf => &OPERATIONS[0],
            OperationKey::ImagesToPdf => &OPERATIONS[1],
            OperationKey::MergeFiles => &OPERATIONS[2],
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OperationKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_operation(s).map(|operation| operation.key)
    }
}

/// Picker-style file type filter, e.g. `.pdf,image/*`.
///
/// Matching is advisory: the remote service decides what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptFilter(&'static str);

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp", "ico", "avif",
];

impl AcceptFilter {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let extension = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return false,
        };
        self.0
            .split(',')
            .map(str::trim)
            .any(|token| match token {
                "image/*" => IMAGE_EXTENSIONS.contains(&extension.as_str()),
                _ => token
                    .strip_prefix('.')
                    .is_some_and(|wanted| wanted.eq_ignore_ascii_case(&extension)),
            })
    }
}

impl fmt::Display for AcceptFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub key: OperationKey,
    pub label: &'static str,
    /// Path relative to the service base address.
    pub endpoint: &'static str,
    pub accept: AcceptFilter,
    pub helper_text: &'static str,
}

impl Operation {
    /// Name of the PDF saved after a successful request, `<key>.pdf`.
    pub fn output_file_name(&self) -> String {
        format!("{}.pdf", self.key.as_str())
    }
}

static OPERATIONS: [Operation; 3] = [
    Operation {
        key: OperationKey::MergePdf,
        label: "Merge PDFs",
        endpoint: "/merge-pdf",
        accept: AcceptFilter(".pdf"),
        helper_text: "Upload multiple PDF files to merge in order.",
    },
    Operation {
        key: OperationKey::ImagesToPdf,
        label: "Images to PDF",
        endpoint: "/images-to-pdf",
        accept: AcceptFilter("image/*"),
        helper_text: "Upload images to convert into a single PDF.",
    },
    Operation {
        key: OperationKey::MergeFiles,
        label: "Merge PDFs + Images",
        endpoint: "/merge-files",
        accept: AcceptFilter(".pdf,image/*"),
        helper_text: "Upload any mix of PDFs and images to merge.",
    },
];

/// All supported operations in display order. The first entry is active on startup.
pub fn list_operations() -> &'static [Operation] {
    &OPERATIONS
}

pub fn find_operation(key: &str) -> Result<&'static Operation, CatalogError> {
    OPERATIONS
        .iter()
        .find(|operation| operation.key.as_str() == key)
        .ok_or_else(|| CatalogError::NotFound {
            key: key.to_string(),
        })
}

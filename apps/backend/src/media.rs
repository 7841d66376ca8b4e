//! Image references stored on profiles and posts.
//!
//! Only the relative path is persisted; where the bytes live is up to the
//! file-storage collaborator.

use crate::errors::domain::{DomainError, ValidationKind};

/// Column width of the image reference columns.
pub const MAX_IMAGE_PATH_LEN: usize = 100;

/// Kinds of uploaded images and the directory each one lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Avatar,
    PostImage,
}

impl ImageKind {
    pub fn upload_dir(self) -> &'static str {
        match self {
            ImageKind::Avatar => "avatars/",
            ImageKind::PostImage => "posts/",
        }
    }
}

/// Build the stored reference for an uploaded file, e.g. `avatars/me.png`.
///
/// `file_name` must be a bare name: no directories, no `..`.
pub fn upload_path(kind: ImageKind, file_name: &str) -> Result<String, DomainError> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidImagePath,
            "Image file name is empty",
        ));
    }
    if file_name.contains(['/', '\\']) || file_name == "." || file_name == ".." {
        return Err(DomainError::validation(
            ValidationKind::InvalidImagePath,
            format!("Image file name must not contain a path: {file_name}"),
        ));
    }

    let path = format!("{}{}", kind.upload_dir(), file_name);
    if path.len() > MAX_IMAGE_PATH_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidImagePath,
            format!("Image path exceeds {MAX_IMAGE_PATH_LEN} characters"),
        ));
    }
    Ok(path)
}

/// Check that a stored reference belongs under the directory for `kind`.
pub fn ensure_reference(kind: ImageKind, path: &str) -> Result<(), DomainError> {
    match path.strip_prefix(kind.upload_dir()) {
        Some(file_name) => upload_path(kind, file_name).map(|_| ()),
        None => Err(DomainError::validation(
            ValidationKind::InvalidImagePath,
            format!("Image reference must start with '{}'", kind.upload_dir()),
        )),
    }
}

//! Media storage and delivery URL handling.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::models::config::MediaConfig;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("media i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file name")]
    UnsupportedFileName,
}

/// Result of storing one uploaded file.
///
/// `url` duplicates `secure_url`; legacy clients read one or the other.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
    /// Absolute URL clients can fetch the file from.
    pub secure_url: String,
    /// Store-internal identifier, stable across renames of the base URL.
    pub public_id: String,
}

/// Destination for uploaded files.
pub trait MediaStore {
    /// Persist `bytes` under a name derived from `original_name`, returning
    /// where the file ended up.
    fn upload(&self, original_name: &str, bytes: &[u8]) -> Result<UploadedMedia, MediaError>;
}

/// Serial for same-millisecond uploads.
static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// Stores uploads on the local filesystem, served back as static files.
#[derive(Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
    base_url: String,
    folder: String,
}

impl LocalMediaStore {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            folder: config.folder.trim_matches('/').to_string(),
        }
    }

    /// Keeps only characters safe in both a path and a URL.
    fn sanitize_stem(stem: &str) -> String {
        stem.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    }

    fn unique_file_name(original_name: &str) -> Result<String, MediaError> {
        let path = Path::new(original_name);
        // A stem of pure separators sanitizes to hyphens only; such names
        // carry nothing usable, so they are rejected outright.
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| stem.chars().any(|c| c.is_ascii_alphanumeric()))
            .map(Self::sanitize_stem)
            .ok_or(MediaError::UnsupportedFileName)?;
        let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);
        let stamp = Utc::now().timestamp_millis();

        Ok(match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{stem}-{stamp}-{seq}.{ext}"),
            None => format!("{stem}-{stamp}-{seq}"),
        })
    }
}

impl MediaStore for LocalMediaStore {
    fn upload(&self, original_name: &str, bytes: &[u8]) -> Result<UploadedMedia, MediaError> {
        let file_name = Self::unique_file_name(original_name)?;
        let dir = self.root.join(&self.folder);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(&file_name), bytes)?;

        let public_id = format!("{}/{}", self.folder, file_name);
        let secure_url = format!("{}/{}", self.base_url, public_id);
        Ok(UploadedMedia {
            url: secure_url.clone(),
            secure_url,
            public_id,
        })
    }
}

/// Rewrites a stored image URL into a delivery URL with on-the-fly
/// transformation parameters.
///
/// The transformation segment goes right after the first `/upload/` path
/// element: `f_auto,q_auto`, then `w_{width}` and `q_{quality}` when given.
/// URLs without an `/upload/` element come back unchanged.
pub fn delivery_url(src: &str, width: Option<u32>, quality: Option<u8>) -> String {
    const MARKER: &str = "/upload/";
    let Some(index) = src.find(MARKER) else {
        return src.to_string();
    };

    let mut transformation = String::from("f_auto,q_auto");
    if let Some(width) = width {
        transformation.push_str(&format!(",w_{width}"));
    }
    if let Some(quality) = quality {
        transformation.push_str(&format!(",q_{quality}"));
    }

    let (head, tail) = src.split_at(index + MARKER.len());
    format!("{head}{transformation}/{tail}")
}

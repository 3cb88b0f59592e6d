//! Classifier artifact handling
//!
//! The artifact is read at startup so a missing or corrupt file is reported
//! the same way as a dataset problem. Nothing in the application runs
//! inference with it: only its size and serialization format are kept.

use std::path::{Path, PathBuf};

use nutriscan_core::prelude::*;

/// Serialization format detected from the artifact's leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Python pickle stream with an explicit protocol marker
    Pickle { protocol: u8 },
    /// joblib with zlib compression
    Zlib,
    Gzip,
    Bz2,
    Xz,
    Lzma,
}

impl ModelFormat {
    /// Identify the format, `None` if the header matches nothing known
    pub fn sniff(header: &[u8]) -> Option<ModelFormat> {
        match header {
            [0x80, protocol, ..] if (2..=5).contains(protocol) => Some(ModelFormat::Pickle {
                protocol: *protocol,
            }),
            [0x1F, 0x8B, ..] => Some(ModelFormat::Gzip),
            [b'B', b'Z', b'h', ..] => Some(ModelFormat::Bz2),
            [0xFD, b'7', b'z', b'X', b'Z', 0x00, ..] => Some(ModelFormat::Xz),
            [0x5D, 0x00, 0x00, ..] => Some(ModelFormat::Lzma),
            [0x78, 0x01 | 0x5E | 0x9C | 0xDA, ..] => Some(ModelFormat::Zlib),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelFormat::Pickle { protocol } => write!(f, "pickle v{}", protocol),
            ModelFormat::Zlib => write!(f, "joblib/zlib"),
            ModelFormat::Gzip => write!(f, "joblib/gzip"),
            ModelFormat::Bz2 => write!(f, "joblib/bz2"),
            ModelFormat::Xz => write!(f, "joblib/xz"),
            ModelFormat::Lzma => write!(f, "joblib/lzma"),
        }
    }
}

/// A loaded, opaque model artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub format: ModelFormat,
}

impl ModelArtifact {
    /// Human-readable size, e.g. "1.2 MB"
    pub fn size_display(&self) -> String {
        const KB: f64 = 1024.0;
        const MB: f64 = KB * 1024.0;
        let size = self.size_bytes as f64;
        if size >= MB {
            format!("{:.1} MB", size / MB)
        } else if size >= KB {
            format!("{:.1} KB", size / KB)
        } else {
            format!("{} B", self.size_bytes)
        }
    }
}

/// Read the artifact at `path` and check that it is a known serialization
pub fn load_model(path: &Path) -> Result<ModelArtifact> {
    if !path.exists() {
        return Err(Error::model_not_found(path));
    }

    let bytes = std::fs::read(path).context("Failed to read model artifact")?;
    if bytes.is_empty() {
        return Err(Error::model_malformed(path, "file is empty"));
    }

    let format = ModelFormat::sniff(&bytes)
        .ok_or_else(|| Error::model_malformed(path, "unrecognized serialization format"))?;

    info!(
        "Loaded model artifact {} ({}, {} bytes)",
        path.display(),
        format,
        bytes.len()
    );

    Ok(ModelArtifact {
        path: path.to_path_buf(),
        size_bytes: bytes.len() as u64,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_bytes(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(
            ModelFormat::sniff(&[0x80, 0x04, 0x95]),
            Some(ModelFormat::Pickle { protocol: 4 })
        );
        assert_eq!(ModelFormat::sniff(&[0x1F, 0x8B, 0x08]), Some(ModelFormat::Gzip));
        assert_eq!(ModelFormat::sniff(b"BZh91AY"), Some(ModelFormat::Bz2));
        assert_eq!(ModelFormat::sniff(&[0x78, 0x9C, 0x00]), Some(ModelFormat::Zlib));
        assert_eq!(
            ModelFormat::sniff(&[0xFD, b'7', b'z', b'X', b'Z', 0x00, 0x00]),
            Some(ModelFormat::Xz)
        );
        assert_eq!(ModelFormat::sniff(b"hello"), None);
        assert_eq!(ModelFormat::sniff(&[0x80, 0x09]), None);
    }

    #[test]
    fn test_load_pickle_artifact() {
        let file = write_bytes(&[0x80, 0x04, 0x95, 0x10, 0x00, 0x2E]);
        let model = load_model(file.path()).unwrap();
        assert_eq!(model.format, ModelFormat::Pickle { protocol: 4 });
        assert_eq!(model.size_bytes, 6);
        assert_eq!(model.size_display(), "6 B");
        assert_eq!(model.format.to_string(), "pickle v4");
    }

    #[test]
    fn test_missing_model_is_not_found() {
        let err = load_model(Path::new("/no/such/model.pkl")).unwrap_err();
        assert!(matches!(err, Error::ModelNotFound { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_empty_model_is_malformed() {
        let file = write_bytes(&[]);
        let err = load_model(file.path()).unwrap_err();
        assert!(matches!(err, Error::ModelMalformed { .. }));
    }

    #[test]
    fn test_garbage_model_is_malformed() {
        let file = write_bytes(b"not a model");
        let err = load_model(file.path()).unwrap_err();
        assert!(err.to_string().contains("unrecognized"));
    }

    #[test]
    fn test_size_display_units() {
        let mut model = ModelArtifact {
            path: PathBuf::from("model.pkl"),
            size_bytes: 2048,
            format: ModelFormat::Zlib,
        };
        assert_eq!(model.size_display(), "2.0 KB");
        model.size_bytes = 3 * 1024 * 1024;
        assert_eq!(model.size_display(), "3.0 MB");
    }
}

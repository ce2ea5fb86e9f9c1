//! Reading and writing encoded documents on disk.

use crate::codec::{self, DecodeOptions};
use crate::models::Custard;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Bytes written for `document`: indented with a trailing newline, or compact.
pub fn render(document: &Custard, pretty: bool) -> crate::Result<Vec<u8>> {
    if pretty {
        let mut bytes = codec::encode_pretty(document)?;
        bytes.push(b'\n');
        Ok(bytes)
    } else {
        codec::encode(document)
    }
}

/// Encodes `document` and writes it to `path` atomically.
///
/// Parent directories are created as needed. The bytes go to a temp file
/// next to the destination which is then renamed over it.
pub fn write(document: &Custard, path: &Path, pretty: bool) -> Result<()> {
    let bytes = render(document, pretty).context("Failed to encode document")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &bytes)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}

/// Reads and decodes the document at `path`.
pub fn read(path: &Path, options: &DecodeOptions) -> Result<Custard> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read document: {}", path.display()))?;
    codec::decode_with(&bytes, options)
        .with_context(|| format!("Failed to decode document: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presets::sample_custard;
    use crate::models::{InputStyle, Language};
    use crate::CustardError;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        let doc = sample_custard("disk", "Disk", Language::JaJp, InputStyle::Direct);

        write(&doc, &path, true).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        let loaded = read(&path, &DecodeOptions::default()).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_compact_has_no_newlines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        let doc = sample_custard("disk", "Disk", Language::JaJp, InputStyle::Direct);

        write(&doc, &path, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read(&dir.path().join("missing.json"), &DecodeOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read document"));
    }

    #[test]
    fn test_read_keeps_codec_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"metadata": {"custard_version": "9.9", "display_name": ""}}"#).unwrap();

        let err = read(&path, &DecodeOptions::default()).unwrap_err();
        let codec_err = err.downcast_ref::<CustardError>().unwrap();
        assert_eq!(codec_err.kind(), "unsupported_version");
    }
}

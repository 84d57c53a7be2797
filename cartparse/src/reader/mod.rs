//! Reading cart files from disk.
//!
//! Cart files are expected to be UTF-8, but exports from spreadsheet tools
//! are often Latin-1 or Windows-1252. Unless an encoding is forced through
//! [`ReaderOptions`], valid UTF-8 is taken as is; anything else has its
//! encoding detected with `chardet` and decoded with `encoding_rs`.

use std::path::Path;

use crate::error::{ReadError, ReadResult};
use crate::logs::log_warning;

/// Source of raw CSV text.
pub trait SourceReader {
    /// Read the whole document at `path`.
    fn read_source(&self, path: &Path) -> ReadResult<String>;
}

/// Reader options.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    /// Encoding label (e.g. `utf-8`, `windows-1252`). Auto-detected when `None`.
    pub encoding: Option<String>,
}

/// Reads cart files from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileReader {
    options: ReaderOptions,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReaderOptions) -> Self {
        Self { options }
    }
}

impl SourceReader for FileReader {
    fn read_source(&self, path: &Path) -> ReadResult<String> {
        let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match self.options.encoding.as_deref() {
            Some(label) => decode_forced(&bytes, label),
            None => Ok(decode_auto(&bytes)),
        }
    }
}

/// Decode bytes as UTF-8 when valid, otherwise with the detected encoding.
pub fn decode_auto(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => strip_bom(text.to_string()),
        Err(_) => {
            let encoding = detect_encoding(bytes);
            log_warning(format!("Content is not UTF-8, decoding as {}", encoding));
            decode_content(bytes, &encoding)
        }
    }
}

/// Read a cart file with encoding auto-detection.
pub fn read_file<P: AsRef<Path>>(path: P) -> ReadResult<String> {
    FileReader::new().read_source(path.as_ref())
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "iso-8859-15" | "latin-9" | "latin9" => "iso-8859-15".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes with a detected encoding name, falling back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        "iso-8859-15" | "latin-9" | "latin9" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    strip_bom(decoded)
}

/// Decode bytes with an explicitly requested encoding. Malformed input is an error.
pub fn decode_forced(bytes: &[u8], label: &str) -> ReadResult<String> {
    let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ReadError::Encoding(format!("unknown encoding '{}'", label)))?;

    let (decoded, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ReadError::Encoding(format!(
            "content is not valid {}",
            used.name()
        )));
    }
    Ok(strip_bom(decoded.into_owned()))
}

fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Product name,Price,Quantity\nMollis consequat,9.00,2").unwrap();

        let content = read_file(file.path()).unwrap();
        assert_eq!(content, "Product name,Price,Quantity\nMollis consequat,9.00,2");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(dir.path().join("absent.csv"));
        assert!(matches!(result, Err(ReadError::Io { .. })));
    }

    #[test]
    fn test_bom_is_stripped() {
        let decoded = decode_content(b"\xEF\xBB\xBFProduct name", "utf-8");
        assert_eq!(decoded, "Product name");

        let forced = decode_forced(b"\xEF\xBB\xBFProduct name", "utf-8").unwrap();
        assert_eq!(forced, "Product name");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Café" in ISO-8859-1
        let bytes: &[u8] = &[0x43, 0x61, 0x66, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Café");
    }

    #[test]
    fn test_latin1_and_latin9_differ() {
        // 0xBD is "½" in ISO-8859-1 and "œ" in ISO-8859-15
        let bytes: &[u8] = &[0x31, 0xBD];
        assert_eq!(decode_content(bytes, "iso-8859-1"), "1½");
        assert_eq!(decode_content(bytes, "iso-8859-15"), "1œ");
    }

    #[test]
    fn test_utf8_file_keeps_non_ascii() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Product name,Price,Quantity\nñ,9.00,2").unwrap();

        let content = read_file(file.path()).unwrap();
        assert_eq!(content, "Product name,Price,Quantity\nñ,9.00,2");
    }

    #[test]
    fn test_auto_decoding_falls_back_for_non_utf8() {
        // "Café" in ISO-8859-1 is not valid UTF-8
        let decoded = decode_auto(&[0x43, 0x61, 0x66, 0xE9]);
        assert!(decoded.starts_with("Caf"));
        assert_eq!(decoded.chars().count(), 4);

        assert_eq!(decode_auto("\u{feff}ñ".as_bytes()), "ñ");
    }

    #[test]
    fn test_forced_encoding_rejects_malformed_utf8() {
        let result = decode_forced(&[0x43, 0x61, 0x66, 0xE9], "utf-8");
        assert!(matches!(result, Err(ReadError::Encoding(_))));
    }

    #[test]
    fn test_forced_encoding_unknown_label() {
        let result = decode_forced(b"abc", "klingon");
        assert!(matches!(result, Err(ReadError::Encoding(_))));
    }

    #[test]
    fn test_forced_encoding_through_reader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x43, 0x61, 0x66, 0xE9]).unwrap();

        let reader = FileReader::with_options(ReaderOptions {
            encoding: Some("windows-1252".into()),
        });
        assert_eq!(reader.read_source(file.path()).unwrap(), "Café");
    }
}

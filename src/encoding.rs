//! Word-list source with encoding detection
//!
//! Opens the word list, detects its encoding and streams it as UTF-8 lines.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{FilterError, Result};

/// Bytes sampled from the head of the file for detection
const SAMPLE_SIZE: usize = 64 * 1024;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl EncodingInfo {
    fn exact(encoding: &'static Encoding) -> Self {
        Self {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        }
    }
}

/// Resolve a WHATWG label such as `utf-8` or `latin1`
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| FilterError::InvalidInput(format!("unknown encoding label '{}'", label)))
}

/// Guess the encoding of a byte sample.
///
/// `complete` is false when the sample is only the head of the file, so a
/// multi-byte sequence cut at the end is not counted as an error.
pub fn detect_encoding(sample: &[u8], complete: bool) -> EncodingInfo {
    if sample.is_empty() {
        return EncodingInfo::default();
    }

    if let Some(encoding) = detect_bom(sample) {
        return EncodingInfo::exact(encoding);
    }

    // ASCII and valid UTF-8 both decode correctly as UTF-8
    if is_utf8(sample, complete) {
        return EncodingInfo::exact(encoding_rs::UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(sample, complete);
    let encoding = detector.guess(None, true);

    let confidence = if encoding == encoding_rs::UTF_8 { 0.5 } else { 0.8 };

    EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    }
}

/// Valid UTF-8, allowing a truncated final sequence in a partial sample
fn is_utf8(sample: &[u8], complete: bool) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => !complete && e.error_len().is_none(),
    }
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    Encoding::for_bom(content).map(|(encoding, _)| encoding)
}

/// Streaming word-list reader.
///
/// Owns the open file; the handle is released when the source is dropped,
/// whether iteration finished or stopped on an error.
pub struct WordSource {
    reader: BufReader<DecodeReaderBytes<File, Vec<u8>>>,
    path: PathBuf,
    info: EncodingInfo,
    size: u64,
    line_buffer: String,
}

impl WordSource {
    /// Open `path`. The encoding is `forced` when given, otherwise detected
    /// from the first 64 KiB.
    pub fn open(path: &Path, forced: Option<&'static Encoding>) -> Result<Self> {
        let info = match forced {
            Some(encoding) => EncodingInfo::exact(encoding),
            None => {
                let mut sample = Vec::with_capacity(SAMPLE_SIZE);
                File::open(path)
                    .and_then(|f| f.take(SAMPLE_SIZE as u64).read_to_end(&mut sample))
                    .map_err(|e| FilterError::from_io(path, e))?;
                detect_encoding(&sample, sample.len() < SAMPLE_SIZE)
            }
        };

        let file = File::open(path).map_err(|e| FilterError::from_io(path, e))?;
        let size = file
            .metadata()
            .map_err(|e| FilterError::from_io(path, e))?
            .len();

        log::debug!(
            "Opened {:?} ({} bytes, encoding {}, confidence {:.1})",
            path,
            size,
            info.name,
            info.confidence
        );

        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(info.encoding))
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        Ok(Self {
            reader: BufReader::with_capacity(SAMPLE_SIZE, decoder),
            path: path.to_path_buf(),
            info,
            size,
            line_buffer: String::with_capacity(64),
        })
    }

    /// Get the detected encoding
    pub fn encoding(&self) -> &EncodingInfo {
        &self.info
    }

    /// Size of the file on disk
    pub fn size(&self) -> u64 {
        self.size
    }

}

impl Iterator for WordSource {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_line(&mut self.line_buffer) {
            Ok(0) => None,
            Ok(_) => {
                if self.line_buffer.contains(char::REPLACEMENT_CHARACTER) {
                    log::warn!("Encoding errors in line, using lossy conversion");
                }

                let line = self
                    .line_buffer
                    .trim_end_matches(|c: char| c == '\n' || c == '\r');
                Some(Ok(line.to_string()))
            }
            Err(e) => Some(Err(FilterError::from_io(&self.path, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn read_all(file: &NamedTempFile) -> Vec<String> {
        WordSource::open(file.path(), None)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_utf8_detection() {
        let info = detect_encoding("Hello, World!\nПривет мир!\n".as_bytes(), true);
        assert_eq!(info.name, "UTF-8");
    }

    #[test]
    fn test_empty_sample_defaults_to_utf8() {
        let info = detect_encoding(&[], true);
        assert_eq!(info.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_bom_detection() {
        let info = detect_encoding(&[0xFF, 0xFE, b'a', 0], true);
        assert_eq!(info.encoding, encoding_rs::UTF_16LE);
    }

    #[test]
    fn test_line_iterator() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "line1").unwrap();
        writeln!(file, "line2").unwrap();
        write!(file, "line3").unwrap();

        assert_eq!(read_all(&file), vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_crlf_and_bom_removed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFcat\r\nact\r\n").unwrap();

        assert_eq!(read_all(&file), vec!["cat", "act"]);
    }

    #[test]
    fn test_latin1_forced() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xE9\n").unwrap();

        let encoding = encoding_for_label("windows-1252").unwrap();
        let lines: Vec<String> = WordSource::open(file.path(), Some(encoding))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["café"]);
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert!(matches!(
            encoding_for_label("klingon"),
            Err(FilterError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_truncated_sample_still_utf8() {
        // Lead byte of 'é' is the last byte of the sample
        let mut sample = "xyz\n".repeat(16383).into_bytes();
        sample.extend_from_slice(b"xyz\xC3");
        assert_eq!(sample.len(), SAMPLE_SIZE);

        assert_eq!(detect_encoding(&sample, false).encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_legacy_bytes_not_utf8() {
        let info = detect_encoding(b"caf\xE9\nna\xEFve\n", true);
        assert_ne!(info.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_multibyte_char_across_sample_boundary() {
        let mut content = "xyz\n".repeat(16383);
        content.push_str("xyz");
        assert_eq!(content.len(), SAMPLE_SIZE - 1);
        content.push_str("é\nété\n");

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let source = WordSource::open(file.path(), None).unwrap();
        assert_eq!(source.encoding().encoding, encoding_rs::UTF_8);

        let lines: Vec<String> = source.collect::<Result<_>>().unwrap();
        assert_eq!(&lines[lines.len() - 2..], &["xyzé", "été"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordSource::open(&dir.path().join("wordlist_15k.txt"), None);
        assert!(matches!(result, Err(FilterError::FileNotFound { .. })));
    }

    #[test]
    fn test_size_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "dog\ngod\n").unwrap();

        let source = WordSource::open(file.path(), None).unwrap();
        assert_eq!(source.size(), 8);
    }
}

//! Character encoding conversion for input and output

use crate::error::CliError;
use encoding_rs::Encoding;

/// Look up an encoding by its WHATWG label (`utf-8`, `latin1`, `shift_jis`, ...)
pub fn resolve(label: &str) -> Result<&'static Encoding, CliError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CliError::UnknownEncoding(label.to_string()))
}

/// Decode input bytes, rejecting malformed sequences
///
/// A byte order mark matching `encoding` is removed.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &str) -> Result<String, CliError> {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(CliError::MalformedInput {
            path: path.to_string(),
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

/// Encode output text, rejecting characters the encoding cannot represent
///
/// UTF-16 labels produce UTF-8 output, as WHATWG encoders only exist for
/// ASCII-compatible encodings.
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>, CliError> {
    let (bytes, used, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(CliError::UnmappableOutput(used.name().to_string()));
    }
    if used != encoding {
        log::warn!(
            "{} output is not supported, writing {} instead",
            encoding.name(),
            used.name()
        );
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_labels() {
        assert_eq!(resolve("utf-8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("UTF8").unwrap(), encoding_rs::UTF_8);
        assert_eq!(resolve("latin1").unwrap(), encoding_rs::WINDOWS_1252);
        assert_eq!(resolve(" shift_jis ").unwrap(), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("klingon").unwrap_err();
        assert_eq!(err.to_string(), "Unknown encoding: klingon");
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let bytes = b"\xEF\xBB\xBFhello";
        assert_eq!(decode(bytes, encoding_rs::UTF_8, "in").unwrap(), "hello");
    }

    #[test]
    fn test_decode_latin1() {
        let bytes = b"caf\xE9";
        assert_eq!(
            decode(bytes, encoding_rs::WINDOWS_1252, "in").unwrap(),
            "café"
        );
    }

    #[test]
    fn test_decode_malformed_utf8() {
        let err = decode(b"bad \xFF byte", encoding_rs::UTF_8, "in.txt").unwrap_err();
        assert_eq!(err.to_string(), "Malformed UTF-8 input in in.txt");
    }

    #[test]
    fn test_encode_latin1() {
        let bytes = encode("café", encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(bytes, b"caf\xE9");
    }

    #[test]
    fn test_encode_unmappable() {
        let err = encode("日本", encoding_rs::WINDOWS_1252).unwrap_err();
        assert!(err.to_string().contains("windows-1252"));
    }

    #[test]
    fn test_encode_utf16_falls_back_to_utf8() {
        let bytes = encode("hi", encoding_rs::UTF_16LE).unwrap();
        assert_eq!(bytes, b"hi");
    }
}

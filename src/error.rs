/// Ingestion error taxonomy. Every variant degrades to the banner path;
/// nothing here ever aborts the preview or reaches the host as a fault.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("failed to read the file stream: {0}")]
    Stream(#[from] std::io::Error),

    #[error("file is not valid UTF-8 text")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("file is too large to preview ({size} bytes, limit {limit})")]
    TooLarge { size: usize, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = PreviewError::TooLarge { size: 10, limit: 5 };
        assert_eq!(e.to_string(), "file is too large to preview (10 bytes, limit 5)");

        let e: PreviewError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(e.to_string().contains("failed to read"));
        assert!(e.to_string().contains("boom"));
    }

    #[test]
    fn test_decode_from_bytes() {
        let e: PreviewError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(e.to_string().contains("not valid UTF-8"));
    }
}

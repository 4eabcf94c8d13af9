/// Stream ingestion: read a host-supplied sequential stream to completion and
/// decode it as UTF-8. Any mid-read error discards everything; there is no
/// partial-content recovery.

use crate::error::PreviewError;
use std::io::Read;

const CHUNK_SIZE: usize = 8192;

/// Read the whole stream, enforcing `max_size`, and decode as UTF-8 text.
pub fn read_svg(mut reader: impl Read, max_size: usize) -> Result<String, PreviewError> {
    let mut data = Vec::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                data.extend_from_slice(&buf[..n]);
                if data.len() > max_size {
                    log::warn!(
                        "input exceeds {} byte preview limit, refusing",
                        max_size
                    );
                    return Err(PreviewError::TooLarge { size: data.len(), limit: max_size });
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(String::from_utf8(data)?)
}

/// Stream whose every read fails, standing in for a host stream that throws.
#[derive(Debug, Default)]
pub struct FailingStream;

impl Read for FailingStream {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "stream read failed"))
    }
}

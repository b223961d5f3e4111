//! Container format detection by file signature.
//!
//! Dispatch between container backends is signature-based only: the file
//! extension never decides the *container* format (extensions only matter
//! for per-entry image filtering). `.cbz`, `.cbr`, `.cb7` and `.cbt` files
//! are therefore opened correctly even when renamed.

use std::io::{Read, Seek, SeekFrom};

use crate::{Error, Result};

/// Detected container format of an archive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    /// ZIP archive (cbz).
    Zip,
    /// RAR archive, version 4 (cbr).
    Rar,
    /// RAR archive, version 5+ (cbr).
    Rar5,
    /// 7z archive (cb7).
    SevenZip,
    /// TAR archive (cbt).
    Tar,
    /// gzip-compressed tar.
    Gzip,
    /// bzip2-compressed tar.
    Bzip2,
    /// xz-compressed tar.
    Xz,
    /// Zstandard-compressed tar.
    Zstd,
}

impl ContainerFormat {
    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            ContainerFormat::Zip => "ZIP",
            ContainerFormat::Rar => "RAR",
            ContainerFormat::Rar5 => "RAR5",
            ContainerFormat::SevenZip => "7-Zip",
            ContainerFormat::Tar => "TAR",
            ContainerFormat::Gzip => "gzip",
            ContainerFormat::Bzip2 => "bzip2",
            ContainerFormat::Xz => "XZ",
            ContainerFormat::Zstd => "Zstandard",
        }
    }

    /// Returns true for compression wrappers (the payload is a tar stream).
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            ContainerFormat::Gzip
                | ContainerFormat::Bzip2
                | ContainerFormat::Xz
                | ContainerFormat::Zstd
        )
    }
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Known container signatures, longest-prefix first where prefixes overlap.
const SIGNATURES: &[(&[u8], ContainerFormat)] = &[
    // RAR5: 'R' 'a' 'r' '!' 0x1A 0x07 0x01 0x00. Must precede RAR4,
    // which is a strict prefix of it.
    (
        &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
        ContainerFormat::Rar5,
    ),
    // RAR4: 'R' 'a' 'r' '!' 0x1A 0x07 0x00
    (
        &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00],
        ContainerFormat::Rar,
    ),
    // 7z: '7' 'z' 0xBC 0xAF 0x27 0x1C
    (
        &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
        ContainerFormat::SevenZip,
    ),
    // ZIP: 'P' 'K' 0x03 0x04 (local file header)
    (&[0x50, 0x4B, 0x03, 0x04], ContainerFormat::Zip),
    // ZIP: 'P' 'K' 0x05 0x06 (empty archive)
    (&[0x50, 0x4B, 0x05, 0x06], ContainerFormat::Zip),
    // XZ: 0xFD '7' 'z' 'X' 'Z' 0x00
    (&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], ContainerFormat::Xz),
    // Zstd: 0x28 0xB5 0x2F 0xFD
    (&[0x28, 0xB5, 0x2F, 0xFD], ContainerFormat::Zstd),
    // gzip: 0x1F 0x8B
    (&[0x1F, 0x8B], ContainerFormat::Gzip),
    // bzip2: 'B' 'Z' 'h'
    (&[0x42, 0x5A, 0x68], ContainerFormat::Bzip2),
];

/// TAR USTAR magic at offset 257.
const TAR_USTAR_SIGNATURE: &[u8] = b"ustar";

/// Detects the container format by examining magic bytes.
///
/// The reader position is restored before returning, so the caller can hand
/// the same reader to the selected backend.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] when no known signature matches.
pub fn detect<R: Read + Seek>(reader: &mut R) -> Result<ContainerFormat> {
    let start_pos = reader.stream_position()?;

    let mut header = [0u8; 16];
    let bytes_read = reader.read(&mut header)?;

    for (signature, format) in SIGNATURES {
        if bytes_read >= signature.len() && header.starts_with(signature) {
            reader.seek(SeekFrom::Start(start_pos))?;
            return Ok(*format);
        }
    }

    // TAR has no leading magic; USTAR archives carry "ustar" at offset 257.
    if bytes_read >= 16 {
        reader.seek(SeekFrom::Start(start_pos + 257))?;
        let mut tar_magic = [0u8; 5];
        if read_fully(reader, &mut tar_magic)? && tar_magic == *TAR_USTAR_SIGNATURE {
            reader.seek(SeekFrom::Start(start_pos))?;
            return Ok(ContainerFormat::Tar);
        }
    }

    reader.seek(SeekFrom::Start(start_pos))?;
    Err(Error::unsupported(
        "no known container signature (zip, rar, 7z, tar, gzip, bzip2, xz, zstd)",
    ))
}

/// Reads until `buf` is full or EOF; returns true if it was filled.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn detect_bytes(data: &[u8]) -> Result<ContainerFormat> {
        detect(&mut Cursor::new(data))
    }

    #[test]
    fn test_detect_zip_signature() {
        let data = [0x50, 0x4B, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::Zip);
    }

    #[test]
    fn test_detect_empty_zip_signature() {
        let data = [0x50, 0x4B, 0x05, 0x06, 0, 0, 0, 0];
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::Zip);
    }

    #[test]
    fn test_detect_rar4_signature() {
        let data = [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00, 0x00];
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::Rar);
    }

    #[test]
    fn test_detect_rar5_signature() {
        let data = [0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00];
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::Rar5);
    }

    #[test]
    fn test_detect_7z_signature() {
        let data = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04];
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::SevenZip);
    }

    #[test]
    fn test_detect_wrapper_signatures() {
        assert_eq!(
            detect_bytes(&[0x1F, 0x8B, 0x08, 0, 0, 0, 0, 0]).unwrap(),
            ContainerFormat::Gzip
        );
        assert_eq!(
            detect_bytes(&[0x42, 0x5A, 0x68, 0x39, 0, 0, 0, 0]).unwrap(),
            ContainerFormat::Bzip2
        );
        assert_eq!(
            detect_bytes(&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, 0, 0]).unwrap(),
            ContainerFormat::Xz
        );
        assert_eq!(
            detect_bytes(&[0x28, 0xB5, 0x2F, 0xFD, 0, 0, 0, 0]).unwrap(),
            ContainerFormat::Zstd
        );
    }

    #[test]
    fn test_detect_tar_ustar() {
        let mut data = vec![0u8; 512];
        data[0] = b'f'; // some filename byte
        data[257..262].copy_from_slice(b"ustar");
        assert_eq!(detect_bytes(&data).unwrap(), ContainerFormat::Tar);
    }

    #[test]
    fn test_unknown_signature_is_an_error() {
        let data = [0u8; 64];
        assert!(matches!(
            detect_bytes(&data),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_short_file_is_an_error() {
        assert!(detect_bytes(&[0x50]).is_err());
    }

    #[test]
    fn test_reader_position_restored() {
        let data = [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, 0x00, 0x04];
        let mut cursor = Cursor::new(&data);
        cursor.seek(SeekFrom::Start(2)).unwrap();
        let _ = detect(&mut cursor);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_wrapper_classification() {
        assert!(ContainerFormat::Gzip.is_wrapper());
        assert!(ContainerFormat::Zstd.is_wrapper());
        assert!(!ContainerFormat::Zip.is_wrapper());
        assert!(!ContainerFormat::Tar.is_wrapper());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format!("{}", ContainerFormat::SevenZip), "7-Zip");
        assert_eq!(format!("{}", ContainerFormat::Rar5), "RAR5");
    }
}

//! SWF header sniffing. This intentionally stops at the three-byte
//! signature: the point is to reject HTML error pages and truncated
//! downloads, not to guarantee the file actually plays.

/// The three compression variants of the format share a fixed signature:
/// `FWS` uncompressed, `CWS` zlib, `ZWS` LZMA.
pub const SIGNATURES: [[u8; 3]; 3] = [*b"FWS", *b"CWS", *b"ZWS"];

/// A real SWF header (signature, version, file length) is 8 bytes.
const MIN_HEADER_LEN: usize = 8;

pub fn is_valid_swf(data: &[u8]) -> bool {
    if data.len() < MIN_HEADER_LEN {
        return false;
    }
    SIGNATURES.iter().any(|sig| data[..3] == sig[..])
}

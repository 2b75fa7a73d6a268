// crates/sokopack-core/src/checksum.rs

use crate::encode::EncodedLevel;

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Content id of an encoded level (truncated BLAKE3 of the packed bytes).
pub fn level_id_16(level: &EncodedLevel) -> [u8; 16] {
    blake3_16(level.as_bytes())
}

pub fn level_id_hex(level: &EncodedLevel) -> String {
    hex16(&level_id_16(level))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

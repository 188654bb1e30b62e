/// Shifts every byte up by one, wrapping `0xFF` around to `0x00`.
///
/// This is how LXNAV stores its FLARMNET database files. Multi-byte UTF-8
/// sequences are shifted like any other byte.
pub fn encode(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b.wrapping_add(1)).collect()
}

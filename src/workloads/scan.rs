//! Sequential scan of a large static buffer.

use std::hint::black_box;

/// Size of [`BIG_DATA`]: 8 MiB.
pub const BIG_DATA_LEN: usize = 8 * 1024 * 1024;

/// Value stored in the first byte of [`BIG_DATA`]; every other byte is zero.
pub const BIG_DATA_MARKER: u8 = 42;

/// Process-wide read-only buffer scanned by [`static_scan`].
pub static BIG_DATA: [u8; BIG_DATA_LEN] = big_data();

const fn big_data() -> [u8; BIG_DATA_LEN] {
    let mut data = [0u8; BIG_DATA_LEN];
    data[0] = BIG_DATA_MARKER;
    data
}

/// Sum every byte of `buf`.
pub fn buffer_sum(buf: &[u8]) -> u64 {
    buf.iter().map(|&b| u64::from(b)).sum()
}

/// Sum every byte of [`BIG_DATA`].
pub fn static_scan() -> u64 {
    // Keep the compiler from folding the scan of a constant buffer.
    buffer_sum(black_box(&BIG_DATA[..]))
}

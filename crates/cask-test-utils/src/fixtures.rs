//! Element generators.

/// A deterministic `width`-byte element derived from `seed`.
///
/// Every byte depends on both the seed and its position. Seeds less than
/// 251 apart differ in every byte, so a misplaced or truncated copy shows.
pub fn pattern(seed: usize, width: usize) -> Vec<u8> {
    (0..width)
        .map(|i| (seed.wrapping_mul(31).wrapping_add(i.wrapping_mul(7)) % 251) as u8)
        .collect()
}

/// `count` consecutive patterns starting at seed 0.
pub fn patterns(count: usize, width: usize) -> Vec<Vec<u8>> {
    (0..count).map(|seed| pattern(seed, width)).collect()
}

use crate::bitboard::BitboardExt;

/// Pops and returns the least-significant set bit's index from `bb`.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> u8 {
    bb.pop_lsb()
}

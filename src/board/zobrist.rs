//! Zobrist-style keys used only to derive the pawn-structure hash.
//!
//! The full engine this core was lifted out of also folds side-to-move,
//! castling rights and the en-passant file into its hash for transposition
//! lookups; none of that is needed here since this crate never stores
//! positions in a table keyed on the *whole* position, only on pawn
//! placement (spec.md's pawn-structure cache). Keeping just the piece keys
//! for pawns (and, for completeness, all piece types, in case a caller wants
//! a stronger key) avoids dragging in castling/en-passant bookkeeping that
//! has no consumer in this crate.

use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};

#[cfg(feature = "deterministic_zobrist")]
const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

fn make_zobrist_rng() -> StdRng {
    #[cfg(feature = "deterministic_zobrist")]
    {
        StdRng::seed_from_u64(ZOBRIST_SEED)
    }
    #[cfg(not(feature = "deterministic_zobrist"))]
    {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        StdRng::from_seed(seed)
    }
}

pub struct ZobristKeys {
    /// `[color][piece][square]`, color 0 = White, 1 = Black, piece 0..=5 = P,N,B,R,Q,K.
    pub piece: [[[u64; 64]; 6]; 2],
}

pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_keys(make_zobrist_rng()))
}

fn generate_keys(mut rng: StdRng) -> ZobristKeys {
    #[inline]
    fn non_zero(r: &mut StdRng) -> u64 {
        let mut v = r.next_u64();
        while v == 0 {
            v = r.next_u64();
        }
        v
    }

    let mut keys = ZobristKeys {
        piece: [[[0u64; 64]; 6]; 2],
    };

    for c in 0..2 {
        for p in 0..6 {
            for sq in 0..64 {
                keys.piece[c][p][sq] = non_zero(&mut rng);
            }
        }
    }
    keys
}

/// Hashes pawn placement only (both colors). Equal pawn hash implies equal
/// pawn structure, per spec.md's invariant — this is a pure function of the
/// two pawn bitboards.
pub fn pawn_hash(white_pawns: u64, black_pawns: u64) -> u64 {
    let keys = zobrist_keys();
    let mut hash = 0u64;

    let mut wp = white_pawns;
    while wp != 0 {
        let sq = wp.trailing_zeros() as usize;
        hash ^= keys.piece[0][0][sq];
        wp &= wp - 1;
    }

    let mut bp = black_pawns;
    while bp != 0 {
        let sq = bp.trailing_zeros() as usize;
        hash ^= keys.piece[1][0][sq];
        bp &= bp - 1;
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_hash_is_deterministic_within_a_process() {
        let h1 = pawn_hash(0x0000_0000_0000_FF00, 0x00FF_0000_0000_0000);
        let h2 = pawn_hash(0x0000_0000_0000_FF00, 0x00FF_0000_0000_0000);
        assert_eq!(h1, h2);
    }

    #[test]
    fn pawn_hash_distinguishes_different_structures() {
        let h1 = pawn_hash(0x0000_0000_0000_FF00, 0x00FF_0000_0000_0000);
        let h2 = pawn_hash(0x0000_0000_0001_FE00, 0x00FF_0000_0000_0000);
        assert_ne!(h1, h2);
    }
}

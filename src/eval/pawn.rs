//! Pawn-structure evaluator and its direct-mapped hash cache (spec.md §4.2).

use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};

const PAWN_HASH_SIZE: usize = 16_384;

const PASSED_BONUS: [i32; 8] = [0, 10, 15, 25, 40, 60, 90, 0];
const ISOLATED_PENALTY: i32 = -15;
const CONNECTED_BONUS: i32 = 8;
const DOUBLED_PENALTY: i32 = -10;

/// A process-wide, direct-mapped pawn-hash table: 16384 `(hash, score)`
/// slots. Lookups/stores are two independent relaxed-atomic writes per
/// spec.md §5 — a torn entry can only manifest as a spurious miss (hash
/// mismatch) or a spurious hit with a stale score, both explicitly
/// tolerated by spec.md's concurrency model. No lock is taken.
struct PawnHashTable {
    hashes: Box<[AtomicU64]>,
    scores: Box<[AtomicI32]>,
}

impl PawnHashTable {
    fn new() -> Self {
        let hashes = (0..PAWN_HASH_SIZE).map(|_| AtomicU64::new(0)).collect();
        let scores = (0..PAWN_HASH_SIZE).map(|_| AtomicI32::new(0)).collect();
        PawnHashTable { hashes, scores }
    }

    #[inline]
    fn probe(&self, hash: u64) -> Option<i32> {
        let idx = (hash as usize) % PAWN_HASH_SIZE;
        // Stored hash of 0 with an actual key of 0 is indistinguishable from
        // "empty slot"; this only costs a spurious recompute once in 2^64.
        let stored = self.hashes[idx].load(Ordering::Relaxed);
        if stored == hash {
            Some(self.scores[idx].load(Ordering::Relaxed))
        } else {
            None
        }
    }

    #[inline]
    fn store(&self, hash: u64, score: i32) {
        let idx = (hash as usize) % PAWN_HASH_SIZE;
        self.scores[idx].store(score, Ordering::Relaxed);
        self.hashes[idx].store(hash, Ordering::Relaxed);
    }
}

static PAWN_HASH_TABLE: Lazy<PawnHashTable> = Lazy::new(PawnHashTable::new);

#[cfg(feature = "eval_stats")]
pub static PAWN_CACHE_HITS: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
#[cfg(feature = "eval_stats")]
pub static PAWN_CACHE_MISSES: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Forces the pawn-hash table to exist. Idempotent, safe to call any number
/// of times or not at all — the table zero-initializes lazily on first use
/// either way, satisfying spec.md §6's contract for `pawn_hash_init`.
pub fn pawn_hash_init() {
    Lazy::force(&PAWN_HASH_TABLE);
}

/// White-minus-Black pawn-structure score, through the pawn-hash cache.
pub fn evaluate_pawn_structure(board: &Board) -> i32 {
    let hash = board.pawn_hash;

    if let Some(score) = PAWN_HASH_TABLE.probe(hash) {
        #[cfg(feature = "eval_stats")]
        PAWN_CACHE_HITS.fetch_add(1, Ordering::Relaxed);
        return score;
    }
    #[cfg(feature = "eval_stats")]
    PAWN_CACHE_MISSES.fetch_add(1, Ordering::Relaxed);

    let wp = board.pieces(Piece::Pawn, Color::White);
    let bp = board.pieces(Piece::Pawn, Color::Black);
    let score = evaluate_side(wp, bp, Color::White) - evaluate_side(bp, wp, Color::Black);

    PAWN_HASH_TABLE.store(hash, score);
    score
}

/// Scores `own` pawns against `enemy` pawns for `color`, from that side's
/// own perspective (caller negates for Black).
fn evaluate_side(own: u64, enemy: u64, color: Color) -> i32 {
    let mut score = 0;
    let mut file_counts = [0u32; 8];

    let mut iter = own;
    while iter != 0 {
        let sq = iter.pop_lsb();
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        file_counts[file as usize] += 1;

        let advancement = if color == Color::White { rank } else { 7 - rank };

        if is_passed(enemy, file, rank, color) {
            score += PASSED_BONUS[advancement as usize];
        }

        if !has_neighbor_file_pawn(own, file) {
            score += ISOLATED_PENALTY;
        }

        if is_connected(own, file, rank, color) {
            score += CONNECTED_BONUS;
        }
    }

    for count in file_counts {
        if count > 1 {
            score += (count as i32 - 1) * DOUBLED_PENALTY;
        }
    }

    score
}

fn has_neighbor_file_pawn(own: u64, file: i32) -> bool {
    let mut mask = 0u64;
    if file > 0 {
        mask |= crate::attacks::file_mask((file - 1) as u8);
    }
    if file < 7 {
        mask |= crate::attacks::file_mask((file + 1) as u8);
    }
    (own & mask) != 0
}

fn is_passed(enemy: u64, file: i32, rank: i32, color: Color) -> bool {
    let mut files = crate::attacks::file_mask(file as u8);
    if file > 0 {
        files |= crate::attacks::file_mask((file - 1) as u8);
    }
    if file < 7 {
        files |= crate::attacks::file_mask((file + 1) as u8);
    }

    let ahead_ranks: u64 = match color {
        Color::White => (rank + 1..8).map(|r| crate::attacks::rank_mask(r as u8)).fold(0, |a, b| a | b),
        Color::Black => (0..rank).map(|r| crate::attacks::rank_mask(r as u8)).fold(0, |a, b| a | b),
    };

    (enemy & files & ahead_ranks) == 0
}

fn is_connected(own: u64, file: i32, rank: i32, color: Color) -> bool {
    let support_rank = match color {
        Color::White => rank - 1,
        Color::Black => rank + 1,
    };
    if !(0..8).contains(&support_rank) {
        return false;
    }
    let mut support = 0u64;
    if file > 0 {
        support |= 1u64 << (support_rank * 8 + (file - 1));
    }
    if file < 7 {
        support |= 1u64 << (support_rank * 8 + (file + 1));
    }
    (own & support) != 0
}

//! Static position evaluator (spec.md §4 and §9): composes six
//! sub-evaluators into one signed centipawn score, White minus Black, with
//! a two-stage lazy cutoff.

mod bishop;
mod king;
mod knight;
pub mod material;
mod pawn;
mod queen;
mod rook;

use crate::board::{Board, Piece};

pub use pawn::pawn_hash_init;

/// Above this magnitude the position is already so lopsided that piece
/// activity can't change the verdict; only material + PST is computed.
const LAZY_MATERIAL_CUTOFF: i32 = 1000;
/// Below this magnitude the position is close enough that piece activity
/// (knights/bishops/rooks/queens) is worth computing in full.
const LAZY_ACTIVITY_THRESHOLD: i32 = 500;

#[cfg(feature = "eval_stats")]
pub mod stats {
    use std::sync::atomic::{AtomicU64, Ordering};

    pub static MATERIAL_CUTOFFS: AtomicU64 = AtomicU64::new(0);
    pub static ACTIVITY_SKIPS: AtomicU64 = AtomicU64::new(0);

    pub fn snapshot() -> (u64, u64) {
        (
            MATERIAL_CUTOFFS.load(Ordering::Relaxed),
            ACTIVITY_SKIPS.load(Ordering::Relaxed),
        )
    }
}

/// Material value of `piece` under the material-sum convention (king = 0).
/// See `see::see_piece_value` for the SEE-only king = 10000 convention.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    material::material_value(piece)
}

/// spec.md §4.8's lazy-evaluation composition:
/// ```text
/// score = material_plus_pst(b)
/// if |score| > 1000: return score
/// score += pawn_structure(b)
/// if |score| < 500: score += knights + bishops + rooks + queens
/// score += kings(b)
/// return score
/// ```
pub fn evaluate(board: &Board) -> i32 {
    let mut score = material::material_plus_pst(board);
    if score.abs() > LAZY_MATERIAL_CUTOFF {
        #[cfg(feature = "eval_stats")]
        stats::MATERIAL_CUTOFFS.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        return score;
    }

    score += pawn::evaluate_pawn_structure(board);

    if score.abs() < LAZY_ACTIVITY_THRESHOLD {
        score += knight::evaluate_knights(board);
        score += bishop::evaluate_bishops(board);
        score += rook::evaluate_rooks(board);
        score += queen::evaluate_queens(board);
    } else {
        #[cfg(feature = "eval_stats")]
        stats::ACTIVITY_SKIPS.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    }

    score += king::evaluate_kings(board);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn startpos_evaluates_to_zero() {
        let b = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(evaluate(&b), 0);
    }

    #[test]
    fn knight_on_d5_matches_seed_scenario_exactly() {
        // 320 material + 20 PST + 62 knight (8 moves * 4 + 30 outpost) = 402.
        let b = Board::from_str("8/8/8/3N4/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate(&b), 402);
    }

    #[test]
    fn lone_pawn_on_e6_matches_seed_scenario_pawn_structure_component() {
        let b = Board::from_str("8/8/4P3/8/8/8/8/8 w - - 0 1").unwrap();
        let full = evaluate(&b);
        // material_plus_pst for a lone pawn on e6 is just its material + PST;
        // the remainder of the full score is the pawn-structure component,
        // which spec.md pins at 45 (60 passed-bonus - 15 isolated-penalty).
        let base = material::material_plus_pst(&b);
        assert_eq!(full - base, 45);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let b = Board::from_str("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
        assert_eq!(evaluate(&b), evaluate(&b));
    }

    #[test]
    fn lopsided_material_short_circuits_to_pure_material_plus_pst() {
        // Two extra queens blow well past the 1000 cutoff; the returned
        // score must equal material_plus_pst exactly (no pawn/piece terms
        // added on top).
        let b = Board::from_str("4k3/8/8/8/8/8/8/2QQK3 w - - 0 1").unwrap();
        let expected = material::material_plus_pst(&b);
        assert!(expected.abs() > LAZY_MATERIAL_CUTOFF);
        assert_eq!(evaluate(&b), expected);
    }

    #[test]
    fn color_mirror_negates_full_evaluation() {
        let white =
            Board::from_str("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        let black =
            Board::from_str("rnbqkb1r/pppp1ppp/5n2/4p3/4P3/2N5/PPPP1PPP/R1BQKBNR b KQkq - 2 3")
                .unwrap();
        assert_eq!(evaluate(&white), -evaluate(&black));
    }
}

//! Bishop pair, mobility, bad-bishop and fianchetto evaluation (spec.md §4.4).

use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::square::Square;
use once_cell::sync::Lazy;

const BISHOP_PAIR_BONUS: i32 = 50;
const BAD_BISHOP_PENALTY: i32 = -8;
const FIANCHETTO_BONUS: i32 = 10;
const BISHOP_MOBILITY_MULTIPLIER: i32 = 3;

/// Per-square mobility table by ring-from-edge: edge squares = 7, one
/// square in = 9, two squares in = 11, central = 13.
static BISHOP_MOBILITY_TABLE: Lazy<[i32; 64]> = Lazy::new(|| {
    let mut table = [0i32; 64];
    for sq in 0..64usize {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let ring = ring_distance(file, rank);
        table[sq] = match ring {
            0 => 7,
            1 => 9,
            2 => 11,
            _ => 13,
        };
    }
    table
});

fn ring_distance(file: i32, rank: i32) -> i32 {
    file.min(7 - file).min(rank).min(7 - rank)
}

fn is_fianchetto_square(sq: Square, color: Color) -> bool {
    let name = sq.to_string();
    match color {
        Color::White => name == "b2" || name == "g2",
        Color::Black => name == "b7" || name == "g7",
    }
}

/// White-minus-Black bishop score.
pub fn evaluate_bishops(board: &Board) -> i32 {
    evaluate_side(board, Color::White) - evaluate_side(board, Color::Black)
}

fn evaluate_side(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let own_pawns = board.pieces(Piece::Pawn, color);

    let mut bishops = board.pieces(Piece::Bishop, color);
    let bishop_count = bishops.count_ones();
    if bishop_count >= 2 {
        score += BISHOP_PAIR_BONUS;
    }

    while bishops != 0 {
        let idx = bishops.pop_lsb();
        let sq = Square::from_index(idx);

        score += BISHOP_MOBILITY_TABLE[idx as usize] * BISHOP_MOBILITY_MULTIPLIER;

        let same_color_pawns = if sq.is_light() {
            own_pawns & light_squares()
        } else {
            own_pawns & !light_squares()
        };
        score += BAD_BISHOP_PENALTY * same_color_pawns.count_ones() as i32;

        if is_fianchetto_square(sq, color) {
            score += FIANCHETTO_BONUS;
        }
    }

    score
}

fn light_squares() -> u64 {
    let mut mask = 0u64;
    for sq in 0..64u8 {
        if Square::from_index(sq).is_light() {
            mask.set_bit(sq);
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn bishop_pair_outscores_single_bishop() {
        let pair = Board::from_str("8/8/8/8/8/8/8/2B2B2 w - - 0 1").unwrap();
        let single = Board::from_str("8/8/8/8/8/8/8/2B5 w - - 0 1").unwrap();
        assert!(evaluate_bishops(&pair) > evaluate_bishops(&single));
    }

    #[test]
    fn fianchettoed_bishop_gets_bonus() {
        let fianchetto = Board::from_str("8/8/8/8/8/8/1B6/8 w - - 0 1").unwrap();
        let plain = Board::from_str("8/8/8/8/8/8/2B5/8 w - - 0 1").unwrap();
        let diff = evaluate_bishops(&fianchetto) - evaluate_bishops(&plain);
        assert!(diff >= FIANCHETTO_BONUS - 4 && diff <= FIANCHETTO_BONUS + 4);
    }

    #[test]
    fn bad_bishop_penalized_by_same_color_pawns() {
        let blocked = Board::from_str("8/8/8/3P4/8/1P6/8/2B5 w - - 0 1").unwrap();
        let clear = Board::from_str("8/8/8/8/8/8/8/2B5 w - - 0 1").unwrap();
        assert!(evaluate_bishops(&blocked) < evaluate_bishops(&clear));
    }

    #[test]
    fn color_mirror_negates_bishop_score() {
        let white = Board::from_str("8/8/8/8/8/8/8/2B2B2 w - - 0 1").unwrap();
        let black = Board::from_str("2b2b2/8/8/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate_bishops(&white), -evaluate_bishops(&black));
    }
}

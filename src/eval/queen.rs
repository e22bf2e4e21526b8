//! Queen evaluation: the heaviest sub-evaluator (spec.md §4.6) — early
//! development, safety, mobility, pins, batteries, centralization and
//! piece-attack pressure.

use crate::attacks;
use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::square::Square;

const EARLY_DEVELOPMENT_PENALTY: i32 = -30;

const ATTACKER_PENALTY_PAWN: i32 = -40;
const ATTACKER_PENALTY_MINOR: i32 = -25;
const LOW_SAFE_ESCAPE_PENALTY: i32 = -60;
const SAFE_ESCAPE_THRESHOLD: u32 = 3;

const MOBILITY_BASE_WEIGHT: i32 = 1;
const MOBILITY_CENTRAL_WEIGHT: i32 = 2;
const MOBILITY_SAFE_WEIGHT: i32 = 1;
const LOW_MOBILITY_THRESHOLD: u32 = 4;
const LOW_MOBILITY_PENALTY: i32 = -20;

const KING_PIN_BONUS: i32 = 30;
const OTHER_PIN_BONUS: i32 = 20;
const EXTRA_PIN_BONUS: i32 = 15;

const ROOK_BATTERY_ADJACENT: i32 = 15;
const ROOK_BATTERY_DISTANT: i32 = 10;
const BISHOP_BATTERY_ADJACENT: i32 = 12;
const BISHOP_BATTERY_DISTANT: i32 = 10;

const CENTRAL_QUEEN_BONUS: i32 = 10;
const NEAR_CENTRAL_QUEEN_BONUS: i32 = 5;

const MULTI_ATTACK_BONUS: i32 = 15;
const KING_ZONE_ATTACK_BONUS: i32 = 20;
const MULTI_ATTACK_THRESHOLD: usize = 2;

/// White-minus-Black queen term.
pub fn evaluate_queens(board: &Board) -> i32 {
    evaluate_side(board, Color::White) - evaluate_side(board, Color::Black)
}

fn evaluate_side(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let occ = board.occupied();
    let own_occ = board.occupancy(color);
    let enemy = color.opposite();
    let enemy_king = board.king_square(enemy);

    let mut queens = board.pieces(Piece::Queen, color);
    while queens != 0 {
        let idx = queens.pop_lsb();
        let sq = Square::from_index(idx);

        score += early_development(board, sq, color);
        score += safety(board, sq, color);
        score += mobility(board, idx, occ, own_occ, color);
        score += pins(board, sq, color);
        score += batteries(board, sq, color);
        score += centralization(sq);
        score += piece_attacks(board, idx, color, enemy_king);
    }

    score
}

fn early_development(board: &Board, sq: Square, color: Color) -> i32 {
    let back_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    if sq.rank() as i32 == back_rank {
        return 0;
    }

    let minor_home_squares: [&str; 4] = match color {
        Color::White => ["b1", "c1", "f1", "g1"],
        Color::Black => ["b8", "c8", "f8", "g8"],
    };
    let undeveloped = minor_home_squares
        .iter()
        .filter(|s| {
            let home = Square::from_str_unchecked(s);
            matches!(
                board.piece_at(home),
                Some((c, Piece::Knight | Piece::Bishop)) if c == color
            )
        })
        .count();

    if undeveloped >= 2 {
        EARLY_DEVELOPMENT_PENALTY
    } else {
        0
    }
}

fn safety(board: &Board, sq: Square, color: Color) -> i32 {
    let mut score = 0;
    let enemy = color.opposite();
    let attackers = attacks::attackers_to(board, sq, enemy);

    let mut pawn_attacks = false;
    let mut minor_attacks = false;
    let mut remaining = attackers;
    while remaining != 0 {
        let idx = remaining.pop_lsb();
        match board.piece_type_at(Square::from_index(idx)) {
            Some(Piece::Pawn) => pawn_attacks = true,
            Some(Piece::Knight) | Some(Piece::Bishop) => minor_attacks = true,
            _ => {}
        }
    }
    if pawn_attacks {
        score += ATTACKER_PENALTY_PAWN;
    }
    if minor_attacks {
        score += ATTACKER_PENALTY_MINOR;
    }

    let own_occ = board.occupancy(color);
    let occ = board.occupied();
    let moves = attacks::queen_attacks(sq.index() as usize, occ) & !own_occ;
    let mut safe_count = 0u32;
    let mut iter = moves;
    while iter != 0 {
        let idx = iter.pop_lsb();
        let target = Square::from_index(idx);
        if attacks::attackers_to(board, target, enemy) == 0 {
            safe_count += 1;
        }
    }
    if safe_count < SAFE_ESCAPE_THRESHOLD {
        score += LOW_SAFE_ESCAPE_PENALTY;
    }

    score
}

fn mobility(board: &Board, idx: u8, occ: u64, own_occ: u64, color: Color) -> i32 {
    let targets = attacks::queen_attacks(idx as usize, occ) & !own_occ;
    let count = targets.count_ones();

    let central_targets = targets & CENTRAL_MASK;

    let enemy_pawns = board.pieces(Piece::Pawn, color.opposite());
    let enemy_pawn_attacks = match color.opposite() {
        Color::White => enemy_pawns.shift_ne() | enemy_pawns.shift_nw(),
        Color::Black => enemy_pawns.shift_se() | enemy_pawns.shift_sw(),
    };
    let safe_targets = targets & !enemy_pawn_attacks;

    let mut score = MOBILITY_BASE_WEIGHT * count as i32
        + MOBILITY_CENTRAL_WEIGHT * central_targets.count_ones() as i32
        + MOBILITY_SAFE_WEIGHT * safe_targets.count_ones() as i32;

    if count < LOW_MOBILITY_THRESHOLD {
        score += LOW_MOBILITY_PENALTY;
    }
    score
}

const CENTRAL_MASK: u64 = {
    let mut m = 0u64;
    let mut f = 2;
    while f <= 5 {
        let mut r = 2;
        while r <= 5 {
            m |= 1u64 << (r * 8 + f);
            r += 1;
        }
        f += 1;
    }
    m
};

/// A queen ray pins the first enemy piece it meets if exactly one more enemy
/// piece — a rook, knight, bishop or the king — sits behind it on the same
/// ray with nothing in between.
fn pins(board: &Board, sq: Square, color: Color) -> i32 {
    let enemy = color.opposite();
    let occ = board.occupied();

    let directions: [(i32, i32); 8] = [
        (1, 0), (-1, 0), (0, 1), (0, -1),
        (1, 1), (1, -1), (-1, 1), (-1, -1),
    ];

    let mut pin_bonuses: Vec<i32> = Vec::new();
    for (df, dr) in directions {
        let Some(pinned_sq) = first_piece_on_ray(sq, df, dr, occ) else {
            continue;
        };
        if board.color_at(pinned_sq) != Some(enemy) {
            continue;
        }
        let Some(behind) = first_piece_on_ray(pinned_sq, df, dr, occ) else {
            continue;
        };
        if board.color_at(behind) != Some(enemy) {
            continue;
        }
        match board.piece_type_at(behind) {
            Some(Piece::King) => pin_bonuses.push(KING_PIN_BONUS),
            Some(Piece::Rook) | Some(Piece::Knight) | Some(Piece::Bishop) => {
                pin_bonuses.push(OTHER_PIN_BONUS)
            }
            _ => {}
        }
    }

    if pin_bonuses.is_empty() {
        return 0;
    }

    let mut score: i32 = pin_bonuses.iter().sum();
    if pin_bonuses.len() >= 2 {
        score += EXTRA_PIN_BONUS * (pin_bonuses.len() - 1) as i32;
    }
    score
}

fn first_piece_on_ray(from: Square, df: i32, dr: i32, occ: u64) -> Option<Square> {
    let mut file = from.file() as i32 + df;
    let mut rank = from.rank() as i32 + dr;
    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let sq = Square::make(file as u8, rank as u8);
        if occ.test_bit(sq.index()) {
            return Some(sq);
        }
        file += df;
        rank += dr;
    }
    None
}

fn batteries(board: &Board, sq: Square, color: Color) -> i32 {
    let occ = board.occupied();
    let mut score = 0;

    let orth_dirs: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    for (df, dr) in orth_dirs {
        if let Some(piece_sq) = first_piece_on_ray(sq, df, dr, occ) {
            if board.color_at(piece_sq) == Some(color)
                && board.piece_type_at(piece_sq) == Some(Piece::Rook)
            {
                let adjacent = attacks::between(sq, piece_sq) == 0;
                score += if adjacent {
                    ROOK_BATTERY_ADJACENT
                } else {
                    ROOK_BATTERY_DISTANT
                };
            }
        }
    }

    let diag_dirs: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
    for (df, dr) in diag_dirs {
        if let Some(piece_sq) = first_piece_on_ray(sq, df, dr, occ) {
            if board.color_at(piece_sq) == Some(color)
                && board.piece_type_at(piece_sq) == Some(Piece::Bishop)
            {
                let adjacent = attacks::between(sq, piece_sq) == 0;
                score += if adjacent {
                    BISHOP_BATTERY_ADJACENT
                } else {
                    BISHOP_BATTERY_DISTANT
                };
            }
        }
    }

    score
}

fn centralization(sq: Square) -> i32 {
    let file = sq.file() as i32;
    let rank = sq.rank() as i32;
    if (3..=4).contains(&file) && (3..=4).contains(&rank) {
        CENTRAL_QUEEN_BONUS
    } else if (2..=5).contains(&file) && (2..=5).contains(&rank) {
        NEAR_CENTRAL_QUEEN_BONUS
    } else {
        0
    }
}

fn piece_attacks(board: &Board, idx: u8, color: Color, enemy_king: Square) -> i32 {
    let occ = board.occupied();
    let enemy_occ = board.opponent_occupancy(color);
    let targets = attacks::queen_attacks(idx as usize, occ) & enemy_occ;

    let mut score = 0;
    if targets.count_ones() as usize >= MULTI_ATTACK_THRESHOLD {
        score += MULTI_ATTACK_BONUS;
    }

    let king_zone = attacks::king_attacks(enemy_king.index() as usize) | (1u64 << enemy_king.index());
    if targets & king_zone != 0 {
        score += KING_ZONE_ATTACK_BONUS;
    }

    score
}

impl Square {
    /// Convenience for constructing a known-valid algebraic square literal
    /// inside this module without threading a `Result` through call sites.
    fn from_str_unchecked(s: &str) -> Square {
        use std::str::FromStr;
        Square::from_str(s).expect("hardcoded square literal is always valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn centralized_queen_outscores_corner_queen() {
        let central = Board::from_str("8/8/8/3Q4/8/8/8/8 w - - 0 1").unwrap();
        let corner = Board::from_str("8/8/8/8/8/8/8/Q7 w - - 0 1").unwrap();
        assert!(evaluate_queens(&central) > evaluate_queens(&corner));
    }

    #[test]
    fn undefended_queen_under_pawn_attack_is_penalized() {
        let attacked = Board::from_str("8/8/8/3Q4/4p3/8/8/8 w - - 0 1").unwrap();
        let safe = Board::from_str("8/8/8/3Q4/8/8/8/8 w - - 0 1").unwrap();
        assert!(evaluate_queens(&attacked) < evaluate_queens(&safe));
    }

    #[test]
    fn queen_pinning_knight_to_king_scores_positive_pin_bonus() {
        let b = Board::from_str("4k3/8/4n3/8/4Q3/8/8/8 w - - 0 1").unwrap();
        let sq = Square::from_str("e4").unwrap();
        assert!(pins(&b, sq, Color::White) > 0);
    }

    #[test]
    fn rook_queen_battery_scores_positive() {
        let b = Board::from_str("4k3/8/8/8/4Q3/8/8/4R3 w - - 0 1").unwrap();
        let sq = Square::from_str("e4").unwrap();
        assert!(batteries(&b, sq, Color::White) > 0);
    }

    #[test]
    fn color_mirror_negates_queen_score() {
        let white = Board::from_str("8/8/8/3Q4/8/8/8/8 w - - 0 1").unwrap();
        let black = Board::from_str("8/8/8/3q4/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(evaluate_queens(&white), -evaluate_queens(&black));
    }
}

use citadel_eval::board::Board;
use citadel_eval::see;
use citadel_eval::square::Square;
use std::str::FromStr;

fn fen(f: &str) -> Board {
    Board::from_str(f).expect("valid FEN")
}

fn sq(s: &str) -> Square {
    Square::from_str(s).expect("valid square")
}

#[test]
fn see_non_capture_is_zero() {
    let b = fen("8/8/8/8/8/8/4P3/8 w - - 0 1");
    assert_eq!(see(&b, sq("e2"), sq("e4")), 0);
}

#[test]
fn see_single_attacker_wins_full_captured_value() {
    let b = fen("8/8/8/4p3/8/8/3Q4/8 w - - 0 1");
    assert_eq!(see(&b, sq("d2"), sq("e5")), 100);
}

#[test]
fn see_pawn_takes_pawn_defended_by_pawn_nets_zero() {
    // d4xe5, e5 defended by f6: pawn-for-pawn trade, net 0.
    let b = fen("8/8/5p2/4p3/3P4/8/8/8 w - - 0 1");
    assert_eq!(see(&b, sq("d4"), sq("e5")), 0);
}

#[test]
fn queen_takes_defended_pawn_sees_minus_800() {
    let b = fen("4k3/5p2/8/4p3/8/8/4Q3/4K3 w - - 0 1");
    assert_eq!(see(&b, sq("e2"), sq("e5")), -800);
}

#[test]
fn queen_takes_undefended_pawn_sees_100() {
    let b = fen("4k3/8/8/4p3/8/8/4Q3/4K3 w - - 0 1");
    assert_eq!(see(&b, sq("e2"), sq("e5")), 100);
}

//! 駒種別の移動先生成

use super::tables::{
    palace_diagonal_neighbors, palace_diagonal_rays, ray, LeaperPath, DIAGONAL, ELEPHANT_PATHS,
    HORSE_PATHS, ORTHOGONAL, PALACE_STEPS,
};
use crate::board::{in_own_palace, palace::palace_of, Board};
use crate::rules::Rules;
use crate::types::{PieceType, Side, Square};

/// 着地できる升か（空き、または相手の駒）
#[inline]
fn can_land(board: &Board, to: Square, side: Side) -> bool {
    !board.piece_on(to).belongs_to(side)
}

/// `from` にある `side` の駒の移動先を `out` に追加する
///
/// 駒が無い、または `side` の駒でなければ何も追加しない。
/// 将の安全確認はここでは行わない。
pub(crate) fn generate_destinations(
    board: &Board,
    from: Square,
    side: Side,
    rules: &Rules,
    out: &mut Vec<Square>,
) {
    let piece = board.piece_on(from);
    if !piece.belongs_to(side) {
        return;
    }
    let Some(piece_type) = piece.piece_type() else {
        return;
    };

    match piece_type {
        PieceType::Chariot => generate_chariot(board, from, side, rules, out),
        PieceType::Cannon => generate_cannon(board, from, side, rules, out),
        PieceType::Horse => generate_leaper(board, from, side, &HORSE_PATHS, out),
        PieceType::Elephant => generate_leaper(board, from, side, &ELEPHANT_PATHS, out),
        PieceType::Guard | PieceType::General => generate_palace_step(board, from, side, rules, out),
        PieceType::Soldier => generate_soldier(board, from, side, rules, out),
    }
}

// ============================================================================
// 走り駒（車）
// ============================================================================

/// 車: 直交 4 方向に滑る。宮の斜線ルールが有効なら斜線上も滑る。
fn generate_chariot(board: &Board, from: Square, side: Side, rules: &Rules, out: &mut Vec<Square>) {
    for (dr, dc) in ORTHOGONAL {
        slide(board, side, ray(from, dr, dc), out);
    }
    if rules.palace_diagonals {
        for diagonal in palace_diagonal_rays(from) {
            slide(board, side, diagonal.into_iter(), out);
        }
    }
}

/// 空きマスを進み続け、最初に当たった駒が相手なら取れる
fn slide(board: &Board, side: Side, path: impl Iterator<Item = Square>, out: &mut Vec<Square>) {
    for to in path {
        if board.is_empty(to) {
            out.push(to);
            continue;
        }
        if can_land(board, to, side) {
            out.push(to);
        }
        break;
    }
}

// ============================================================================
// 包
// ============================================================================

/// 包: 直交 4 方向で駒を 1 枚（包以外）飛び越える。宮の斜線ルールが有効なら斜線上も同様。
fn generate_cannon(board: &Board, from: Square, side: Side, rules: &Rules, out: &mut Vec<Square>) {
    for (dr, dc) in ORTHOGONAL {
        jump_screen(board, side, ray(from, dr, dc), out);
    }
    if rules.palace_diagonals {
        for diagonal in palace_diagonal_rays(from) {
            jump_screen(board, side, diagonal.into_iter(), out);
        }
    }
}

/// 最初に当たった駒を台（screen）にして飛び越える
///
/// - 台が無い、または台が包ならその方向には動けない
/// - 台の先の空きマスは全て移動先
/// - 台の先で最初に当たった駒は、包以外の相手の駒なら取れる
fn jump_screen(
    board: &Board,
    side: Side,
    mut path: impl Iterator<Item = Square>,
    out: &mut Vec<Square>,
) {
    let Some(screen) = path.by_ref().find(|&sq| !board.is_empty(sq)) else {
        return;
    };
    if board.piece_on(screen).is(PieceType::Cannon) {
        return;
    }

    for to in path {
        let target = board.piece_on(to);
        if target.is_empty() {
            out.push(to);
            continue;
        }
        if !target.is(PieceType::Cannon) && can_land(board, to, side) {
            out.push(to);
        }
        break;
    }
}

// ============================================================================
// 跳ぶ駒（馬・象）
// ============================================================================

/// 脚の升が全て空いている経路の着地点を生成する
fn generate_leaper(
    board: &Board,
    from: Square,
    side: Side,
    paths: &[LeaperPath],
    out: &mut Vec<Square>,
) {
    'path: for path in paths {
        for &(dr, dc) in path.legs {
            match from.offset(dr, dc) {
                Some(leg) if board.is_empty(leg) => {}
                _ => continue 'path,
            }
        }
        let (dr, dc) = path.landing;
        match from.offset(dr, dc) {
            Some(to) if can_land(board, to, side) => out.push(to),
            _ => {}
        }
    }
}

// ============================================================================
// 宮の駒（士・将）
// ============================================================================

/// 士・将: 1 マス（8 方向）。自分の宮の中だけ。
///
/// 宮の斜線ルールが有効なら、斜めの移動は斜線上に限る。
fn generate_palace_step(
    board: &Board,
    from: Square,
    side: Side,
    rules: &Rules,
    out: &mut Vec<Square>,
) {
    for (dr, dc) in PALACE_STEPS {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        if !in_own_palace(to, side) || !can_land(board, to, side) {
            continue;
        }
        if rules.palace_diagonals
            && DIAGONAL.contains(&(dr, dc))
            && !palace_diagonal_neighbors(from).any(|n| n == to)
        {
            continue;
        }
        out.push(to);
    }
}

// ============================================================================
// 卒
// ============================================================================

/// 卒: 左右に 1 マス、または前に 1 マス。
///
/// 宮の斜線ルールが有効なら、相手の宮の中では斜線に沿って斜め前にも進める。
fn generate_soldier(board: &Board, from: Square, side: Side, rules: &Rules, out: &mut Vec<Square>) {
    let forward = side.forward();
    for (dr, dc) in [(0, -1), (0, 1), (forward, 0)] {
        match from.offset(dr, dc) {
            Some(to) if can_land(board, to, side) => out.push(to),
            _ => {}
        }
    }

    if rules.palace_diagonals && palace_of(from) == Some(side.opponent()) {
        for to in palace_diagonal_neighbors(from) {
            if to.row() - from.row() == forward && can_land(board, to, side) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn destinations(board: &Board, from: Square, side: Side, rules: &Rules) -> Vec<Square> {
        let mut out = Vec::new();
        generate_destinations(board, from, side, rules, &mut out);
        out.sort();
        out
    }

    fn sorted(mut v: Vec<Square>) -> Vec<Square> {
        v.sort();
        v
    }

    #[test]
    fn test_chariot_open_board() {
        // 中央の車は縦 9 + 横 8 = 17 マス
        let board = Board::from_fen("9/9/9/9/4R4/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 4), Side::Cho, &Rules::default());
        assert_eq!(dests.len(), 17);
    }

    #[test]
    fn test_chariot_stops_at_pieces() {
        // (4,4) の楚の車: 上に漢の卒（取れる）、右に楚の卒（止まる）
        let board = Board::from_fen("9/9/4p4/9/4R1P2/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 4), Side::Cho, &Rules::default());
        assert!(dests.contains(&sq(3, 4)));
        assert!(dests.contains(&sq(2, 4)));
        assert!(!dests.contains(&sq(1, 4)));
        assert!(dests.contains(&sq(4, 5)));
        assert!(!dests.contains(&sq(4, 6)));
    }

    #[test]
    fn test_cannon_needs_screen() {
        // 台が無い包は動けない
        let board = Board::from_fen("9/9/9/9/4C4/9/9/9/9/9").unwrap();
        assert!(destinations(&board, sq(4, 4), Side::Cho, &Rules::default()).is_empty());
    }

    #[test]
    fn test_cannon_jumps_over_screen() {
        // (4,0) の包、(4,2) に台（自分の卒）、(4,6) に相手の車
        let board = Board::from_fen("9/9/9/9/C1P3r2/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 0), Side::Cho, &Rules::default());
        assert_eq!(dests, vec![sq(4, 3), sq(4, 4), sq(4, 5), sq(4, 6)]);
    }

    #[test]
    fn test_cannon_cannot_use_cannon_as_screen() {
        // 台が包ならその方向の先は全て不可
        let board = Board::from_fen("9/9/9/9/C1c3r2/9/9/9/9/9").unwrap();
        assert!(destinations(&board, sq(4, 0), Side::Cho, &Rules::default()).is_empty());
    }

    #[test]
    fn test_cannon_cannot_capture_cannon() {
        let board = Board::from_fen("9/9/9/9/C1P2c3/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 0), Side::Cho, &Rules::default());
        assert_eq!(dests, vec![sq(4, 3), sq(4, 4)]);
    }

    #[test]
    fn test_horse_leg_block() {
        // (4,4) の馬。上の脚 (3,4) を塞ぐと (2,3),(2,5) に行けない
        let board = Board::from_fen("9/9/9/4P4/4N4/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 4), Side::Cho, &Rules::default());
        assert_eq!(dests.len(), 6);
        assert!(!dests.contains(&sq(2, 3)));
        assert!(!dests.contains(&sq(2, 5)));
    }

    #[test]
    fn test_horse_leg_block_even_for_capture() {
        // 着地点に相手の駒があっても脚が塞がれていれば取れない
        let board = Board::from_fen("9/9/3r5/4p4/4N4/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 4), Side::Cho, &Rules::default());
        assert!(!dests.contains(&sq(2, 3)));
    }

    #[test]
    fn test_elephant_paths() {
        let board = Board::from_fen("9/9/9/9/4B4/9/9/9/9/9").unwrap();
        let dests = destinations(&board, sq(4, 4), Side::Cho, &Rules::default());
        assert_eq!(
            dests,
            sorted(vec![
                sq(1, 2),
                sq(1, 6),
                sq(7, 2),
                sq(7, 6),
                sq(2, 1),
                sq(6, 1),
                sq(2, 7),
                sq(6, 7),
            ])
        );
        // 2 つ目の脚 (2,3) を塞ぐ
        let blocked = board.with_piece(sq(2, 3), Piece::new(Side::Han, PieceType::Soldier));
        let dests = destinations(&blocked, sq(4, 4), Side::Cho, &Rules::default());
        assert!(!dests.contains(&sq(1, 2)));
        assert!(dests.contains(&sq(1, 6)));
    }

    #[test]
    fn test_general_confined_to_palace() {
        // 宮の隅 (9,3) の楚の将
        let board = Board::from_fen("9/9/9/9/9/9/9/9/9/3K5").unwrap();
        let dests = destinations(&board, sq(9, 3), Side::Cho, &Rules::default());
        assert_eq!(dests, vec![sq(8, 3), sq(8, 4), sq(9, 4)]);
    }

    #[test]
    fn test_guard_diagonal_restricted_by_palace_lines() {
        // 辺の中点 (8,3) の士。斜線ルールでは斜め移動ができない
        let board = Board::from_fen("9/9/9/9/9/9/9/9/3A5/9").unwrap();
        let simple = destinations(&board, sq(8, 3), Side::Cho, &Rules::default());
        assert_eq!(simple, vec![sq(7, 3), sq(7, 4), sq(8, 4), sq(9, 3), sq(9, 4)]);
        let rules = Rules { palace_diagonals: true, ..Rules::default() };
        let lines = destinations(&board, sq(8, 3), Side::Cho, &rules);
        assert_eq!(lines, vec![sq(7, 3), sq(8, 4), sq(9, 3)]);
    }

    #[test]
    fn test_soldier_direction() {
        // 楚の卒は row が減る方向、漢の卒は増える方向
        let board = Board::from_fen("9/9/9/9/4p4/4P4/9/9/9/9").unwrap();
        let cho = destinations(&board, sq(5, 4), Side::Cho, &Rules::default());
        assert_eq!(cho, vec![sq(4, 4), sq(5, 3), sq(5, 5)]);
        let han = destinations(&board, sq(4, 4), Side::Han, &Rules::default());
        assert_eq!(han, vec![sq(4, 3), sq(4, 5), sq(5, 4)]);
    }

    #[test]
    fn test_soldier_palace_diagonal() {
        // 漢の宮の隅 (2,3) にいる楚の卒
        let board = Board::from_fen("9/9/3P5/9/9/9/9/9/9/9").unwrap();
        let simple = destinations(&board, sq(2, 3), Side::Cho, &Rules::default());
        assert!(!simple.contains(&sq(1, 4)));
        let rules = Rules { palace_diagonals: true, ..Rules::default() };
        let lines = destinations(&board, sq(2, 3), Side::Cho, &rules);
        assert!(lines.contains(&sq(1, 4)));
        // 後ろ向きの斜めには進めない
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_chariot_palace_diagonal() {
        // 楚の宮の隅 (9,3) の車。斜線ルールで (8,4),(7,5) まで滑る
        let board = Board::from_fen("9/9/9/9/9/9/9/9/9/3R5").unwrap();
        let rules = Rules { palace_diagonals: true, ..Rules::default() };
        let simple = destinations(&board, sq(9, 3), Side::Cho, &Rules::default());
        let lines = destinations(&board, sq(9, 3), Side::Cho, &rules);
        assert_eq!(lines.len(), simple.len() + 2);
        assert!(lines.contains(&sq(8, 4)) && lines.contains(&sq(7, 5)));
    }

    #[test]
    fn test_cannon_palace_diagonal() {
        // 隅 (9,3) の包が中心 (8,4) の駒を台に (7,5) の相手の駒を取る
        let board = Board::from_fen("9/9/9/9/9/9/9/5r3/4A4/3C5").unwrap();
        let rules = Rules { palace_diagonals: true, ..Rules::default() };
        assert!(!destinations(&board, sq(9, 3), Side::Cho, &Rules::default()).contains(&sq(7, 5)));
        assert!(destinations(&board, sq(9, 3), Side::Cho, &rules).contains(&sq(7, 5)));
    }

    #[test]
    fn test_wrong_side_or_empty_origin() {
        let board = Board::default();
        // 楚の車の升を漢として問い合わせる
        assert!(destinations(&board, sq(9, 0), Side::Han, &Rules::default()).is_empty());
        // 空きマス
        assert!(destinations(&board, sq(4, 4), Side::Cho, &Rules::default()).is_empty());
    }
}

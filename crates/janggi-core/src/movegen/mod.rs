//! 合法手生成モジュール
//!
//! - `legal_destinations`: 1 つの駒の移動先
//! - `get_all_legal_moves`: 指定陣営の全合法手
//! - `apply_move`: 指し手を適用した新しい盤面
//!
//! 各関数には `Rules` を受け取る `*_with_rules` 版がある。
//! `Rules::default()` では自分の将を取られる手も除外しない（簡略ルール）。

mod generator;
pub mod tables;

use crate::board::Board;
use crate::result::get_game_result;
use crate::rules::Rules;
use crate::types::{Move, Side, Square};

use generator::generate_destinations;

/// 駒の移動先（既定ルール）
pub fn legal_destinations(board: &Board, from: Square, side: Side) -> Vec<Square> {
    legal_destinations_with_rules(board, from, side, &Rules::default())
}

/// 駒の移動先
///
/// `from` が空き、または `side` の駒でなければ空。
pub fn legal_destinations_with_rules(
    board: &Board,
    from: Square,
    side: Side,
    rules: &Rules,
) -> Vec<Square> {
    let mut dests = Vec::new();
    generate_destinations(board, from, side, rules, &mut dests);
    if rules.enforce_general_safety {
        dests.retain(|&to| !exposes_general(board, Move::new(from, to), side, rules));
    }
    dests
}

/// 全合法手（既定ルール）
pub fn get_all_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    get_all_legal_moves_with_rules(board, side, &Rules::default())
}

/// 全合法手
pub fn get_all_legal_moves_with_rules(board: &Board, side: Side, rules: &Rules) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut dests = Vec::with_capacity(17);
    for (from, _) in board.pieces(side) {
        dests.clear();
        generate_destinations(board, from, side, rules, &mut dests);
        moves.extend(dests.iter().map(|&to| Move::new(from, to)));
    }

    if rules.enforce_general_safety {
        let before = moves.len();
        moves.retain(|&mv| !exposes_general(board, mv, side, rules));
        log::trace!("general safety removed {} of {before} moves for {side}", before - moves.len());
    }
    moves
}

/// 指し手が `side` にとって合法か
pub fn is_legal_move(board: &Board, mv: Move, side: Side, rules: &Rules) -> bool {
    legal_destinations_with_rules(board, mv.from, side, rules).contains(&mv.to)
}

/// 指し手を適用した新しい盤面を返す（合法性は確認しない）
#[inline]
pub fn apply_move(board: &Board, mv: Move) -> Board {
    board.apply_move(mv)
}

/// `side` の将が相手の次の 1 手で取られる状態か
///
/// 将が盤上に無い場合は false。相手側の手は将の安全確認なしで生成する。
pub fn is_general_attacked(board: &Board, side: Side, rules: &Rules) -> bool {
    let Some(general) = board.find_general(side) else {
        return false;
    };
    let them = side.opponent();
    let mut dests = Vec::with_capacity(17);
    board.pieces(them).any(|(from, _)| {
        dests.clear();
        generate_destinations(board, from, them, rules, &mut dests);
        dests.contains(&general)
    })
}

/// 指した後に自分の将が取られる状態になるか
///
/// その手で勝ちが決まる場合は相手の手番が来ないので false。
fn exposes_general(board: &Board, mv: Move, side: Side, rules: &Rules) -> bool {
    let after = board.apply_move(mv);
    if after.find_general(side.opponent()).is_none() || get_game_result(&after).winner() == Some(side) {
        return false;
    }
    is_general_attacked(&after, side, rules)
}

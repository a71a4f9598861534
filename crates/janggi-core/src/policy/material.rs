//! 駒得による 1 手読みの指し手選択

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::MoveStrategy;
use crate::board::Board;
use crate::movegen::get_all_legal_moves_with_rules;
use crate::result::get_game_result;
use crate::rules::Rules;
use crate::types::{Move, PieceType, Side};

/// 駒の価値
///
/// 将は交換の対象にならないので 0。
pub const fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Soldier => 2,
        PieceType::Elephant => 3,
        PieceType::Horse => 5,
        PieceType::Cannon => 7,
        PieceType::Chariot => 13,
        PieceType::Guard => 3,
        PieceType::General => 0,
    }
}

/// `side` から見た駒得（自分の駒の価値の合計 - 相手の駒の価値の合計）
pub fn evaluate_material(board: &Board, side: Side) -> i32 {
    board
        .occupied()
        .filter_map(|(_, piece)| {
            let value = piece_value(piece.piece_type()?);
            Some(if piece.belongs_to(side) { value } else { -value })
        })
        .sum()
}

/// 1 手先の駒得が最大になる手を選ぶ戦略（同点はランダム）
///
/// 相手の将を取って勝ちが決まる手は駒得より優先する。
#[derive(Debug, Clone)]
pub struct MaterialGreedyStrategy<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl MaterialGreedyStrategy<Xoshiro256PlusPlus> {
    pub fn seeded(seed: u64) -> Self {
        MaterialGreedyStrategy { rng: Xoshiro256PlusPlus::seed_from_u64(seed) }
    }
}

impl<R: Rng> MaterialGreedyStrategy<R> {
    pub fn new(rng: R) -> Self {
        MaterialGreedyStrategy { rng }
    }
}

impl<R: Rng> MoveStrategy for MaterialGreedyStrategy<R> {
    fn name(&self) -> &'static str {
        "material"
    }

    fn select_move(&mut self, board: &Board, side: Side, rules: &Rules) -> Option<Move> {
        let mut best_score = i32::MIN;
        let mut best = Vec::new();
        for mv in get_all_legal_moves_with_rules(board, side, rules) {
            let after = board.apply_move(mv);
            let score = if get_game_result(&after).winner() == Some(side) {
                i32::MAX
            } else {
                evaluate_material(&after, side)
            };
            if score > best_score {
                best_score = score;
                best.clear();
            }
            if score == best_score {
                best.push(mv);
            }
        }
        best.choose(&mut self.rng).copied()
    }
}

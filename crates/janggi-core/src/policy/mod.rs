//! 指し手選択戦略
//!
//! 探索は行わない。合法手からの一様ランダム選択と、1 手先の駒得による選択のみ。

mod material;
mod random;

use std::str::FromStr;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen::get_all_legal_moves;
use crate::rules::Rules;
use crate::types::{Move, Side};

pub use material::{evaluate_material, piece_value, MaterialGreedyStrategy};
pub use random::RandomStrategy;

/// 指し手選択戦略
pub trait MoveStrategy {
    /// ログ出力用の名前
    fn name(&self) -> &'static str;

    /// `side` の指し手を 1 つ選ぶ。合法手が無ければ `None`。
    fn select_move(&mut self, board: &Board, side: Side, rules: &Rules) -> Option<Move>;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select_move(&mut self, board: &Board, side: Side, rules: &Rules) -> Option<Move> {
        (**self).select_move(board, side, rules)
    }
}

/// 既定ルールの合法手から一様ランダムに選ぶ（スレッドローカル乱数）
pub fn get_ai_move(board: &Board, side: Side) -> Option<Move> {
    get_all_legal_moves(board, side).choose(&mut rand::rng()).copied()
}

/// 戦略の種類（CLI・設定ファイル用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Random,
    Material,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Random, StrategyKind::Material];

    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Material => "material",
        }
    }

    /// シードを指定して戦略を生成する
    pub fn build(self, seed: u64) -> Box<dyn MoveStrategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::seeded(seed)),
            StrategyKind::Material => Box::new(MaterialGreedyStrategy::seeded(seed)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown strategy '{s}' (expected random|material)"))
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! 指し手（Move）

use serde::{Deserialize, Serialize};

use super::Square;
use crate::notation::{notation_to_position, position_to_notation};

/// 指し手（移動元と移動先の組）
///
/// チャンギには成り・打ち・キャスリングに相当するものが無いため、
/// 2 つの升目だけで指し手を表現できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// 移動元と移動先から生成
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// 代数表記（"b0c2" 等、4 文字）に変換
    pub fn to_notation(self) -> String {
        format!("{}{}", position_to_notation(self.from), position_to_notation(self.to))
    }

    /// 代数表記から変換（4 文字でない、または升目が不正なら None）
    pub fn from_notation(s: &str) -> Option<Move> {
        if !s.is_ascii() || s.len() != 4 {
            return None;
        }
        let from = notation_to_position(&s[0..2])?;
        let to = notation_to_position(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_notation())
    }
}

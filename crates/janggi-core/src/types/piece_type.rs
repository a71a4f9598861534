//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

/// 駒種（先後の区別なし）
///
/// 値は駒の絶対値（1..=7）と一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceType {
    /// 卒・兵
    Soldier = 1,
    /// 象
    Elephant = 2,
    /// 馬
    Horse = 3,
    /// 包
    Cannon = 4,
    /// 車
    Chariot = 5,
    /// 士
    Guard = 6,
    /// 将（楚・漢）
    General = 7,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 7;

    /// 全ての駒種
    pub const ALL: [PieceType; 7] = [
        PieceType::Soldier,
        PieceType::Elephant,
        PieceType::Horse,
        PieceType::Cannon,
        PieceType::Chariot,
        PieceType::Guard,
        PieceType::General,
    ];

    /// 絶対値から駒種に変換
    #[inline]
    pub const fn from_magnitude(n: u8) -> Option<PieceType> {
        match n {
            1 => Some(PieceType::Soldier),
            2 => Some(PieceType::Elephant),
            3 => Some(PieceType::Horse),
            4 => Some(PieceType::Cannon),
            5 => Some(PieceType::Chariot),
            6 => Some(PieceType::Guard),
            7 => Some(PieceType::General),
            _ => None,
        }
    }

    /// 宮から出られない駒か
    #[inline]
    pub const fn is_palace_bound(self) -> bool {
        matches!(self, PieceType::Guard | PieceType::General)
    }

    /// FEN 形式の文字（小文字）
    pub const fn to_fen_char(self) -> char {
        match self {
            PieceType::Soldier => 'p',
            PieceType::Elephant => 'b',
            PieceType::Horse => 'n',
            PieceType::Cannon => 'c',
            PieceType::Chariot => 'r',
            PieceType::Guard => 'a',
            PieceType::General => 'k',
        }
    }

    /// FEN 形式の文字から駒種に変換（大文字小文字は区別しない）
    pub const fn from_fen_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Soldier),
            'b' => Some(PieceType::Elephant),
            'n' => Some(PieceType::Horse),
            'c' => Some(PieceType::Cannon),
            'r' => Some(PieceType::Chariot),
            'a' => Some(PieceType::Guard),
            'k' => Some(PieceType::General),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_type_magnitude() {
        for pt in PieceType::ALL {
            assert_eq!(PieceType::from_magnitude(pt as u8), Some(pt));
        }
        assert_eq!(PieceType::from_magnitude(0), None);
        assert_eq!(PieceType::from_magnitude(8), None);
    }

    #[test]
    fn test_piece_type_fen_char() {
        for pt in PieceType::ALL {
            assert_eq!(PieceType::from_fen_char(pt.to_fen_char()), Some(pt));
            assert_eq!(PieceType::from_fen_char(pt.to_fen_char().to_ascii_uppercase()), Some(pt));
        }
        assert_eq!(PieceType::from_fen_char('q'), None);
    }
}

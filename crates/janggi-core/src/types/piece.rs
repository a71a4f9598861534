//! 駒（Piece）
//!
//! 内部表現は符号付き整数。
//! - 絶対値 1..=7: `PieceType`
//! - 符号: 陣営（正 = 漢、負 = 楚）
//! - 0: 空きマス（`Piece::EMPTY`）

use serde::{Deserialize, Serialize};

use super::{PieceType, Side};

/// 駒（陣営の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Piece(i8);

impl Piece {
    /// 空きマス
    pub const EMPTY: Piece = Piece(0);

    /// SideとPieceTypeから生成
    #[inline]
    pub const fn new(side: Side, piece_type: PieceType) -> Piece {
        Piece(piece_type as i8 * side.sign())
    }

    /// 生の値から生成（範囲外の値は None）
    #[inline]
    pub const fn from_raw(v: i8) -> Option<Piece> {
        if v >= -7 && v <= 7 { Some(Piece(v)) } else { None }
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// 空きマスか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 駒があるか
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 漢の駒か（0 はどちらでもない）
    #[inline]
    pub const fn is_han(self) -> bool {
        self.0 > 0
    }

    /// 楚の駒か（0 はどちらでもない）
    #[inline]
    pub const fn is_cho(self) -> bool {
        self.0 < 0
    }

    /// 陣営を取得（空きマスは None）
    #[inline]
    pub const fn side(self) -> Option<Side> {
        if self.0 > 0 {
            Some(Side::Han)
        } else if self.0 < 0 {
            Some(Side::Cho)
        } else {
            None
        }
    }

    /// 駒種を取得（空きマスは None）
    #[inline]
    pub const fn piece_type(self) -> Option<PieceType> {
        PieceType::from_magnitude(self.0.unsigned_abs())
    }

    /// 指定陣営の駒か
    #[inline]
    pub const fn belongs_to(self, side: Side) -> bool {
        match side {
            Side::Han => self.is_han(),
            Side::Cho => self.is_cho(),
        }
    }

    /// 指定駒種か
    #[inline]
    pub const fn is(self, piece_type: PieceType) -> bool {
        self.0.unsigned_abs() == piece_type as u8
    }

    /// FEN 形式の文字（楚は大文字、漢は小文字、空きマスは None）
    pub fn to_fen_char(self) -> Option<char> {
        let c = self.piece_type()?.to_fen_char();
        Some(if self.is_cho() { c.to_ascii_uppercase() } else { c })
    }

    /// FEN 形式の文字から生成
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let pt = PieceType::from_fen_char(c)?;
        let side = if c.is_ascii_uppercase() { Side::Cho } else { Side::Han };
        Some(Piece::new(side, pt))
    }
}

/// 漢の駒か（仕様上の述語名に対応する自由関数）
#[inline]
pub const fn is_han_piece(piece: Piece) -> bool {
    piece.is_han()
}

/// 楚の駒か
#[inline]
pub const fn is_cho_piece(piece: Piece) -> bool {
    piece.is_cho()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_encoding() {
        assert_eq!(Piece::new(Side::Han, PieceType::General).raw(), 7);
        assert_eq!(Piece::new(Side::Cho, PieceType::General).raw(), -7);
        assert_eq!(Piece::new(Side::Cho, PieceType::Soldier).raw(), -1);
        assert_eq!(Piece::from_raw(8), None);
        assert_eq!(Piece::from_raw(-7), Some(Piece::new(Side::Cho, PieceType::General)));
    }

    #[test]
    fn test_piece_side() {
        let han = Piece::new(Side::Han, PieceType::Cannon);
        let cho = Piece::new(Side::Cho, PieceType::Cannon);
        assert!(is_han_piece(han) && !is_cho_piece(han));
        assert!(is_cho_piece(cho) && !is_han_piece(cho));
        // 空きマスはどちらの陣営でもない
        assert!(!is_han_piece(Piece::EMPTY));
        assert!(!is_cho_piece(Piece::EMPTY));
        assert_eq!(Piece::EMPTY.side(), None);
        assert_eq!(Piece::EMPTY.piece_type(), None);
        assert!(han.is(PieceType::Cannon) && cho.is(PieceType::Cannon));
    }

    #[test]
    fn test_piece_fen_char() {
        assert_eq!(Piece::new(Side::Cho, PieceType::Chariot).to_fen_char(), Some('R'));
        assert_eq!(Piece::new(Side::Han, PieceType::Chariot).to_fen_char(), Some('r'));
        assert_eq!(Piece::EMPTY.to_fen_char(), None);
        assert_eq!(Piece::from_fen_char('K'), Some(Piece::new(Side::Cho, PieceType::General)));
        assert_eq!(Piece::from_fen_char('x'), None);
    }
}

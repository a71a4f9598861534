//! 升目（Square）

use serde::{Deserialize, Serialize};

/// 升目（0-89）
///
/// 配置: row 優先
/// (row 0, col 0)=0, (row 0, col 1)=1, ..., (row 0, col 8)=8, (row 1, col 0)=9, ...
///
/// row 0 は北側（漢）の最下段、row 9 は南側（楚）の最下段。
/// `Square` の値は常に盤内を指す。盤外の座標は生成時に `Option` で弾く。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(u8, u8)")]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 90;
    /// 段（row）の数
    pub const ROWS: i8 = 10;
    /// 筋（column）の数
    pub const COLS: i8 = 9;

    /// row / col から生成（盤外は None）
    #[inline]
    pub const fn new(row: i8, col: i8) -> Option<Square> {
        if in_board(row, col) {
            Some(Square((row * Self::COLS + col) as u8))
        } else {
            None
        }
    }

    /// row / col から生成（範囲チェックなし）
    ///
    /// 定数の升目を作るためのもの。row / col は盤内でなければならない。
    #[inline]
    pub(crate) const fn new_unchecked(row: i8, col: i8) -> Square {
        debug_assert!(in_board(row, col));
        Square((row * Self::COLS + col) as u8)
    }

    /// row を取得
    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 / Self::COLS as u8) as i8
    }

    /// column を取得
    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 % Self::COLS as u8) as i8
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// インデックスから生成（範囲チェックあり）
    #[inline]
    pub const fn from_index(n: usize) -> Option<Square> {
        if n < Self::NUM { Some(Square(n as u8)) } else { None }
    }

    /// (dr, dc) だけ移動した升（盤外は None）
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row() + dr, self.col() + dc)
    }

    /// 上下反転（盤の中央線を軸に北と南を入れ替える）
    #[inline]
    pub const fn flip(self) -> Square {
        Square(((Self::ROWS - 1 - self.row()) * Self::COLS + self.col()) as u8)
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}

/// row / col が盤内か
#[inline]
pub const fn in_board(row: i8, col: i8) -> bool {
    row >= 0 && row < Square::ROWS && col >= 0 && col < Square::COLS
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> (u8, u8) {
        (sq.row() as u8, sq.col() as u8)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = String;

    fn try_from((row, col): (u8, u8)) -> Result<Square, String> {
        let (r, c) = (i8::try_from(row).ok(), i8::try_from(col).ok());
        match (r, c) {
            (Some(r), Some(c)) => {
                Square::new(r, c).ok_or_else(|| format!("square out of board: ({row}, {col})"))
            }
            _ => Err(format!("square out of board: ({row}, {col})")),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::notation::position_to_notation(*self))
    }
}

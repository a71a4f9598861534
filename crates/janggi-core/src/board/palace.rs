//! 宮（palace）の判定
//!
//! 宮は column 3-5 × row 0-2（漢）/ row 7-9（楚）の 3x3 領域。
//! 盤面の状態ではなく升目だけで決まる。

use crate::types::{Side, Square};

/// 宮の column 範囲
const PALACE_COLS: std::ops::RangeInclusive<i8> = 3..=5;

/// 陣営の宮（および終局判定の自陣帯）の row 範囲
#[inline]
pub const fn home_rows(side: Side) -> std::ops::RangeInclusive<i8> {
    match side {
        Side::Han => 0..=2,
        Side::Cho => 7..=9,
    }
}

/// 指定陣営の宮の中か
#[inline]
pub fn in_own_palace(sq: Square, side: Side) -> bool {
    PALACE_COLS.contains(&sq.col()) && home_rows(side).contains(&sq.row())
}

/// どちらかの宮の中か
#[inline]
pub fn in_palace(sq: Square) -> bool {
    palace_of(sq).is_some()
}

/// 升目が属する宮の陣営（宮の外は None）
#[inline]
pub fn palace_of(sq: Square) -> Option<Side> {
    Side::ALL.into_iter().find(|&side| in_own_palace(sq, side))
}

/// 宮の中心
#[inline]
pub const fn palace_center(side: Side) -> Square {
    match side {
        Side::Han => Square::new_unchecked(1, 4),
        Side::Cho => Square::new_unchecked(8, 4),
    }
}

//! 代数表記との変換
//!
//! UI / プロトコル境界では升目を 2 文字の代数表記で扱う。
//! - 筋: 'a'-'i'（column 0-8）
//! - 段: '0'-'9'（`9 - row`。段 0 が南側＝楚の最下段、段 9 が北側＝漢の最下段）

use crate::types::Square;

/// 筋の先頭文字
const FILE_BASE: u8 = b'a';
/// 段の先頭文字
const RANK_BASE: u8 = b'0';

/// 升目を代数表記（"e4" 等）に変換する。常に 2 文字。
pub fn position_to_notation(sq: Square) -> String {
    let file = (FILE_BASE + sq.col() as u8) as char;
    let rank = (RANK_BASE + (Square::ROWS - 1 - sq.row()) as u8) as char;
    format!("{file}{rank}")
}

/// 代数表記から升目に変換する。
///
/// ちょうど 2 文字でない、筋が 'a'-'i' の外、段が '0'-'9' の外のときは None。
pub fn notation_to_position(s: &str) -> Option<Square> {
    let mut chars = s.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() || !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
        return None;
    }
    let col = (file as u8).wrapping_sub(FILE_BASE) as i8;
    let row = Square::ROWS - 1 - (rank as u8 - RANK_BASE) as i8;
    Square::new(row, col)
}

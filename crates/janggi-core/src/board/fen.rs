//! FEN 形式の盤面表記
//!
//! row 0（北）から row 9（南）までの 10 段を '/' で区切る。
//! 数字 1-9 は連続する空きマス、英字は駒（楚は大文字、漢は小文字）。
//!
//! | 文字 | 駒 |
//! |------|----|
//! | r    | 車 |
//! | n    | 馬 |
//! | b    | 象 |
//! | a    | 士 |
//! | k    | 将 |
//! | c    | 包 |
//! | p    | 卒 |

use super::Board;
use crate::types::{Piece, PieceType, Side, Square};

/// 平手（馬象象馬 / 馬象象馬）の初期局面
pub const FEN_INITIAL: &str =
    "rnba1abnr/4k4/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/4K4/RNBA1ABNR";

/// FEN 解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// 段数が 10 でない
    #[error("expected 10 ranks, got {0}")]
    RankCount(usize),

    /// 段の升目数が 9 でない
    #[error("rank {rank} has {width} squares (expected 9)")]
    RankWidth { rank: usize, width: usize },

    /// 駒でも数字でもない文字
    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidChar { rank: usize, ch: char },

    /// 同じ陣営の将が 2 枚以上ある
    #[error("more than one General for {side}")]
    TooManyGenerals { side: Side },
}

impl Board {
    /// FEN 文字列から盤面を生成
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let ranks: Vec<&str> = fen.trim().split('/').collect();
        if ranks.len() != Square::ROWS as usize {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        let mut generals = [0usize; Side::NUM];
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank.chars() {
                if let Some(n) = ch.to_digit(10).filter(|&n| n > 0) {
                    col += n as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidChar { rank: row, ch })?;
                if let (Some(PieceType::General), Some(side)) = (piece.piece_type(), piece.side()) {
                    generals[side.index()] += 1;
                    if generals[side.index()] > 1 {
                        return Err(FenError::TooManyGenerals { side });
                    }
                }
                if col < Square::COLS as usize {
                    board.put(row as i8, col as i8, piece);
                }
                col += 1;
            }
            if col != Square::COLS as usize {
                return Err(FenError::RankWidth { rank: row, width: col });
            }
        }
        Ok(board)
    }

    /// 盤面を FEN 文字列に変換
    pub fn to_fen(&self) -> String {
        let mut result = String::new();
        for row in 0..Square::ROWS {
            let mut empty_count = 0;
            for col in 0..Square::COLS {
                match self.piece_at(row, col).to_fen_char() {
                    Some(c) => {
                        if empty_count > 0 {
                            result.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        result.push(c);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }
            if row < Square::ROWS - 1 {
                result.push('/');
            }
        }
        result
    }
}

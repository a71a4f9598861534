//! 終局判定
//!
//! 詰みではなく、将が実際に取られたかどうかで判定する。
//! 各陣営の自陣帯（宮を含む 3 段）に自分の将がいるかを調べる。
//!
//! | 漢の将が自陣帯に | 楚の将が自陣帯に | 結果 |
//! |------------------|------------------|------|
//! | いる             | いる             | 続行 |
//! | いない           | いる             | 楚の勝ち |
//! | いる             | いない           | 漢の勝ち |
//! | いない           | いない           | 引き分け（相互侵入、ビッチャンの近似） |
//!
//! 相手の将が自陣帯に侵入している場合、その将は自分の自陣帯にいないので最後の行に当たる。

use serde::{Deserialize, Serialize};

use crate::board::{palace::home_rows, Board};
use crate::types::{Piece, PieceType, Side, Square};

/// 対局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// 漢の勝ち
    HanWins,
    /// 楚の勝ち
    ChoWins,
    /// 引き分け
    Draw,
    /// 対局中
    Ongoing,
}

impl GameResult {
    /// 終局しているか
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// 勝った陣営
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::HanWins => Some(Side::Han),
            GameResult::ChoWins => Some(Side::Cho),
            GameResult::Draw | GameResult::Ongoing => None,
        }
    }

    /// 指定陣営の勝ち
    #[inline]
    pub const fn win_for(side: Side) -> GameResult {
        match side {
            Side::Han => GameResult::HanWins,
            Side::Cho => GameResult::ChoWins,
        }
    }

    /// ログ・JSON 出力用のラベル
    pub const fn label(self) -> &'static str {
        match self {
            GameResult::HanWins => "han_win",
            GameResult::ChoWins => "cho_win",
            GameResult::Draw => "draw",
            GameResult::Ongoing => "in_progress",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `side` の将が `band` 陣営の自陣帯にいるか
fn general_in_band(board: &Board, side: Side, band: Side) -> bool {
    let general = Piece::new(side, PieceType::General);
    home_rows(band).any(|row| {
        (0..Square::COLS).any(|col| board.piece_at(row, col) == general)
    })
}

/// 盤面から対局結果を判定する
pub fn get_game_result(board: &Board) -> GameResult {
    let han_home = general_in_band(board, Side::Han, Side::Han);
    let cho_home = general_in_band(board, Side::Cho, Side::Cho);

    match (han_home, cho_home) {
        (true, true) => GameResult::Ongoing,
        (false, false) => GameResult::Draw,
        (false, true) => GameResult::ChoWins,
        (true, false) => GameResult::HanWins,
    }
}

/// 相手の将が自陣帯に侵入しているか
///
/// 結果が `Draw` になった盤面で、どちらの侵入かを説明するために使う。
pub fn is_infiltrated(board: &Board, side: Side) -> bool {
    general_in_band(board, side.opponent(), side)
}

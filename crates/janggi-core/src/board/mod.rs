//! 盤面モジュール
//!
//! 10x9 の盤面を表現し、初期配置の生成と升目の参照を行う。
//!
//! - `Board`: 盤面本体（`[[Piece; 9]; 10]`）。`Copy` な値として扱い、共有しない
//! - `palace`: 宮の判定（升目だけで決まる純粋関数）
//! - `fen`: FEN 形式の解析・出力
//!
//! 盤面を書き換える操作は `apply_move` のみで、常に新しい `Board` を返す。
//! 入力の盤面が変更されることは無い。

mod fen;
pub mod palace;

pub use fen::FenError;
pub use palace::{in_own_palace, in_palace, palace_center};

use serde::{Deserialize, Serialize};

use crate::types::{in_board, Move, Piece, PieceType, SetupVariant, Side, Square};

/// 行数
const ROWS: usize = Square::ROWS as usize;
/// 列数
const COLS: usize = Square::COLS as usize;

/// 盤面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Piece; COLS]; ROWS],
}

/// 陣営ごとの固定配置（漢側の row 基準、楚は上下反転）
const FIXED_PIECES: [(i8, i8, PieceType); 12] = [
    (0, 0, PieceType::Chariot),
    (0, 8, PieceType::Chariot),
    (0, 3, PieceType::Guard),
    (0, 5, PieceType::Guard),
    (1, 4, PieceType::General),
    (2, 1, PieceType::Cannon),
    (2, 7, PieceType::Cannon),
    (3, 0, PieceType::Soldier),
    (3, 2, PieceType::Soldier),
    (3, 4, PieceType::Soldier),
    (3, 6, PieceType::Soldier),
    (3, 8, PieceType::Soldier),
];

impl Board {
    /// 空の盤面
    pub const fn empty() -> Board {
        Board { cells: [[Piece::EMPTY; COLS]; ROWS] }
    }

    /// 初期配置の盤面を生成
    ///
    /// 車・士・将・包・卒を定位置に置き、馬と象は陣営ごとの `SetupVariant` に従う。
    pub fn initial(setup_han: SetupVariant, setup_cho: SetupVariant) -> Board {
        let mut board = Board::empty();
        for (side, setup) in [(Side::Han, setup_han), (Side::Cho, setup_cho)] {
            for &(row, col, pt) in &FIXED_PIECES {
                let row = if side == Side::Han { row } else { Square::ROWS - 1 - row };
                board.put(row, col, Piece::new(side, pt));
            }
            for (&col, pt) in SetupVariant::COLUMNS.iter().zip(setup.pieces()) {
                board.put(side.back_row(), col, Piece::new(side, pt));
            }
        }
        board
    }

    /// 升目の駒
    #[inline]
    pub const fn piece_on(&self, sq: Square) -> Piece {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// row / col の駒（盤外は空きマス扱い）
    #[inline]
    pub const fn piece_at(&self, row: i8, col: i8) -> Piece {
        if in_board(row, col) { self.cells[row as usize][col as usize] } else { Piece::EMPTY }
    }

    /// 升目が空きか
    #[inline]
    pub const fn is_empty(&self, sq: Square) -> bool {
        self.piece_on(sq).is_empty()
    }

    /// 駒を置いた新しい盤面を返す（局面の組み立て用）
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
        self
    }

    /// 指し手を適用した新しい盤面を返す
    ///
    /// 合法性は確認しない。移動元を空け、移動先を上書きする（駒取り）。
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = *self;
        let piece = next.piece_on(mv.from);
        next.put(mv.from.row(), mv.from.col(), Piece::EMPTY);
        next.put(mv.to.row(), mv.to.col(), piece);
        next
    }

    /// 指定陣営の駒とその升目
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(|sq| (sq, self.piece_on(sq)))
            .filter(move |(_, pc)| pc.belongs_to(side))
    }

    /// 盤上の全ての駒とその升目
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().map(|sq| (sq, self.piece_on(sq))).filter(|(_, pc)| pc.is_some())
    }

    /// 指定陣営の将の位置（盤上に無ければ None）
    pub fn find_general(&self, side: Side) -> Option<Square> {
        let general = Piece::new(side, PieceType::General);
        Square::all().find(|&sq| self.piece_on(sq) == general)
    }

    /// 指定陣営・駒種の枚数
    pub fn count(&self, side: Side, piece_type: PieceType) -> usize {
        let target = Piece::new(side, piece_type);
        self.pieces(side).filter(|&(_, pc)| pc == target).count()
    }

    #[inline]
    fn put(&mut self, row: i8, col: i8, piece: Piece) {
        self.cells[row as usize][col as usize] = piece;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial(SetupVariant::default(), SetupVariant::default())
    }
}

impl std::fmt::Display for Board {
    /// 北（row 0、段 9）から順に 1 行ずつ出力する。空きマスは '.'。
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..Square::ROWS {
            write!(f, "{} ", Square::ROWS - 1 - row)?;
            for col in 0..Square::COLS {
                let c = self.piece_at(row, col).to_fen_char().unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..Square::COLS {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}

/// 初期配置の盤面を生成
pub fn create_initial_board(setup_han: SetupVariant, setup_cho: SetupVariant) -> Board {
    Board::initial(setup_han, setup_cho)
}

/// 升目の駒（盤外の row / col は空きマス）
#[inline]
pub const fn get_piece(board: &Board, row: i8, col: i8) -> Piece {
    board.piece_at(row, col)
}

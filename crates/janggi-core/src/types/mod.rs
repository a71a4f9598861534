//! 基本型モジュール
//!
//! ルールエンジンで使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Side
//!   ↓
//! PieceType → Piece
//!   ↓
//! Square ← Move
//!
//! SetupVariant は独立
//! ```

mod moves;
mod piece;
mod piece_type;
mod setup;
mod side;
mod square;

pub use moves::Move;
pub use piece::{is_cho_piece, is_han_piece, Piece};
pub use piece_type::PieceType;
pub use setup::SetupVariant;
pub use side::Side;
pub use square::{in_board, Square};

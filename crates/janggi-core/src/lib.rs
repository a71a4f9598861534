//! # janggi-core
//!
//! 外部エンジンを使わずに対局を進めるためのチャンギ（韓国将棋）ルールエンジン。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, Piece, PieceType, Square, Move, SetupVariant）
//! - `board`: 10x9 盤面、宮（palace）判定、初期配置、FEN 形式の入出力
//! - `movegen`: 駒種別の合法手生成と全合法手の列挙
//! - `result`: 終局判定（将の捕獲と相互侵入による引き分け）
//! - `policy`: 指し手選択戦略（一様ランダム / 駒得）
//! - `notation`: `(row, col)` と代数表記（"e4" 等）の変換
//! - `rules`: ルール切り替え（将の安全確認、宮内の斜め移動）
//! - `session`: 1局分の状態管理（UI / 自動対局との境界）
//!
//! 盤面は不変値として扱い、指し手の適用は常に新しい `Board` を返す。

pub mod board;
pub mod movegen;
pub mod notation;
pub mod policy;
pub mod result;
pub mod rules;
pub mod session;
pub mod types;

pub use board::{Board, FenError};
pub use movegen::{apply_move, get_all_legal_moves, legal_destinations};
pub use notation::{notation_to_position, position_to_notation};
pub use policy::{get_ai_move, MoveStrategy};
pub use result::{get_game_result, GameResult};
pub use rules::Rules;
pub use session::{GameSession, SessionError, StepOutcome};
pub use types::{Move, Piece, PieceType, SetupVariant, Side, Square};

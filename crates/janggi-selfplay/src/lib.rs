//! # janggi-selfplay
//!
//! 戦略同士の自己対局ハーネス。1 手ごとのイベントと対局結果を JSONL に書き出す。

pub mod selfplay;

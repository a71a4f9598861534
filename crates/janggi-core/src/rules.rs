//! ルール設定
//!
//! 既定値（全て false）は簡略版のルールで、次の 2 点を行わない。
//! - 自分の将が取られる状態になる手を除外しない
//! - 宮の斜線に沿った車・包・卒の移動を生成しない
//!
//! どちらも明示的に有効化できる。

use serde::{Deserialize, Serialize};

/// 合法手生成のルール切り替え
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// 指した後に自分の将が相手の次の手で取られる手を除外する
    pub enforce_general_safety: bool,
    /// 宮の斜線に沿った移動を有効にする
    ///
    /// 車は斜線上を滑り、包は斜線上で駒を飛び越え、卒は敵の宮で斜め前に進める。
    /// 士・将の斜め移動は斜線上に限られる。
    pub palace_diagonals: bool,
}

impl Rules {
    /// 将の安全確認と宮の斜線移動を両方とも有効にしたルール
    pub const fn standard() -> Rules {
        Rules { enforce_general_safety: true, palace_diagonals: true }
    }
}

use std::str::FromStr;

use janggi_core::{GameResult, SetupVariant, Side};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 対局の勝敗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    InProgress,
    HanWin,
    ChoWin,
    Draw,
}

impl GameOutcome {
    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "in_progress",
            GameOutcome::HanWin => "han_win",
            GameOutcome::ChoWin => "cho_win",
            GameOutcome::Draw => "draw",
        }
    }

    /// 指定陣営の勝ち
    pub fn win_for(side: Side) -> GameOutcome {
        match side {
            Side::Han => GameOutcome::HanWin,
            Side::Cho => GameOutcome::ChoWin,
        }
    }
}

impl From<GameResult> for GameOutcome {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::HanWins => GameOutcome::HanWin,
            GameResult::ChoWins => GameOutcome::ChoWin,
            GameResult::Draw => GameOutcome::Draw,
            GameResult::Ongoing => GameOutcome::InProgress,
        }
    }
}

/// 終局理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// 将が取られた
    GeneralCaptured,
    /// 両将の相互侵入による引き分け
    Bikjang,
    /// 手番側に合法手が無い（手番側の負け）
    NoLegalMove,
    /// 手数上限（引き分け）
    MaxPlies,
    /// 停止要求（未完了）
    Stopped,
}

impl EndReason {
    pub fn label(self) -> &'static str {
        match self {
            EndReason::GeneralCaptured => "general_captured",
            EndReason::Bikjang => "bikjang",
            EndReason::NoLegalMove => "no_legal_move",
            EndReason::MaxPlies => "max_plies",
            EndReason::Stopped => "stopped",
        }
    }
}

/// JSONL 出力用の陣営ラベル
pub fn side_label(side: Side) -> char {
    match side {
        Side::Han => 'h',
        Side::Cho => 'c',
    }
}

/// 初期配置の指定（固定または対局ごとにランダム）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    Fixed(SetupVariant),
    Random,
}

impl SetupChoice {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> SetupVariant {
        match self {
            SetupChoice::Fixed(variant) => variant,
            SetupChoice::Random => {
                SetupVariant::ALL.choose(rng).copied().unwrap_or_default()
            }
        }
    }
}

impl FromStr for SetupChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            return Ok(SetupChoice::Random);
        }
        s.parse::<SetupVariant>()
            .map(SetupChoice::Fixed)
            .map_err(|_| format!("unknown setup '{s}' (expected hehe|eheh|heeh|ehhe|random)"))
    }
}

impl std::fmt::Display for SetupChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupChoice::Fixed(variant) => write!(f, "{variant}"),
            SetupChoice::Random => f.write_str("random"),
        }
    }
}

/// 対局セッション全体の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub total_games: u32,
    pub han_wins: u32,
    pub cho_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl SummaryCounts {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.total_games += 1;
        match outcome {
            GameOutcome::HanWin => self.han_wins += 1,
            GameOutcome::ChoWin => self.cho_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => self.unfinished += 1,
        }
    }

    /// 完了した対局に対する割合
    pub fn rate(&self, count: u32) -> f64 {
        let finished = self.total_games - self.unfinished;
        if finished == 0 {
            0.0
        } else {
            count as f64 / finished as f64
        }
    }
}

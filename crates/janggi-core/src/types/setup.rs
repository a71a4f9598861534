//! 初期配置の選択（SetupVariant）

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PieceType;

/// 馬と象の初期配置（4 通り）
///
/// 最下段の column 1, 2, 6, 7 に置く駒を、盤の column 順（左から右）に並べた名前で表す。
/// 陣営ごとに独立して選ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SetupVariant {
    /// 馬象馬象
    #[serde(rename = "hehe")]
    HorseElephantHorseElephant,
    /// 象馬象馬
    #[serde(rename = "eheh")]
    ElephantHorseElephantHorse,
    /// 馬象象馬
    #[default]
    #[serde(rename = "heeh")]
    HorseElephantElephantHorse,
    /// 象馬馬象
    #[serde(rename = "ehhe")]
    ElephantHorseHorseElephant,
}

impl SetupVariant {
    /// 全ての配置
    pub const ALL: [SetupVariant; 4] = [
        SetupVariant::HorseElephantHorseElephant,
        SetupVariant::ElephantHorseElephantHorse,
        SetupVariant::HorseElephantElephantHorse,
        SetupVariant::ElephantHorseHorseElephant,
    ];

    /// 配置する column
    pub const COLUMNS: [i8; 4] = [1, 2, 6, 7];

    /// `COLUMNS` の順に並べた駒種
    pub const fn pieces(self) -> [PieceType; 4] {
        use PieceType::{Elephant as E, Horse as H};
        match self {
            SetupVariant::HorseElephantHorseElephant => [H, E, H, E],
            SetupVariant::ElephantHorseElephantHorse => [E, H, E, H],
            SetupVariant::HorseElephantElephantHorse => [H, E, E, H],
            SetupVariant::ElephantHorseHorseElephant => [E, H, H, E],
        }
    }

    /// 短縮名（"hehe" 等）
    pub const fn short_name(self) -> &'static str {
        match self {
            SetupVariant::HorseElephantHorseElephant => "hehe",
            SetupVariant::ElephantHorseElephantHorse => "eheh",
            SetupVariant::HorseElephantElephantHorse => "heeh",
            SetupVariant::ElephantHorseHorseElephant => "ehhe",
        }
    }
}

impl FromStr for SetupVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SetupVariant::ALL
            .into_iter()
            .find(|v| v.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown setup variant '{s}' (expected hehe|eheh|heeh|ehhe)"))
    }
}

impl std::fmt::Display for SetupVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

//! 陣営（Side）

use serde::{Deserialize, Serialize};

/// 陣営（漢 / 楚）
///
/// 漢（Han）は盤の北側（row 0-2 に宮）、楚（Cho）は南側（row 7-9 に宮）に配置される。
/// 駒の符号は漢が正、楚が負。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Han = 0,
    Cho = 1,
}

impl Side {
    /// 陣営の数
    pub const NUM: usize = 2;

    /// 全ての陣営
    pub const ALL: [Side; 2] = [Side::Han, Side::Cho];

    /// 相手の陣営を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Han => Side::Cho,
            Side::Cho => Side::Han,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 駒値に掛ける符号（漢 = +1, 楚 = -1）
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Side::Han => 1,
            Side::Cho => -1,
        }
    }

    /// 卒・兵が前進する row 方向
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Han => 1,
            Side::Cho => -1,
        }
    }

    /// 自陣の最下段（後方の段）
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Side::Han => 0,
            Side::Cho => 9,
        }
    }

    /// ログ・JSON 出力用のラベル
    pub const fn label(self) -> &'static str {
        match self {
            Side::Han => "han",
            Side::Cho => "cho",
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Han.opponent(), Side::Cho);
        assert_eq!(Side::Cho.opponent(), Side::Han);
        assert_eq!(!Side::Han, Side::Cho);
    }

    #[test]
    fn test_side_direction() {
        // 漢は row が増える方向、楚は減る方向に前進する
        assert_eq!(Side::Han.forward(), 1);
        assert_eq!(Side::Cho.forward(), -1);
        assert_eq!(Side::Han.back_row(), 0);
        assert_eq!(Side::Cho.back_row(), 9);
    }
}

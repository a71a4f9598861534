//! 駒の移動テーブル
//!
//! 全ての駒の移動パターンをここで一元的に定義する。オフセットは `(drow, dcol)`。

use crate::types::Square;

/// 直交 4 方向
pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 斜め 4 方向
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 士・将の 1 マス移動（直交 4 + 斜め 4）
pub const PALACE_STEPS: [(i8, i8); 8] =
    [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 跳ぶ駒の経路
///
/// `legs` の升が全て空いているときだけ `landing` に着地できる。
#[derive(Debug, Clone, Copy)]
pub struct LeaperPath {
    pub legs: &'static [(i8, i8)],
    pub landing: (i8, i8),
}

/// 馬: 直交に 1 マス（脚）進んでから、同じ向きの斜めに 1 マス
pub const HORSE_PATHS: [LeaperPath; 8] = [
    LeaperPath { legs: &[(-1, 0)], landing: (-2, -1) },
    LeaperPath { legs: &[(-1, 0)], landing: (-2, 1) },
    LeaperPath { legs: &[(1, 0)], landing: (2, -1) },
    LeaperPath { legs: &[(1, 0)], landing: (2, 1) },
    LeaperPath { legs: &[(0, -1)], landing: (-1, -2) },
    LeaperPath { legs: &[(0, -1)], landing: (1, -2) },
    LeaperPath { legs: &[(0, 1)], landing: (-1, 2) },
    LeaperPath { legs: &[(0, 1)], landing: (1, 2) },
];

/// 象: 馬の経路を同じ斜めにもう 1 マス延ばしたもの（脚 2 つ）
pub const ELEPHANT_PATHS: [LeaperPath; 8] = [
    LeaperPath { legs: &[(-1, 0), (-2, -1)], landing: (-3, -2) },
    LeaperPath { legs: &[(-1, 0), (-2, 1)], landing: (-3, 2) },
    LeaperPath { legs: &[(1, 0), (2, -1)], landing: (3, -2) },
    LeaperPath { legs: &[(1, 0), (2, 1)], landing: (3, 2) },
    LeaperPath { legs: &[(0, -1), (-1, -2)], landing: (-2, -3) },
    LeaperPath { legs: &[(0, -1), (1, -2)], landing: (2, -3) },
    LeaperPath { legs: &[(0, 1), (-1, 2)], landing: (-2, 3) },
    LeaperPath { legs: &[(0, 1), (1, 2)], landing: (2, 3) },
];

/// 宮の斜線（隅 - 中心 - 隅）。`(row, col)` の絶対座標。
pub const PALACE_DIAGONALS: [[(i8, i8); 3]; 4] = [
    [(0, 3), (1, 4), (2, 5)],
    [(0, 5), (1, 4), (2, 3)],
    [(7, 3), (8, 4), (9, 5)],
    [(7, 5), (8, 4), (9, 3)],
];

/// `from` から (dr, dc) 方向に盤端まで伸びる升目列
pub fn ray(from: Square, dr: i8, dc: i8) -> impl Iterator<Item = Square> {
    std::iter::successors(from.offset(dr, dc), move |sq| sq.offset(dr, dc))
}

/// `from` から宮の斜線に沿って伸びる升目列（方向ごと、近い順）
///
/// `from` が斜線上に無ければ空。
pub fn palace_diagonal_rays(from: Square) -> Vec<Vec<Square>> {
    let pos = (from.row(), from.col());
    let mut rays = Vec::new();
    for line in &PALACE_DIAGONALS {
        let Some(i) = line.iter().position(|&p| p == pos) else {
            continue;
        };
        let forward = to_squares(line[i + 1..].iter());
        let backward = to_squares(line[..i].iter().rev());
        rays.extend([forward, backward].into_iter().filter(|r| !r.is_empty()));
    }
    rays
}

fn to_squares<'a>(points: impl Iterator<Item = &'a (i8, i8)>) -> Vec<Square> {
    points.filter_map(|&(r, c)| Square::new(r, c)).collect()
}

/// 宮の斜線に沿って 1 マスで行ける升目
pub fn palace_diagonal_neighbors(from: Square) -> impl Iterator<Item = Square> {
    palace_diagonal_rays(from).into_iter().filter_map(|r| r.first().copied())
}

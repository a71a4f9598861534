//! 合法手からの一様ランダムな指し手選択

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::MoveStrategy;
use crate::board::Board;
use crate::movegen::get_all_legal_moves_with_rules;
use crate::rules::Rules;
use crate::types::{Move, Side};

/// 合法手から一様ランダムに選ぶ戦略
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = Xoshiro256PlusPlus> {
    rng: R,
}

impl RandomStrategy<Xoshiro256PlusPlus> {
    /// シード固定（再現可能）
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy { rng: Xoshiro256PlusPlus::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl<R: Rng> MoveStrategy for RandomStrategy<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_move(&mut self, board: &Board, side: Side, rules: &Rules) -> Option<Move> {
        get_all_legal_moves_with_rules(board, side, rules).choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_strategy_is_reproducible() {
        let board = Board::default();
        let rules = Rules::default();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..16 {
            assert_eq!(
                a.select_move(&board, Side::Cho, &rules),
                b.select_move(&board, Side::Cho, &rules)
            );
        }
    }

    #[test]
    fn test_random_strategy_covers_moves() {
        // 十分な回数引けば複数の手が選ばれる
        let board = Board::default();
        let rules = Rules::default();
        let mut strategy = RandomStrategy::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(strategy.select_move(&board, Side::Han, &rules).unwrap());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_random_strategy_no_moves() {
        let mut strategy = RandomStrategy::new(Xoshiro256PlusPlus::seed_from_u64(0));
        assert_eq!(strategy.select_move(&Board::empty(), Side::Han, &Rules::default()), None);
    }
}

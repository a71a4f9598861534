//! 1局分の対局状態
//!
//! UI と自動対局の境界。指し手は必ず合法手集合に含まれるかを確認してから適用する。
//! 停止フラグは手と手の間でのみ確認するため、適用中の手は常に完了する。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::Board;
use crate::movegen::{is_legal_move, legal_destinations_with_rules};
use crate::policy::MoveStrategy;
use crate::result::{get_game_result, GameResult};
use crate::rules::Rules;
use crate::types::{Move, SetupVariant, Side, Square};

/// 対局操作のエラー
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// 既に終局している
    #[error("game is already over ({0})")]
    GameOver(GameResult),

    /// 合法手集合に含まれない指し手
    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// `GameSession::step` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// 1 手指した
    Played { mv: Move, result: GameResult },
    /// 手番側に合法手が無い（盤面は変わらない）
    NoLegalMove,
    /// 停止要求により指さなかった
    Stopped,
}

/// 1局分の対局状態
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: Side,
    rules: Rules,
    history: Vec<Move>,
    stop: Arc<AtomicBool>,
}

impl GameSession {
    /// 初期局面から開始する（楚が先手）
    pub fn new(setup_han: SetupVariant, setup_cho: SetupVariant, rules: Rules) -> Self {
        Self::from_board(Board::initial(setup_han, setup_cho), Side::Cho, rules)
    }

    /// 任意の局面から開始する
    pub fn from_board(board: Board, side_to_move: Side, rules: Rules) -> Self {
        GameSession {
            board,
            side_to_move,
            rules,
            history: Vec::new(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 停止フラグを外部のものに差し替える（複数局で共有する場合）
    #[must_use]
    pub fn with_stop_handle(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 適用済みの指し手
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// 現局面の対局結果
    pub fn result(&self) -> GameResult {
        get_game_result(&self.board)
    }

    /// 停止フラグ（別スレッドから設定する）
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// 停止が要求されているか
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// 手番側の駒の移動先（UI の候補表示用）
    ///
    /// 終局後、または手番側の駒でなければ空。
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.result().is_terminal() {
            return Vec::new();
        }
        legal_destinations_with_rules(&self.board, from, self.side_to_move, &self.rules)
    }

    /// 手番側の指し手を検証して適用する
    pub fn play_move(&mut self, mv: Move) -> Result<GameResult, SessionError> {
        let current = self.result();
        if current.is_terminal() {
            return Err(SessionError::GameOver(current));
        }
        if !is_legal_move(&self.board, mv, self.side_to_move, &self.rules) {
            return Err(SessionError::IllegalMove(mv));
        }

        self.board = self.board.apply_move(mv);
        self.history.push(mv);
        log::debug!("ply {}: {} {}", self.history.len(), self.side_to_move, mv);
        self.side_to_move = self.side_to_move.opponent();

        let result = self.result();
        if result.is_terminal() {
            log::debug!("game over after {} plies: {result}", self.history.len());
        }
        Ok(result)
    }

    /// 戦略に手番側の指し手を選ばせて 1 手進める
    pub fn step(&mut self, strategy: &mut dyn MoveStrategy) -> Result<StepOutcome, SessionError> {
        if self.is_stopped() {
            return Ok(StepOutcome::Stopped);
        }
        let current = self.result();
        if current.is_terminal() {
            return Err(SessionError::GameOver(current));
        }

        let Some(mv) = strategy.select_move(&self.board, self.side_to_move, &self.rules) else {
            log::debug!("{} ({}) has no legal move", self.side_to_move, strategy.name());
            return Ok(StepOutcome::NoLegalMove);
        };
        let result = self.play_move(mv)?;
        Ok(StepOutcome::Played { mv, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::RandomStrategy;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).unwrap()
    }

    /// 常に同じ手を返す戦略
    struct Fixed(Option<Move>);

    impl MoveStrategy for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn select_move(&mut self, _: &Board, _: Side, _: &Rules) -> Option<Move> {
            self.0
        }
    }

    #[test]
    fn test_new_session_cho_first() {
        let session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        assert_eq!(session.side_to_move(), Side::Cho);
        assert_eq!(session.result(), GameResult::Ongoing);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_play_move_flips_side() {
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let mv = Move::new(sq(6, 4), sq(5, 4));
        assert_eq!(session.play_move(mv), Ok(GameResult::Ongoing));
        assert_eq!(session.side_to_move(), Side::Han);
        assert_eq!(session.history(), &[mv]);
    }

    #[test]
    fn test_play_move_rejects_illegal() {
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let before = *session.board();
        // 卒は後退できない
        let backward = Move::new(sq(6, 4), sq(7, 4));
        assert_eq!(session.play_move(backward), Err(SessionError::IllegalMove(backward)));
        // 相手の駒は動かせない
        let han_soldier = Move::new(sq(3, 4), sq(4, 4));
        assert_eq!(session.play_move(han_soldier), Err(SessionError::IllegalMove(han_soldier)));
        assert_eq!(*session.board(), before);
        assert_eq!(session.side_to_move(), Side::Cho);
    }

    #[test]
    fn test_play_move_after_game_over() {
        // 楚の車が漢の将を取って終局
        let board = Board::from_fen("9/4k4/9/9/9/4R4/9/9/4K4/9").unwrap();
        let mut session = GameSession::from_board(board, Side::Cho, Rules::default());
        let capture = Move::new(sq(5, 4), sq(1, 4));
        assert_eq!(session.play_move(capture), Ok(GameResult::ChoWins));
        assert!(session.legal_destinations(sq(8, 4)).is_empty());

        let next = Move::new(sq(8, 4), sq(8, 3));
        assert_eq!(session.play_move(next), Err(SessionError::GameOver(GameResult::ChoWins)));
        assert_eq!(
            session.step(&mut Fixed(Some(next))),
            Err(SessionError::GameOver(GameResult::ChoWins))
        );
    }

    #[test]
    fn test_legal_destinations_only_for_side_to_move() {
        let session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let mut dests = session.legal_destinations(sq(9, 0));
        dests.sort();
        assert_eq!(dests, vec![sq(7, 0), sq(8, 0)]);
        // 手番でない漢の駒には候補が出ない
        assert!(session.legal_destinations(sq(3, 4)).is_empty());
    }

    #[test]
    fn test_step_plays_strategy_move() {
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let mut strategy = RandomStrategy::seeded(5);
        match session.step(&mut strategy) {
            Ok(StepOutcome::Played { mv, result }) => {
                assert_eq!(result, GameResult::Ongoing);
                assert_eq!(session.history(), &[mv]);
            }
            other => panic!("unexpected step outcome: {other:?}"),
        }
    }

    #[test]
    fn test_step_rejects_illegal_strategy_move() {
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let bad = Move::new(sq(9, 0), sq(0, 0));
        assert_eq!(session.step(&mut Fixed(Some(bad))), Err(SessionError::IllegalMove(bad)));
    }

    #[test]
    fn test_step_without_cho_pieces_is_game_over() {
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/9/9").unwrap();
        let mut session = GameSession::from_board(board, Side::Cho, Rules::default());
        assert_eq!(session.result(), GameResult::HanWins);
        assert_eq!(session.step(&mut Fixed(None)), Err(SessionError::GameOver(GameResult::HanWins)));
    }

    #[test]
    fn test_step_no_legal_move_keeps_ongoing() {
        // 楚の将 (9,3) の移動先は全て漢の車 2 枚に利かされている
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/r8/3K4r").unwrap();
        let rules = Rules { enforce_general_safety: true, ..Rules::default() };
        let mut session = GameSession::from_board(board, Side::Cho, rules);
        assert_eq!(session.result(), GameResult::Ongoing);

        let mut strategy = RandomStrategy::seeded(2);
        assert_eq!(session.step(&mut strategy), Ok(StepOutcome::NoLegalMove));
        assert!(session.history().is_empty());
        assert_eq!(session.side_to_move(), Side::Cho);
        assert_eq!(session.result(), GameResult::Ongoing);
    }

    #[test]
    fn test_stop_handle_halts_stepping() {
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let stop = session.stop_handle();
        stop.store(true, Ordering::Relaxed);
        let mut strategy = RandomStrategy::seeded(9);
        assert_eq!(session.step(&mut strategy), Ok(StepOutcome::Stopped));
        assert!(session.history().is_empty());
        assert!(session.is_stopped());
    }

    #[test]
    fn test_shared_stop_handle() {
        let stop = Arc::new(AtomicBool::new(false));
        let mut session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default())
            .with_stop_handle(Arc::clone(&stop));
        let mut strategy = RandomStrategy::seeded(4);
        assert!(matches!(session.step(&mut strategy), Ok(StepOutcome::Played { .. })));
        stop.store(true, Ordering::Relaxed);
        assert_eq!(session.step(&mut strategy), Ok(StepOutcome::Stopped));
        assert_eq!(session.history().len(), 1);
    }
}

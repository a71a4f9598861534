use anyhow::Result;
use janggi_core::policy::MoveStrategy;
use janggi_core::{Board, GameResult, GameSession, Move, Side, StepOutcome};

use super::types::{EndReason, GameOutcome};

/// ゲーム設定
pub struct GameConfig {
    /// この手数に達したら引き分け
    pub max_plies: u32,
}

/// 1手ごとに呼ばれるイベント
pub struct MoveEvent {
    pub ply: u32,
    pub side: Side,
    pub mv: Move,
    pub fen_after: String,
    pub strategy: &'static str,
}

/// 対局結果
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub reason: EndReason,
    pub plies: u32,
    pub final_board: Board,
}

/// 1局を実行する。
///
/// - `session`: 開始局面と手番、停止フラグを設定済みのセッション
/// - `han`, `cho`: 各陣営の指し手選択戦略
/// - `config`: ゲーム設定
/// - `on_move`: 1手ごとに呼ばれるコールバック
pub fn run_game(
    mut session: GameSession,
    han: &mut dyn MoveStrategy,
    cho: &mut dyn MoveStrategy,
    config: &GameConfig,
    on_move: &mut dyn FnMut(&MoveEvent),
) -> Result<GameRecord> {
    let mut outcome = GameOutcome::InProgress;
    let mut reason = EndReason::MaxPlies;

    let initial = session.result();
    if initial.is_terminal() {
        return Ok(finish(&session, initial.into(), end_reason(initial)));
    }

    while (session.history().len() as u32) < config.max_plies {
        let side = session.side_to_move();
        let strategy: &mut dyn MoveStrategy = match side {
            Side::Han => &mut *han,
            Side::Cho => &mut *cho,
        };
        let name = strategy.name();

        match session.step(strategy)? {
            StepOutcome::Played { mv, result } => {
                on_move(&MoveEvent {
                    ply: session.history().len() as u32,
                    side,
                    mv,
                    fen_after: session.board().to_fen(),
                    strategy: name,
                });
                if result.is_terminal() {
                    outcome = result.into();
                    reason = end_reason(result);
                    break;
                }
            }
            StepOutcome::NoLegalMove => {
                outcome = GameOutcome::win_for(side.opponent());
                reason = EndReason::NoLegalMove;
                break;
            }
            StepOutcome::Stopped => {
                reason = EndReason::Stopped;
                break;
            }
        }
    }

    if outcome == GameOutcome::InProgress && reason == EndReason::MaxPlies {
        outcome = GameOutcome::Draw;
    }
    Ok(finish(&session, outcome, reason))
}

fn end_reason(result: GameResult) -> EndReason {
    if result == GameResult::Draw {
        EndReason::Bikjang
    } else {
        EndReason::GeneralCaptured
    }
}

fn finish(session: &GameSession, outcome: GameOutcome, reason: EndReason) -> GameRecord {
    GameRecord {
        outcome,
        reason,
        plies: session.history().len() as u32,
        final_board: *session.board(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janggi_core::policy::RandomStrategy;
    use janggi_core::{Rules, SetupVariant};

    #[test]
    fn test_max_plies_is_draw() {
        let session = GameSession::new(SetupVariant::default(), SetupVariant::default(), Rules::default());
        let mut han = RandomStrategy::seeded(1);
        let mut cho = RandomStrategy::seeded(2);
        let mut events = 0;
        let record = run_game(session, &mut han, &mut cho, &GameConfig { max_plies: 0 }, &mut |_: &MoveEvent| {
            events += 1
        })
        .unwrap();
        assert_eq!(record.outcome, GameOutcome::Draw);
        assert_eq!(record.reason, EndReason::MaxPlies);
        assert_eq!(record.plies, 0);
        assert_eq!(events, 0);
    }

    #[test]
    fn test_move_events_follow_plies() {
        // 楚の車が漢の将を狙える局面
        let board = Board::from_fen("9/4k4/9/9/9/4R4/9/9/4K4/9").unwrap();
        let session = GameSession::from_board(board, Side::Cho, Rules::default());
        let mut han = RandomStrategy::seeded(0);
        let mut cho = janggi_core::policy::MaterialGreedyStrategy::seeded(0);
        let mut sides = Vec::new();
        let record = run_game(session, &mut han, &mut cho, &GameConfig { max_plies: 200 }, &mut |ev: &MoveEvent| {
            sides.push(ev.side)
        })
        .unwrap();
        assert_ne!(record.reason, EndReason::Stopped);
        assert_eq!(sides.first(), Some(&Side::Cho));
        assert_eq!(record.plies as usize, sides.len());
    }

    #[test]
    fn test_already_finished_position() {
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/9/9").unwrap();
        let session = GameSession::from_board(board, Side::Cho, Rules::default());
        let mut han = RandomStrategy::seeded(0);
        let mut cho = RandomStrategy::seeded(0);
        let record =
            run_game(session, &mut han, &mut cho, &GameConfig { max_plies: 10 }, &mut |_: &MoveEvent| {}).unwrap();
        assert_eq!(record.outcome, GameOutcome::HanWin);
        assert_eq!(record.reason, EndReason::GeneralCaptured);
        assert_eq!(record.plies, 0);
    }

    #[test]
    fn test_no_legal_move_loses() {
        let board = Board::from_fen("4k4/9/9/9/9/9/9/9/r8/3K4r").unwrap();
        let rules = Rules { enforce_general_safety: true, ..Rules::default() };
        let session = GameSession::from_board(board, Side::Cho, rules);
        let mut han = RandomStrategy::seeded(0);
        let mut cho = RandomStrategy::seeded(0);
        let record =
            run_game(session, &mut han, &mut cho, &GameConfig { max_plies: 10 }, &mut |_: &MoveEvent| {}).unwrap();
        assert_eq!(record.outcome, GameOutcome::HanWin);
        assert_eq!(record.reason, EndReason::NoLegalMove);
    }
}

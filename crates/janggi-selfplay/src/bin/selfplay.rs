use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use janggi_core::policy::StrategyKind;
use janggi_core::{GameSession, Rules};
use janggi_selfplay::selfplay::{
    resolve_rules, run_game, side_label, GameConfig, MoveEvent, SetupChoice, SummaryCounts,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

/// 戦略同士の自己対局ハーネス。
///
/// # よく使うコマンド例
///
/// - ランダム同士で 10 局（デフォルト出力先）:
///   `cargo run -p janggi-selfplay -- --games 10`
///
/// - 駒得戦略 vs ランダム、配置固定、シード指定:
///   `cargo run -p janggi-selfplay -- --games 100 --han material --cho random --han-setup heeh --cho-setup ehhe --seed 42`
///
/// - 宮の斜線移動と将の安全確認を有効にして盤面を表示:
///   `cargo run -p janggi-selfplay -- --palace-diagonals --enforce-general-safety --print-board`
///
/// `--out` 未指定時は `runs/selfplay/<timestamp>-selfplay.jsonl` に書き出す。
#[derive(Parser, Debug)]
#[command(author, version, about = "janggi selfplay harness (strategy vs strategy)")]
struct Cli {
    /// Number of games to run
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Maximum plies per game before declaring a draw
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Master random seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Strategy for Han (random|material)
    #[arg(long, default_value_t = StrategyKind::Random)]
    han: StrategyKind,

    /// Strategy for Cho (random|material)
    #[arg(long, default_value_t = StrategyKind::Random)]
    cho: StrategyKind,

    /// Back-rank setup for Han (hehe|eheh|heeh|ehhe|random)
    #[arg(long, default_value_t = SetupChoice::Random)]
    han_setup: SetupChoice,

    /// Back-rank setup for Cho (hehe|eheh|heeh|ehhe|random)
    #[arg(long, default_value_t = SetupChoice::Random)]
    cho_setup: SetupChoice,

    /// TOML file with rule switches
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Drop moves that leave the mover's General capturable
    #[arg(long, default_value_t = false)]
    enforce_general_safety: bool,

    /// Enable movement along palace diagonal lines
    #[arg(long, default_value_t = false)]
    palace_diagonals: bool,

    /// Output JSONL path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the final board of each game to stdout
    #[arg(long, default_value_t = false)]
    print_board: bool,
}

#[derive(Serialize)]
struct MetaLog {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    settings: MetaSettings,
    output: String,
}

#[derive(Serialize)]
struct MetaSettings {
    games: u32,
    max_plies: u32,
    seed: u64,
    han: StrategyKind,
    cho: StrategyKind,
    han_setup: String,
    cho_setup: String,
    rules: Rules,
}

#[derive(Serialize)]
struct GameStartLog {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    han_setup: String,
    cho_setup: String,
    start_fen: String,
}

#[derive(Serialize)]
struct MoveLog<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    ply: u32,
    side: char,
    strategy: &'a str,
    #[serde(rename = "move")]
    mv: String,
    fen_after: &'a str,
}

#[derive(Serialize)]
struct ResultLog<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    game_id: u32,
    outcome: &'a str,
    reason: &'a str,
    plies: u32,
}

/// 対局セッション全体のサマリ
#[derive(Serialize)]
struct SummaryLog {
    #[serde(rename = "type")]
    kind: &'static str,
    timestamp: String,
    #[serde(flatten)]
    counts: SummaryCounts,
    han_win_rate: f64,
    cho_win_rate: f64,
    draw_rate: f64,
    stopped: bool,
}

fn write_jsonl<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, record)?;
    writer.write_all(b"\n")?;
    Ok(())
}

fn resolve_output_path(out: Option<&Path>, timestamp: &chrono::DateTime<Local>) -> PathBuf {
    if let Some(path) = out {
        return path.to_path_buf();
    }
    let dir = PathBuf::from("runs/selfplay");
    let name = format!("{}-selfplay.jsonl", timestamp.format("%Y%m%d-%H%M%S"));
    dir.join(name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be >= 1");
    }

    let rules = resolve_rules(cli.rules.as_deref(), cli.enforce_general_safety, cli.palace_diagonals)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let timestamp = Local::now();
    let output_path = resolve_output_path(cli.out.as_deref(), &timestamp);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let mut writer = BufWriter::new(
        File::create(&output_path)
            .with_context(|| format!("failed to open {}", output_path.display()))?,
    );

    let shutdown = Arc::new(AtomicBool::new(false));
    // Ctrl-C ハンドラ
    {
        let shutdown_clone = Arc::clone(&shutdown);
        ctrlc::set_handler(move || {
            eprintln!("\nShutting down gracefully...");
            shutdown_clone.store(true, Ordering::Relaxed);
        })
        .ok();
    }

    let meta = MetaLog {
        kind: "meta",
        timestamp: timestamp.to_rfc3339(),
        settings: MetaSettings {
            games: cli.games,
            max_plies: cli.max_plies,
            seed,
            han: cli.han,
            cho: cli.cho,
            han_setup: cli.han_setup.to_string(),
            cho_setup: cli.cho_setup.to_string(),
            rules,
        },
        output: output_path.display().to_string(),
    };
    write_jsonl(&mut writer, &meta)?;

    log::info!(
        "selfplay: {} games, han={} cho={}, seed={seed}, rules={rules:?}",
        cli.games,
        cli.han,
        cli.cho
    );

    let config = GameConfig { max_plies: cli.max_plies };
    let mut summary = SummaryCounts::default();

    for game_idx in 0..cli.games {
        if shutdown.load(Ordering::Relaxed) {
            log::warn!("stop requested; skipping remaining {} games", cli.games - game_idx);
            break;
        }
        let game_id = game_idx + 1;
        let setup_han = cli.han_setup.pick(&mut rng);
        let setup_cho = cli.cho_setup.pick(&mut rng);
        let mut han = cli.han.build(rng.random());
        let mut cho = cli.cho.build(rng.random());

        let session =
            GameSession::new(setup_han, setup_cho, rules).with_stop_handle(Arc::clone(&shutdown));
        write_jsonl(
            &mut writer,
            &GameStartLog {
                kind: "game",
                game_id,
                han_setup: setup_han.to_string(),
                cho_setup: setup_cho.to_string(),
                start_fen: session.board().to_fen(),
            },
        )?;

        let mut write_error = None;
        let record = run_game(session, &mut han, &mut cho, &config, &mut |event: &MoveEvent| {
            if write_error.is_some() {
                return;
            }
            let log = MoveLog {
                kind: "move",
                game_id,
                ply: event.ply,
                side: side_label(event.side),
                strategy: event.strategy,
                mv: event.mv.to_notation(),
                fen_after: &event.fen_after,
            };
            if let Err(err) = write_jsonl(&mut writer, &log) {
                write_error = Some(err);
            }
        })?;
        if let Some(err) = write_error {
            return Err(err.context(format!("failed to write move log for game {game_id}")));
        }

        write_jsonl(
            &mut writer,
            &ResultLog {
                kind: "result",
                game_id,
                outcome: record.outcome.label(),
                reason: record.reason.label(),
                plies: record.plies,
            },
        )?;
        writer.flush()?;
        summary.record(record.outcome);

        log::info!(
            "game {game_id}/{}: {} ({}) after {} plies",
            cli.games,
            record.outcome.label(),
            record.reason.label(),
            record.plies
        );
        if cli.print_board {
            println!("game {game_id}: {} ({})", record.outcome.label(), record.reason.label());
            println!("{}", record.final_board);
        }
    }

    let summary_log = SummaryLog {
        kind: "summary",
        timestamp: Local::now().to_rfc3339(),
        han_win_rate: summary.rate(summary.han_wins),
        cho_win_rate: summary.rate(summary.cho_wins),
        draw_rate: summary.rate(summary.draws),
        counts: summary,
        stopped: shutdown.load(Ordering::Relaxed),
    };
    write_jsonl(&mut writer, &summary_log)?;
    writer.flush()?;

    log::info!(
        "done: han {} / cho {} / draw {} / unfinished {} -> {}",
        summary.han_wins,
        summary.cho_wins,
        summary.draws,
        summary.unfinished,
        output_path.display()
    );
    Ok(())
}

mod board;
mod calendar;
mod cli;
mod config;
mod error;
mod feed;
mod report;
mod score;
mod types;

use crate::board::Board;
use crate::cli::{FeedArgs, ReportFormat};
use crate::error::{BoardError, Result};
use crate::feed::edits::FileEditFeed;
use crate::feed::sample::{SampleEditFeed, SampleSessionFeed};
use crate::feed::sessions::FileSessionFeed;
use crate::feed::{EditSource, SessionSource};
use crate::types::config::CompetitionConfig;
use chrono::{DateTime, Utc};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn reference_instant(as_of: Option<DateTime<Utc>>) -> DateTime<Utc> {
    as_of.unwrap_or_else(Utc::now)
}

fn make_sources(
    args: &FeedArgs,
    cfg: &CompetitionConfig,
) -> Result<(Box<dyn EditSource>, Option<Box<dyn SessionSource>>)> {
    if args.sample {
        return Ok((
            Box::new(SampleEditFeed::new(cfg.critical_content.page_ids.clone())),
            Some(Box::new(SampleSessionFeed)),
        ));
    }

    let edits = args
        .edits
        .clone()
        .or_else(|| cfg.feeds.edits.clone())
        .ok_or(BoardError::NoEditFeed)?;
    let sessions = args.sessions.clone().or_else(|| cfg.feeds.sessions.clone());

    Ok((
        Box::new(FileEditFeed::new(edits)),
        sessions.map(|path| Box::new(FileSessionFeed::new(path)) as Box<dyn SessionSource>),
    ))
}

fn load_board(args: &FeedArgs) -> Result<Board> {
    let cfg = config::load_config(args.config.as_deref())?;
    let (edit_source, session_source) = make_sources(args, &cfg)?;
    let mut board = Board::new(
        &cfg,
        reference_instant(args.as_of),
        edit_source,
        session_source,
    );
    board.refresh()?;
    Ok(board)
}

fn finish(board: &Board) -> i32 {
    let skipped = board.skipped_session_rows();
    if skipped > 0 {
        eprintln!("warning: {skipped} session sheet rows skipped");
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Board(cmd) => {
            let board = load_board(&cmd.feeds)?;
            let name = cmd.contest.label();
            let contest = board
                .contest(name)
                .ok_or_else(|| BoardError::UnknownContest(name.to_string()))?;

            let mut rows = board.standings(contest);
            let total_participants = rows.len();
            if cmd.top > 0 {
                rows.truncate(cmd.top);
            }

            let output_format = match cmd.format {
                ReportFormat::Json => report::OutputFormat::Json,
                ReportFormat::Md => report::OutputFormat::Md,
                ReportFormat::Table => report::OutputFormat::Table,
            };
            let board_report = report::BoardReport::new(contest, rows, total_participants);
            println!("{}", report::render(&board_report, output_format)?);

            Ok(finish(&board))
        }
        cli::Commands::Edits(cmd) => {
            let board = load_board(&cmd.feeds)?;
            let name = cmd.contest.label();
            let contest = board
                .contest(name)
                .ok_or_else(|| BoardError::UnknownContest(name.to_string()))?;

            let mut listed: Vec<_> = board
                .scored_edits()
                .iter()
                .filter(|scored| contest.contains(scored.edit.occurred_at))
                .collect();
            listed.sort_by(|a, b| b.edit.occurred_at.cmp(&a.edit.occurred_at));

            if listed.is_empty() {
                println!("no edits found for {name}");
                return Ok(finish(&board));
            }

            println!("{} edits in {name}:", listed.len());
            for scored in listed {
                let bonus = scored
                    .bonus
                    .map(|bonus| format!("  [{}]", bonus.label()))
                    .unwrap_or_default();
                println!(
                    "{}  {}  {}  +{} chars x{} = {} pts{}",
                    scored.edit.occurred_at.format("%Y-%m-%d %H:%M UTC"),
                    scored.edit.page_title,
                    scored.edit.author.display_name,
                    scored.edit.character_delta,
                    scored.multiplier,
                    scored.effective_points(),
                    bonus
                );
            }

            Ok(finish(&board))
        }
        cli::Commands::Sessions(cmd) => {
            let cfg = config::load_config(cmd.feeds.config.as_deref())?;
            let schedule = calendar::schedule(&cfg, reference_instant(cmd.feeds.as_of));

            let source: Box<dyn SessionSource> = if cmd.feeds.sample {
                Box::new(SampleSessionFeed)
            } else {
                match cmd.feeds.sessions.clone().or_else(|| cfg.feeds.sessions.clone()) {
                    Some(path) => Box::new(FileSessionFeed::new(path)),
                    None => {
                        println!("no session feed configured");
                        return Ok(exit_code::WARNINGS);
                    }
                }
            };

            let batch = source.collect(&schedule)?;
            if batch.sessions.is_empty() {
                println!("no sessions found");
            } else {
                println!("{} unique sessions:", batch.sessions.len());
                for session in &batch.sessions {
                    println!(
                        "{}  {} to {}",
                        session.handle,
                        session.start.format("%Y-%m-%d %H:%M:%S UTC"),
                        session.end.format("%H:%M:%S UTC")
                    );
                }
            }

            if batch.skipped_rows > 0 {
                eprintln!("warning: {} session sheet rows skipped", batch.skipped_rows);
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Contests(cmd) => {
            let cfg = config::load_config(cmd.config.as_deref())?;
            let schedule = calendar::schedule(&cfg, reference_instant(cmd.as_of));

            for contest in &schedule.contests {
                println!(
                    "{}: {} to {}  prize: {}",
                    contest.name,
                    contest.start.format("%Y-%m-%d %H:%M UTC"),
                    contest.end.format("%Y-%m-%d %H:%M UTC"),
                    contest.prize
                );
            }
            println!(
                "critical content blitz: {} on {} pages",
                schedule.blitz_date,
                cfg.critical_content.page_ids.len()
            );

            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

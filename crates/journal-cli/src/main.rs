//! FX 매매일지 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 거래 기록 (손익은 표준랏 공식으로 파생)
//! fxjournal add -p EUR/USD -d buy -e 1.1000 -x 1.1050 -l 0.1
//!
//! # 손익을 직접 입력
//! fxjournal add -p GBP/USD -d sell -e 1.2500 -x 1.2480 --pnl 25.50
//!
//! # 이번 주 통계와 목표 진척도
//! fxjournal stats --period weekly
//!
//! # 주별 목표 설정
//! fxjournal goal set weekly 500
//!
//! # 전체 상태 내보내기
//! fxjournal export -o backup.json
//! ```

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use journal_cli::{
    add_trade, delete_trade, list_trades, print_chart_data, run_export, set_goal, set_settings,
    show_goals, show_settings, show_stats, AddTradeInput,
};
use journal_core::{parse_timestamp, AppConfig, LogConfig, LogFormat, Period};
use journal_storage::JournalStore;

#[derive(Parser)]
#[command(name = "fxjournal")]
#[command(about = "FX trade journal CLI - 수기 매매일지 및 성과 분석", long_about = None)]
#[command(version)]
struct Cli {
    /// 데이터 디렉터리 (설정 파일/환경 변수보다 우선)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 거래 기록 추가
    Add {
        /// 통화쌍 심볼 (예: EUR/USD)
        #[arg(short, long)]
        pair: String,

        /// 거래 방향 (buy / sell)
        #[arg(short, long)]
        direction: String,

        /// 진입 가격
        #[arg(short, long)]
        entry: String,

        /// 청산 가격
        #[arg(short = 'x', long)]
        exit: String,

        /// 랏 크기 (생략 시 설정의 기본 랏)
        #[arg(short, long)]
        lot: Option<String>,

        /// 실현 손익 (생략 시 표준랏 공식으로 파생)
        #[arg(long)]
        pnl: Option<String>,

        /// 거래 시각 (RFC3339 또는 YYYY-MM-DD, 생략 시 현재)
        #[arg(long)]
        date: Option<String>,

        /// 메모
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// 거래 삭제 (ID 기준)
    Delete {
        /// 거래 ID
        id: String,
    },

    /// 거래 목록 보기
    List {
        /// 기간 필터 (daily/weekly/monthly/yearly, 생략 시 전체)
        #[arg(long)]
        period: Option<String>,
    },

    /// 기간 통계 및 목표 진척도 보기
    Stats {
        /// 기간 필터 (daily/weekly/monthly/yearly, 생략 시 전체)
        #[arg(long)]
        period: Option<String>,

        /// 기준 시각 (생략 시 현재)
        #[arg(long)]
        date: Option<String>,
    },

    /// 차트 데이터 출력 (자산 곡선 + 승/패 분포, JSON)
    Chart {
        /// 기간 필터 (daily/weekly/monthly/yearly, 생략 시 전체)
        #[arg(long)]
        period: Option<String>,

        /// 기준 시각 (생략 시 현재)
        #[arg(long)]
        date: Option<String>,
    },

    /// 기간별 목표 관리
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// 설정 관리
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// 전체 상태를 단일 JSON 문서로 내보내기
    Export {
        /// 출력 파일 경로 (생략 시 자동 생성)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum GoalCommands {
    /// 목표 금액 설정 (0 = 목표 해제)
    Set {
        /// 기간 (daily/weekly/monthly/yearly)
        period: String,
        /// 목표 금액
        amount: String,
    },
    /// 저장된 목표 보기
    Show,
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// 설정 값 변경
    Set {
        /// 표시 통화 코드
        #[arg(long)]
        currency: Option<String>,

        /// 기본 랏 크기
        #[arg(long)]
        default_lot: Option<String>,

        /// 알림 표시 여부
        #[arg(long)]
        notifications: Option<bool>,
    },
    /// 저장된 설정 보기
    Show,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_default().context("설정 로드 실패")?;
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }

    let log_format = LogFormat::from_str(&config.logging.format).unwrap_or_default();
    let log_config = LogConfig::new(&config.logging.level).with_format(log_format);
    if let Err(err) = journal_core::init_logging(&log_config) {
        eprintln!("로깅 초기화 실패: {}", err);
    }

    let store = JournalStore::open(&config.data_dir)?;

    // 현재 시각은 이 경계에서만 주입됨 (엔진은 기준 시각을 인자로 받음)
    let now = Utc::now();

    match cli.command {
        Commands::Add {
            pair,
            direction,
            entry,
            exit,
            lot,
            pnl,
            date,
            notes,
        } => {
            add_trade(
                &store,
                AddTradeInput {
                    pair,
                    direction,
                    entry_price: entry,
                    exit_price: exit,
                    lot_size: lot,
                    profit_loss: pnl,
                    date,
                    notes,
                },
                now,
            )?;
        }
        Commands::Delete { id } => delete_trade(&store, &id)?,
        Commands::List { period } => {
            list_trades(&store, parse_period(period.as_deref())?, now)?
        }
        Commands::Stats { period, date } => {
            let reference = parse_reference(date.as_deref(), now)?;
            show_stats(&store, parse_period(period.as_deref())?, reference)?;
        }
        Commands::Chart { period, date } => {
            let reference = parse_reference(date.as_deref(), now)?;
            print_chart_data(&store, parse_period(period.as_deref())?, reference)?;
        }
        Commands::Goal { command } => match command {
            GoalCommands::Set { period, amount } => {
                let period = Period::from_str(&period).map_err(anyhow::Error::msg)?;
                set_goal(&store, period, &amount)?;
            }
            GoalCommands::Show => show_goals(&store)?,
        },
        Commands::Settings { command } => match command {
            SettingsCommands::Set {
                currency,
                default_lot,
                notifications,
            } => set_settings(&store, currency, default_lot, notifications)?,
            SettingsCommands::Show => show_settings(&store)?,
        },
        Commands::Export { output } => {
            run_export(&store, output, now)?;
        }
    }

    Ok(())
}

/// 기간 인자를 파싱합니다. 인식 불가 값은 경고 후 전체 기간으로 간주합니다.
fn parse_period(raw: Option<&str>) -> anyhow::Result<Option<Period>> {
    match raw {
        None => Ok(None),
        Some(raw) => match Period::from_str(raw) {
            Ok(period) => Ok(Some(period)),
            Err(message) => {
                // 인식할 수 없는 기간은 전체 기간으로 강등
                warn!(period = raw, "{}", message);
                Ok(None)
            }
        },
    }
}

/// 기준 시각 인자를 파싱합니다. 생략 시 현재 시각입니다.
fn parse_reference(raw: Option<&str>, now: DateTime<Utc>) -> anyhow::Result<DateTime<Utc>> {
    match raw {
        None => Ok(now),
        Some(raw) => parse_timestamp(raw)
            .with_context(|| format!("기준 시각 형식이 올바르지 않습니다: {}", raw)),
    }
}

//! 전체 상태 내보내기 명령.

use chrono::{DateTime, Utc};
use journal_storage::JournalStore;
use std::path::PathBuf;
use tracing::info;

/// 전체 상태를 단일 JSON 문서로 내보냅니다.
///
/// 출력 경로가 없으면 내보내기 시각으로 파일명을 만듭니다.
/// 내보내기는 단방향이며 복원 명령은 없습니다.
pub fn run_export(
    store: &JournalStore,
    output: Option<PathBuf>,
    now: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!("fxjournal-export-{}.json", now.format("%Y%m%d-%H%M%S")))
    });

    let document = store.write_export(&path, now)?;

    info!(path = %path.display(), trades = document.trades.len(), "내보내기 완료");
    println!(
        "내보냄: {} (거래 {}건)",
        path.display(),
        document.trades.len()
    );

    Ok(path)
}

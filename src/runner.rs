use crate::catalog::DownloadPlan;
use crate::error::{FetchError, Result};
use crate::utils::files::{ensure_directories, store_bytes};
use crate::utils::http::download_bytes;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of fetching one item
#[derive(Debug)]
pub enum FetchOutcome {
    Downloaded {
        destination: PathBuf,
    },
    Failed {
        destination: PathBuf,
        reason: FetchError,
    },
}

impl FetchOutcome {
    pub fn destination(&self) -> &Path {
        match self {
            Self::Downloaded { destination } | Self::Failed { destination, .. } => {
                destination.as_path()
            }
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, Self::Downloaded { .. })
    }
}

// The console line for the item. The failure reason only goes to the log.
impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Downloaded { destination } => {
                write!(f, "Downloaded {}", destination.display())
            }
            Self::Failed { destination, .. } => {
                write!(f, "Failed to download {}", destination.display())
            }
        }
    }
}

/// Outcomes of a run, in processing order
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl RunReport {
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_downloaded()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.downloaded()
    }
}

/// Download `source` into `destination`. Failures are returned, never raised.
pub async fn fetch_item(client: &reqwest::Client, source: &str, destination: &Path) -> FetchOutcome {
    let stored = match download_bytes(client, source).await {
        Ok(bytes) => store_bytes(destination, &bytes)
            .await
            .map(|()| bytes.len())
            .map_err(FetchError::from),
        Err(e) => Err(e),
    };

    match stored {
        Ok(len) => {
            tracing::debug!(%source, destination = %destination.display(), bytes = len, "Stored image");
            FetchOutcome::Downloaded {
                destination: destination.to_path_buf(),
            }
        }
        Err(reason) => {
            tracing::warn!(%source, destination = %destination.display(), %reason, "Download failed");
            FetchOutcome::Failed {
                destination: destination.to_path_buf(),
                reason,
            }
        }
    }
}

/// Progress bar over the items of a run, drawn on stderr
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Fetch every item of `plan` below `root`, events first.
///
/// Only a failure to create the destination directories aborts the run.
pub async fn run(
    client: &reqwest::Client,
    root: &Path,
    plan: &DownloadPlan,
    progress: &ProgressBar,
) -> Result<RunReport> {
    ensure_directories(root)?;

    let mut report = RunReport::default();
    for (category, item) in plan.entries() {
        let destination = category.directory(root).join(&item.file_name);
        let outcome = fetch_item(client, &item.source, &destination).await;

        progress.suspend(|| println!("{}", outcome));
        progress.inc(1);
        tracing::trace!(%category, destination = %outcome.destination().display(), "Item done");
        report.outcomes.push(outcome);
    }
    progress.finish_and_clear();

    tracing::info!(
        downloaded = report.downloaded(),
        failed = report.failed(),
        "Run finished"
    );
    Ok(report)
}

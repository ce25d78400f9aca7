use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::style::Stylize;
use tracing::{error, warn};

use crate::error::Error;
use crate::types::{Captured, OutputDestination, PodRef, RunConfig};
use crate::upload::Uploader;
use crate::utils::pod_color;

/// Interval kept after every upload attempt, in deference to the paste
/// server's unpublished rate limit.
pub const UPLOAD_PACING: Duration = Duration::from_secs(1);

/// Output directory for a base file name: everything up to the first dot,
/// or the whole name when there is none.
pub fn dir_name(base: &str) -> &str {
    base.split('.').next().unwrap_or(base)
}

/// Per-pod output path, `{dir}/{namespace}_{base}`. Two pods in the same
/// namespace share a path; last write wins.
pub fn pod_path(base: &str, namespace: &str) -> PathBuf {
    Path::new(dir_name(base)).join(format!("{namespace}_{base}"))
}

/// Write the rendered capture verbatim to the pod's path, creating the
/// directory if needed. The file handle is closed before this returns, so
/// no handles accumulate across pods.
fn persist(pod: &PodRef, captured: &Captured, base: &str) -> Result<PathBuf, Error> {
    let dir = dir_name(base);
    fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
        path: PathBuf::from(dir),
        source,
    })?;
    let path = pod_path(base, &pod.namespace);
    fs::write(&path, captured.render()).map_err(|source| Error::FileWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Send one pod's captured log to the run's destination. Console echo
/// happens before routing, so the console arm does no I/O here. Errors
/// are pod-local: they are reported and the batch moves on.
pub async fn route<U: Uploader>(
    pod: &PodRef,
    captured: &Captured,
    cfg: &RunConfig,
    uploader: &U,
    warned: &mut bool,
    out: &mut impl Write,
) {
    match &cfg.destination {
        OutputDestination::Console => {}
        OutputDestination::File { base } => {
            if let Err(err) = persist(pod, captured, base) {
                error!("{err}");
            }
        }
        OutputDestination::FileAndUpload {
            base,
            expires,
            ephemeral,
        } => {
            let path = match persist(pod, captured, base) {
                Ok(path) => path,
                Err(err) => {
                    // A file that was never written cannot be uploaded.
                    error!("{err}");
                    return;
                }
            };
            match uploader.upload(&path, *expires, warned).await {
                Ok(url) => {
                    let tag = format!("( {} )", pod.name).with(pod_color(&pod.name));
                    let _ = writeln!(out, "{} - {}: {}", uploader.endpoint().blue(), tag, url);
                    if *ephemeral {
                        if let Err(err) = fs::remove_file(&path) {
                            warn!("cannot remove {}: {err}", path.display());
                        }
                    }
                }
                Err(err) => error!("{err}"),
            }
            // Pacing applies to every attempt, successful or not, but only
            // when an upload actually went out.
            tokio::time::sleep(UPLOAD_PACING).await;
        }
    }
}

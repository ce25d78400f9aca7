use std::io::Write;

use crossterm::style::Stylize;
use tracing::{info, warn};

use crate::error::Error;
use crate::filter;
use crate::kubernetes::LogSource;
use crate::output;
use crate::types::{Captured, OutputDestination, PodRef, RunConfig};
use crate::upload::Uploader;
use crate::utils::pod_color;

/// Capture one pod's full log snapshot. A fetch failure is absorbed here
/// so one bad pod never stops the batch.
pub async fn capture<S: LogSource>(source: &S, pod: &PodRef) -> Captured {
    match source.fetch_logs(pod).await {
        Ok(text) => Captured::Text(text),
        Err(err) => {
            warn!("{err}");
            Captured::FetchFailed
        }
    }
}

/// Print each non-empty log line tagged with the pod's name.
fn echo(pod: &PodRef, text: &str, out: &mut impl Write) {
    let color = pod_color(&pod.name);
    for line in text.lines().filter(|line| !line.is_empty()) {
        let tag = format!("[{}]", pod.name).with(color);
        let _ = writeln!(out, "{tag}: {line}");
    }
}

/// Run the whole batch: list pods, filter by name, then capture and route
/// each survivor strictly in listing order. Partial completion is normal;
/// only the initial listing aborts the run.
pub async fn execute<S, U>(
    source: &S,
    uploader: &U,
    cfg: &RunConfig,
    out: &mut impl Write,
) -> Result<(), Error>
where
    S: LogSource,
    U: Uploader,
{
    let pods = source.list_pods(&cfg.namespace).await?;

    match &cfg.destination {
        OutputDestination::Console => {
            info!("fetching pod logs for namespace {}", cfg.namespace);
        }
        OutputDestination::File { base } | OutputDestination::FileAndUpload { base, .. } => {
            info!(
                "writing pod logs for namespace {} to {}",
                cfg.namespace, base
            );
        }
    }

    let mut warned = false;
    for pod in pods
        .iter()
        .filter(|pod| filter::selects(&cfg.pattern, &pod.name))
    {
        let captured = capture(source, pod).await;
        if cfg.destination == OutputDestination::Console {
            if let Captured::Text(text) = &captured {
                echo(pod, text, out);
            }
            let _ = writeln!(out, "---");
        }
        output::route(pod, &captured, cfg, uploader, &mut warned, out).await;
    }
    Ok(())
}

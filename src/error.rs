use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline errors. Only `ClusterQuery` aborts the run; everything else
/// is reported for the pod it belongs to and the batch continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot list pods in namespace {namespace}: {source}")]
    ClusterQuery {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("cannot fetch logs for pod {pod}: {source}")]
    LogFetch {
        pod: String,
        #[source]
        source: kube::Error,
    },

    #[error("cannot create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write logs to {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("upload to {endpoint} failed: {source}")]
    Upload {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

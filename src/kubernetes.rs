use std::path::Path;

use k8s_openapi::api::core::v1::Pod;
use kube::api::{ListParams, LogParams};
use kube::{Api, Client, ResourceExt, config};
use tracing::debug;

use crate::error::Error;
use crate::types::PodRef;

/// The narrow slice of the cluster API this tool consumes: an ordered pod
/// listing and a one-shot log snapshot per pod.
pub trait LogSource {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodRef>, Error>;
    async fn fetch_logs(&self, pod: &PodRef) -> Result<String, Error>;
}

/// Build a kube client from an explicit kubeconfig path, or fall back to
/// the usual discovery chain (env var, default kubeconfig, in-cluster).
pub async fn build_client(kubeconfig: Option<&Path>) -> anyhow::Result<Client> {
    let config = match kubeconfig {
        Some(path) => {
            let kubeconfig = config::Kubeconfig::read_from(path)?;
            config::Config::from_custom_kubeconfig(kubeconfig, &config::KubeConfigOptions::default())
                .await?
        }
        None => config::Config::infer().await?,
    };
    Ok(Client::try_from(config)?)
}

/// Production `LogSource` backed by a kube client.
pub struct ClusterLogSource {
    client: Client,
}

impl ClusterLogSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Namespace the client's configuration points at, used when no
    /// namespace flag was given.
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }
}

impl LogSource for ClusterLogSource {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodRef>, Error> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pods = api
            .list(&ListParams::default())
            .await
            .map_err(|source| Error::ClusterQuery {
                namespace: namespace.to_string(),
                source,
            })?;
        debug!("listed {} pods in namespace {}", pods.items.len(), namespace);
        Ok(pods
            .items
            .into_iter()
            .map(|pod| PodRef {
                namespace: pod.namespace().unwrap_or_else(|| namespace.to_string()),
                name: pod.name_any(),
            })
            .collect())
    }

    async fn fetch_logs(&self, pod: &PodRef) -> Result<String, Error> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), &pod.namespace);
        debug!("fetching logs for pod {}", pod.name);
        api.logs(&pod.name, &LogParams::default())
            .await
            .map_err(|source| Error::LogFetch {
                pod: pod.name.clone(),
                source,
            })
    }
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kubelogns")]
#[command(about = "Fetch pod logs from a namespace and print, save, or upload them")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Absolute path to the kubeconfig file (defaults to the usual discovery chain)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Namespace to fetch pod logs from (defaults to the kubeconfig's namespace)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Base file name to write logs to, one file per pod
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Upload each written log file to the paste server
    #[arg(short = 'u', long)]
    pub upload: bool,

    /// Paste server to upload to (defaults to https://0x0.st)
    #[arg(short = 's', long)]
    pub server: Option<String>,

    /// Fuzzy pattern to narrow pod names in the namespace
    #[arg(short = 'f', long)]
    pub fuzzy: Option<String>,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

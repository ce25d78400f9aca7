/// A pod's identity for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRef {
    pub namespace: String,
    pub name: String,
}

/// Legacy display text for a failed log fetch. Written to files and shown
/// wherever the capture result is rendered, so existing consumers keep
/// seeing the same bytes.
pub const FETCH_FAILED_TEXT: &str = "Unable to get pod logs";

/// Outcome of one log capture: either the full snapshot text or a marker
/// that the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    Text(String),
    FetchFailed,
}

impl Captured {
    pub fn render(&self) -> &str {
        match self {
            Captured::Text(text) => text,
            Captured::FetchFailed => FETCH_FAILED_TEXT,
        }
    }
}

/// Expiry value sent with every upload, in the unit the paste server
/// interprets it.
pub const DEFAULT_EXPIRES: u32 = 1;

/// Base file name substituted when uploading without an explicit `-o`.
pub const PLACEHOLDER_BASE: &str = "tmp";

/// Where every selected pod's log goes. Chosen once per run from the CLI
/// flags and applied uniformly to each pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Console,
    File {
        base: String,
    },
    /// `ephemeral` marks files that only exist to feed the upload; they
    /// are removed once the upload succeeds.
    FileAndUpload {
        base: String,
        expires: u32,
        ephemeral: bool,
    },
}

impl OutputDestination {
    pub fn from_flags(output: Option<String>, upload: bool) -> Self {
        match (output, upload) {
            (None, false) => OutputDestination::Console,
            (Some(base), false) => OutputDestination::File { base },
            (output, true) => {
                let ephemeral = output.is_none();
                OutputDestination::FileAndUpload {
                    base: output.unwrap_or_else(|| PLACEHOLDER_BASE.to_string()),
                    expires: DEFAULT_EXPIRES,
                    ephemeral,
                }
            }
        }
    }
}

/// Immutable snapshot of the run settings, built once in main and passed
/// down by reference. An empty `pattern` disables name filtering.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub namespace: String,
    pub pattern: String,
    pub destination: OutputDestination,
}

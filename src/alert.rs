use serde::Deserialize;
use std::collections::HashMap;

/// One Grafana webhook notification: the overall batch status plus the
/// individual alerts grouped into it.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertBatch {
    #[serde(default)]
    pub status: Option<String>,
    pub alerts: Vec<Alert>,
}

impl AlertBatch {
    /// Grafana always sets the batch status; a missing or empty value means
    /// the payload is not something we should forward.
    pub fn has_status(&self) -> bool {
        !self.status.as_deref().unwrap_or("").is_empty()
    }
}

/// A single alert inside a batch. Grafana sends more fields than these
/// (startsAt, fingerprint, ...); everything we do not render is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(rename = "generatorURL")]
    pub generator_url: Option<String>,
    #[serde(rename = "silenceURL")]
    pub silence_url: Option<String>,
}

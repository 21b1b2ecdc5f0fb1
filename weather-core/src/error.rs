use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while fetching or archiving an observation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to send request to OpenWeather for {city}")]
    Request {
        city: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("OpenWeather request for {city} failed with status {status}: {body}")]
    Status {
        city: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse OpenWeather response for {city}")]
    Body {
        city: String,
        #[source]
        source: serde_json::Error,
    },

    /// A successful payload that lacks a field the metrics are read from.
    #[error("weather payload for {city} has no usable `{path}`")]
    Shape { city: String, path: &'static str },

    #[error("storage operation `{operation}` failed for container `{container}`")]
    Storage {
        operation: String,
        container: String,
        #[source]
        source: azure_core::Error,
    },

    #[error("no observation to archive for {city}")]
    MissingObservation { city: String },
}

impl Error {
    /// Errors the orchestrator cannot turn into a per-city outcome.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, Error::Shape { .. })
    }

    /// The message followed by every underlying cause, for log lines.
    ///
    /// Storage failures also carry the service's status and error code.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            let text = err.to_string();
            if !out.ends_with(&text) {
                out.push_str(": ");
                out.push_str(&text);
            }
            cause = err.source();
        }
        if let Error::Storage { source, .. } = self {
            out.push_str(&format!(" ({:?})", source.kind()));
        }
        out
    }
}

/// Shorten a response body so it fits in a log line.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

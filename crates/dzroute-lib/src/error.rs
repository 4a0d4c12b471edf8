use thiserror::Error;

/// Convenient result alias for the dzroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No suitable project directories could be resolved for the network cache.
    #[error("failed to resolve project directories for the network cache")]
    ProjectDirsUnavailable,

    /// Raised when attempting to load a database that is not a cached road network.
    #[error("unsupported network schema; expected Nodes and Segments tables")]
    UnsupportedSchema,

    /// Raised when a place name could not be found in the catalog.
    #[error("unknown place name: {name}{}", format_suggestions(.suggestions))]
    PlaceNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two places.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any steps.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when the network provider could not supply a road network.
    #[error("road network for {place} is unavailable: {message}")]
    DatasetUnavailable { place: String, message: String },

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for JSON deserialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

use std::path::PathBuf;

/// All errors produced by the playground.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    /// A file could not be read or written.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not valid settings JSON.
    #[error("malformed settings in '{}': {source}", path.display())]
    SettingsFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file exists but is not valid config JSON.
    #[error("malformed config in '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file watcher could not be installed.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("file watcher: {0}")]
    Watch(#[from] notify::Error),

    /// No snippet in the catalog carries this title.
    #[error("unknown snippet: {0}")]
    UnknownSnippet(String),

    /// The token is not a `<utility>-<family>-<shade>` color class.
    #[error("not a palette color class: {0}")]
    InvalidColorClass(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

/// Shorthand constructors.
impl PlaygroundError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

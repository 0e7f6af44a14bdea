use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {index} in {path}: missing or invalid required field `{field}`")]
    Schema {
        field: &'static str,
        index: usize,
        path: String,
    },

    #[error("record {index} in {path}: unparseable timestamp \"{value}\"")]
    Timestamp {
        index: usize,
        value: String,
        path: String,
    },
}

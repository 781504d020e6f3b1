use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    // Fatal by contract: a bad date must stop the run with the value named,
    // never be coerced or silently dropped.
    #[error("unparseable crash date {value:?}: expected MM/DD/YYYY")]
    DateParse { value: String },

    #[error("input is missing expected column '{0}'")]
    MissingColumn(String),

    #[error("column '{0}' not found")]
    UnknownColumn(String),
}

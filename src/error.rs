use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("pdf error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("company not found: {0}")]
    CompanyNotFound(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;

use thiserror::Error;

/// Top-level error type for cut list generation.
#[derive(Debug, Error)]
pub enum CutlistError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to topological operations.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors raised while walking the assembly tree.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("assembly entity not found: {0}")]
    EntityNotFound(String),

    /// The selection contained something that is not a body, occurrence or
    /// component. This aborts the whole export.
    #[error("cannot add object with type: {0}")]
    UnsupportedEntityKind(String),
}

/// Errors raised by the output formatters.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("unknown length unit: {0}")]
    UnknownUnit(String),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors related to export configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`CutlistError`].
pub type Result<T> = std::result::Result<T, CutlistError>;

use deltille_core::LatticeKind;

/// A board specification that cannot be rendered at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("board type {actual} cannot be drawn by the {expected} renderer")]
    WrongBoardType {
        expected: LatticeKind,
        actual: LatticeKind,
    },
    #[error(
        "tag family '{family}' is unavailable for {lattice} boards; use one of: {}",
        .available.join(", ")
    )]
    UnknownFamily {
        family: String,
        lattice: LatticeKind,
        available: Vec<String>,
    },
    #[error("edge_length must be finite and > 0 (got {0})")]
    InvalidEdgeLength(f64),
    #[error("tag_border must be finite and > 0 (got {0})")]
    InvalidTagBorder(f64),
}

/// Errors returned by the board renderers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("tag id {id} is out of range for {family} ({available} codes)")]
    TagIdOutOfRange {
        family: String,
        id: u32,
        available: usize,
    },
}

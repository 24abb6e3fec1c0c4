/// Everything that can go wrong while loading puzzles or running a search.
///
/// The search itself never fails on valid input; the variants below come
/// from the boundaries (grid construction, file loading, thread pools).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("cell ({row}, {col}) holds the reserved path marker")]
    ReservedCharacter { row: usize, col: usize },
    #[error("could not parse grid at line {line}: {snippet:?}")]
    GridParse { line: usize, snippet: String },
    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error("unknown search strategy {0:?} (expected \"recursive\" or \"iterative\")")]
    UnknownStrategy(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;

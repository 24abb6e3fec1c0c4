use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::Error;

/// How the depth-first walk keeps track of where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One stack frame per path cell; each cell is released by a drop guard.
    #[default]
    Recursive,
    /// A heap-allocated frame stack, for grids deep enough to threaten the
    /// thread's call stack.
    Iterative,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

#[derive(Debug, Clone, TypedBuilder, Serialize, Deserialize)]
pub struct SearchConfig {
    #[builder(default)]
    pub strategy: Strategy,
    /// Skip trie subtrees whose words have all been reported already.
    #[builder(default = true)]
    pub prune_exhausted: bool,
    /// Spread start cells over a rayon pool, one grid copy per worker.
    #[builder(default)]
    pub parallel: bool,
    /// Size of a dedicated pool for parallel searches; the global pool otherwise.
    #[builder(default, setter(strip_option))]
    pub threads: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::builder().build()
    }
}

// English phonotactics
pub(crate) mod constants;

pub use constants::{CONSONANT_CLUSTERS, is_consonant_cluster};

use std::time::Duration;

use crate::operation::OperationKey;

/// Counters collected over one solve call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveStats {
    pub attempts: u64,
    pub cache_size: usize,
    pub cache_hits: u64,
    pub most_common_operation: Option<(OperationKey, u64)>,
    pub elapsed: Duration,
}

use std::collections::TryReserveError;

/// Structural misuse or resource failure during a conversion.
///
/// Every variant corresponds to a caller-side sequencing mistake except
/// [`BuildError::AllocationFailed`], which surfaces pending-buffer growth
/// failure instead of aborting.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("context depth limit exceeded ({limit})")]
    DepthExceeded { limit: usize },
    #[error("pop without a matching push")]
    UnbalancedPop,
    #[error("link opened while another link is still open")]
    LinkAlreadyOpen,
    #[error("list operation with no open list")]
    ListUnderflow,
    #[error("failed to grow pending text buffer: {0}")]
    AllocationFailed(#[from] TryReserveError),
}

use crate::timing::RelPulse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("subdivision interval must be a positive pulse count, got {0}")]
    NonPositiveSubdivision(RelPulse),
    #[error("laser x-scale must be 1 or 2, got {0}")]
    InvalidLaserScale(i32),
}

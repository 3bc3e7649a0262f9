//! Error type shared by the picker math and scene.

pub type Result<T> = std::result::Result<T, PickerError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickerError {
    /// A lerp was asked for a fraction outside `0..=1`.
    ///
    /// Containment checks should make this unreachable; seeing it means the
    /// cursor mapping handed the color math a bad coordinate.
    #[error("lerp cannot work with fraction {0}")]
    InvalidInterpolationFraction(f32),
    #[error("invalid picker layout: {0}")]
    InvalidLayout(String),
}

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoeError {
    /// Raised when a draw is attempted after the reshuffle check was skipped.
    #[error("The shoe is empty ({deck_count} deck shoe); it should have been reshuffled before drawing")]
    Empty { deck_count: u8 },
}

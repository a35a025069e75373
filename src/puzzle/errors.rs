use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("At most {max} large numbers can be drawn, got {requested}")]
    TooManyLarge { requested: usize, max: usize },
}

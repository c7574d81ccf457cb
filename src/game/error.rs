/// every failure here is expected and recoverable: invalid input gets
/// re-prompted, and a concluded match accepts nothing but a reset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
    #[error("game is already over")]
    GameAlreadyOver,
}

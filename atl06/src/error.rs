use thiserror::Error;

#[derive(Error, Debug)]
pub enum Atl06Error {
    #[error("no attribute named {0}")]
    MissingAttribute(String),

    #[error("no points for track {0}")]
    EmptyTrack(u16),

    #[error("empty track set")]
    Empty,

    #[error("rendering failed: {0}")]
    Render(String),
}

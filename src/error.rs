use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised only under [`DistancePolicy::Strict`](crate::model::DistancePolicy):
    /// a consulted stop pair has no declared distance in either direction.
    #[error("no distance declared between stops '{from}' and '{to}'")]
    MissingDistance { from: String, to: String },
}

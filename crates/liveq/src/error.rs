use liveq_core::{filter::FilterError, query::QueryError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Facade error over the core boundaries. API layers that accept filter
/// trees and build queries in one step can propagate this single type; the
/// originating message is preserved for the validation surface.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("{0}")]
    Filter(#[from] FilterError),

    #[error("{0}")]
    Query(#[from] QueryError),
}

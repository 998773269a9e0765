use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadingError {
    /// The region was attached without a name or an until-condition
    #[error("Name is needed to register loading region")]
    NameRequired,
}

pub type LoadingResult<T> = Result<T, LoadingError>;

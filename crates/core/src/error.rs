#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No destinations available for sync")]
    NoDestinationsAvailable,

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

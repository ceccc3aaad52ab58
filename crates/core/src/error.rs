#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A create request referenced a formula id that is not in the catalog.
    /// The project must not be created.
    #[error("Unknown formula: {id}")]
    UnknownFormula { id: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The path identifier did not resolve to a stored row. The raw path
    /// segment is kept so unparseable identifiers can be reported too.
    #[error("{entity} Not Found")]
    NotFound { entity: &'static str, id: String },

    /// A field required on creation was absent or falsy.
    #[error("Missing '{0}' request in body")]
    MissingField(&'static str),

    /// A partial update carried no truthy field.
    #[error("Request body must contain either 'note_name', 'content' or 'folder_id'")]
    EmptyUpdate,
}

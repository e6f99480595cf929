use thiserror::Error;

/// Errors surfaced by the engine's loading and parsing edges.
///
/// The five analysis entry points themselves are infallible: malformed or
/// empty input yields empty (well-typed) output, and unknown protocol
/// conditions fall back to generic supportive care.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },

    #[error("Registry load failed ({0}): {1}")]
    RegistryLoad(String, String),

    #[error("Registry parse failed ({0}): {1}")]
    RegistryParse(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_enum_message_names_field_and_value() {
        let err = EngineError::InvalidEnum {
            field: "TaskType".into(),
            value: "errand".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("TaskType"), "got: {msg}");
        assert!(msg.contains("errand"), "got: {msg}");
    }
}

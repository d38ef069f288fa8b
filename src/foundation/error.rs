/// Convenience result type used across the hero pipeline.
pub type HeroResult<T> = Result<T, HeroError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum HeroError {
    /// Two tagged descendants of one snapshot share the same hero key.
    #[error("configuration error: duplicate hero key '{key}'")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// No transition controller was registered under the requested id.
    #[error("lookup error: no hero controller registered with id '{id}'")]
    ControllerNotFound {
        /// The requested controller id.
        id: String,
    },

    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Visual tree access with an unknown or removed node.
    #[error("scene error: {0}")]
    Scene(String),

    /// Layout engine failure while measuring.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors raised by an animation engine.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeroError {
    /// Build a [`HeroError::DuplicateKey`] value.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Build a [`HeroError::ControllerNotFound`] value.
    pub fn controller_not_found(id: impl Into<String>) -> Self {
        Self::ControllerNotFound { id: id.into() }
    }

    /// Build a [`HeroError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeroError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`HeroError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`HeroError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`HeroError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<taffy::TaffyError> for HeroError {
    fn from(value: taffy::TaffyError) -> Self {
        Self::layout(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use std::fmt;
use bevy::prelude::Entity;

#[derive(Debug)]
pub enum FractalError {
    InvalidSetting(String),
    DepthLimitExceeded(u32),
    EmptyMeshList,
    MissingBaseMaterial,
    MissingParent(Entity),
    ImportFailed(String),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalError::InvalidSetting(msg) => write!(f, "invalid fractal setting: {}", msg),
            FractalError::DepthLimitExceeded(depth) => write!(
                f,
                "max_depth {} exceeds the supported limit of {}",
                depth,
                crate::core::fractal_settings::MAX_SUPPORTED_DEPTH
            ),
            FractalError::EmptyMeshList => write!(f, "fractal needs at least one mesh"),
            FractalError::MissingBaseMaterial => write!(f, "base material handle does not resolve to a loaded material"),
            FractalError::MissingParent(entity) => write!(f, "parent entity {:?} does not exist", entity),
            FractalError::ImportFailed(msg) => write!(f, "failed to import fractal settings: {}", msg),
        }
    }
}

impl std::error::Error for FractalError {}

impl From<&str> for FractalError {
    fn from(error: &str) -> Self {
        FractalError::InvalidSetting(error.to_string())
    }
}

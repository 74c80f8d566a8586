use std::collections::HashMap;
use std::sync::Mutex;
use std::fs::File;
use lazy_static::lazy_static;
use crate::core::fractal_error::FractalError;
use crate::core::fractal_settings::FractalSettings;

pub const PRESET_DIRECTORY: &str = "assets/fractals";

lazy_static! {
    static ref SETTINGS_CACHE: Mutex<HashMap<String, FractalSettings>> = Mutex::new(HashMap::new());
}

/// Loads `assets/fractals/<preset_name>.ron`, validating it on first use.
pub fn import_settings(preset_name: &str) -> Result<FractalSettings, FractalError> {
    let mut cache = SETTINGS_CACHE
        .lock()
        .map_err(|_| FractalError::ImportFailed("settings cache is poisoned".to_string()))?;

    if let Some(cached_settings) = cache.get(preset_name) {
        return Ok(*cached_settings);
    }

    let file_path = format!("{}/{}.ron", PRESET_DIRECTORY, preset_name);
    let file = File::open(&file_path)
        .map_err(|e| FractalError::ImportFailed(format!("{}: {}", file_path, e)))?;
    let settings: FractalSettings = ron::de::from_reader(file)
        .map_err(|e| FractalError::ImportFailed(format!("{}: {}", file_path, e)))?;
    settings.validate()?;

    cache.insert(preset_name.to_string(), settings);
    Ok(settings)
}

pub fn parse_settings(source: &str) -> Result<FractalSettings, FractalError> {
    let settings: FractalSettings = ron::from_str(source)
        .map_err(|e| FractalError::ImportFailed(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = parse_settings("(max_depth: 2, spawn_probability: 1.0)").unwrap();
        assert_eq!(settings.max_depth, 2);
        assert_eq!(settings.spawn_probability, 1.0);
        assert_eq!(settings.child_scale, FractalSettings::default().child_scale);
        assert_eq!(settings.palette, FractalSettings::default().palette);
    }

    #[test]
    fn invalid_values_are_rejected_after_parsing() {
        assert!(matches!(
            parse_settings("(child_scale: 1.5)"),
            Err(FractalError::InvalidSetting(_))
        ));
    }

    #[test]
    fn malformed_source_is_an_import_failure() {
        assert!(matches!(
            parse_settings("(max_depth: \"deep\")"),
            Err(FractalError::ImportFailed(_))
        ));
    }

    #[test]
    fn unknown_preset_is_an_import_failure() {
        assert!(matches!(
            import_settings("does_not_exist"),
            Err(FractalError::ImportFailed(_))
        ));
    }
}

use serde_json::{Map, Value};

use crate::error::{ConsoleError, Result};

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_STEP: f64 = 0.01;
pub const MIN_STEP: f64 = 0.01;
pub const MAX_STEP: f64 = 1.0;
pub const DEFAULT_FILLED_CHAR: char = '█';
pub const DEFAULT_EMPTY_CHAR: char = '-';

/// Caller-facing progress bar options. Every field is optional; defaults are
/// applied once, in [`ProgressOptions::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressOptions {
    pub width: Option<i64>,
    pub step: Option<f64>,
    pub title: Option<String>,
    pub filled_char: Option<String>,
    pub empty_char: Option<String>,
}

/// Validated progress bar configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub width: usize,
    pub step: f64,
    pub title: Option<String>,
    pub filled_char: char,
    pub empty_char: char,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            step: DEFAULT_STEP,
            title: None,
            filled_char: DEFAULT_FILLED_CHAR,
            empty_char: DEFAULT_EMPTY_CHAR,
        }
    }
}

impl ProgressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn filled_char<S: Into<String>>(mut self, glyph: S) -> Self {
        self.filled_char = Some(glyph.into());
        self
    }

    pub fn empty_char<S: Into<String>>(mut self, glyph: S) -> Self {
        self.empty_char = Some(glyph.into());
        self
    }

    /// Fill every unset field from `base`
    pub fn or(self, base: &ProgressOptions) -> Self {
        Self {
            width: self.width.or(base.width),
            step: self.step.or(base.step),
            title: self.title.or_else(|| base.title.clone()),
            filled_char: self.filled_char.or_else(|| base.filled_char.clone()),
            empty_char: self.empty_char.or_else(|| base.empty_char.clone()),
        }
    }

    /// Build options from a loosely typed JSON object such as a config file
    /// section. Values of the wrong kind are configuration errors.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ConsoleError::configuration("progress options must be a JSON object"))?;

        let mut options = Self::new();
        for (key, field) in object {
            if field.is_null() {
                continue;
            }
            match key.as_str() {
                "width" => {
                    let width = field.as_i64().ok_or_else(|| {
                        ConsoleError::configuration(format!(
                            "width must be a positive integer, got {}",
                            field
                        ))
                    })?;
                    options.width = Some(width);
                }
                "step" => {
                    let step = field.as_f64().ok_or_else(|| {
                        ConsoleError::configuration(format!("step must be numeric, got {}", field))
                    })?;
                    options.step = Some(step);
                }
                "title" => options.title = Some(json_string(key, field)?),
                "filled_char" => options.filled_char = Some(json_string(key, field)?),
                "empty_char" => options.empty_char = Some(json_string(key, field)?),
                other => {
                    return Err(ConsoleError::configuration(format!(
                        "unknown progress option '{}'",
                        other
                    )))
                }
            }
        }

        Ok(options)
    }

    /// Inverse of [`ProgressOptions::from_json`]; unset fields are omitted
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(width) = self.width {
            object.insert("width".into(), width.into());
        }
        if let Some(step) = self.step {
            object.insert("step".into(), step.into());
        }
        if let Some(title) = &self.title {
            object.insert("title".into(), title.clone().into());
        }
        if let Some(glyph) = &self.filled_char {
            object.insert("filled_char".into(), glyph.clone().into());
        }
        if let Some(glyph) = &self.empty_char {
            object.insert("empty_char".into(), glyph.clone().into());
        }
        Value::Object(object)
    }

    /// Apply defaults and check every constraint
    pub fn validate(&self) -> Result<ProgressConfig> {
        let width = match self.width {
            None => DEFAULT_WIDTH,
            Some(width) if width > 0 => width as usize,
            Some(width) => {
                return Err(ConsoleError::configuration(format!(
                    "width must be a positive integer, got {}",
                    width
                )))
            }
        };

        let step = self.step.unwrap_or(DEFAULT_STEP);
        if !step.is_finite() || !(MIN_STEP..=MAX_STEP).contains(&step) {
            return Err(ConsoleError::configuration(format!(
                "step must be in range: {} <= step <= {}, got {}",
                MIN_STEP, MAX_STEP, step
            )));
        }

        let filled_char = single_char("filled_char", self.filled_char.as_deref(), DEFAULT_FILLED_CHAR)?;
        let empty_char = single_char("empty_char", self.empty_char.as_deref(), DEFAULT_EMPTY_CHAR)?;

        Ok(ProgressConfig {
            width,
            step,
            title: self.title.clone(),
            filled_char,
            empty_char,
        })
    }
}

fn json_string(key: &str, field: &Value) -> Result<String> {
    field
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ConsoleError::configuration(format!("{} must be a string, got {}", key, field)))
}

fn single_char(name: &str, glyph: Option<&str>, default: char) -> Result<char> {
    let Some(glyph) = glyph else {
        return Ok(default);
    };

    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConsoleError::configuration(format!(
            "{} must be a string of length 1, got {:?}",
            name, glyph
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_configuration_error(result: Result<ProgressConfig>) -> bool {
        matches!(result, Err(ConsoleError::Configuration(_)))
    }

    #[test]
    fn test_defaults() {
        let config = ProgressOptions::new().validate().unwrap();
        assert_eq!(config, ProgressConfig::default());
        assert_eq!(config.width, 20);
        assert_eq!(config.step, 0.01);
        assert_eq!(config.filled_char, '█');
        assert_eq!(config.empty_char, '-');
        assert!(config.title.is_none());
    }

    #[test]
    fn test_rejects_non_positive_width() {
        assert!(is_configuration_error(ProgressOptions::new().width(0).validate()));
        assert!(is_configuration_error(ProgressOptions::new().width(-1).validate()));
    }

    #[test]
    fn test_rejects_step_out_of_range() {
        assert!(is_configuration_error(ProgressOptions::new().step(0.0).validate()));
        assert!(is_configuration_error(ProgressOptions::new().step(1.5).validate()));
        assert!(is_configuration_error(ProgressOptions::new().step(0.009).validate()));
        assert!(is_configuration_error(ProgressOptions::new().step(f64::NAN).validate()));
    }

    #[test]
    fn test_step_bounds_are_inclusive() {
        assert!(ProgressOptions::new().step(0.01).validate().is_ok());
        assert!(ProgressOptions::new().step(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_glyphs_that_are_not_one_char() {
        assert!(is_configuration_error(ProgressOptions::new().filled_char("ab").validate()));
        assert!(is_configuration_error(ProgressOptions::new().empty_char("").validate()));
    }

    #[test]
    fn test_multibyte_glyph_counts_as_one_char() {
        let config = ProgressOptions::new()
            .filled_char("▓")
            .empty_char("░")
            .validate()
            .unwrap();
        assert_eq!(config.filled_char, '▓');
        assert_eq!(config.empty_char, '░');
    }

    #[test]
    fn test_from_json_rejects_wrong_kinds() {
        let width_as_string = ProgressOptions::from_json(&json!({ "width": "20" }));
        assert!(matches!(width_as_string, Err(ConsoleError::Configuration(_))));

        let fractional_width = ProgressOptions::from_json(&json!({ "width": 20.5 }));
        assert!(matches!(fractional_width, Err(ConsoleError::Configuration(_))));

        let step_as_string = ProgressOptions::from_json(&json!({ "step": "fast" }));
        assert!(matches!(step_as_string, Err(ConsoleError::Configuration(_))));

        let not_an_object = ProgressOptions::from_json(&json!([1, 2]));
        assert!(matches!(not_an_object, Err(ConsoleError::Configuration(_))));

        let unknown = ProgressOptions::from_json(&json!({ "colour": "red" }));
        assert!(matches!(unknown, Err(ConsoleError::Configuration(_))));
    }

    #[test]
    fn test_from_json_accepts_partial_object() {
        let options = ProgressOptions::from_json(&json!({
            "width": 10,
            "step": 0.1,
            "title": null,
            "filled_char": "#"
        }))
        .unwrap();

        assert_eq!(options.width, Some(10));
        assert_eq!(options.step, Some(0.1));
        assert_eq!(options.title, None);
        assert_eq!(options.filled_char.as_deref(), Some("#"));
        assert_eq!(ProgressOptions::from_json(&options.to_json()).unwrap(), options);
    }

    #[test]
    fn test_or_prefers_explicit_values() {
        let base = ProgressOptions::new().width(40).filled_char("#");
        let merged = ProgressOptions::new().width(10).or(&base);
        assert_eq!(merged.width, Some(10));
        assert_eq!(merged.filled_char.as_deref(), Some("#"));
        assert_eq!(merged.step, None);
    }
}

//! Transformation plan types.
//!
//! A [`TransformPlan`] is the resolver's sole output: the module format the
//! compiler should emit plus the ordered preset and plugin lists, each entry a
//! name with an optional options record. The plan is a plain value — building
//! one has no side effects, and it serializes directly into the shape the host
//! compiler reads as its configuration.

pub mod options;
pub mod resolver;

pub use options::{
    ModulesSetting, ObjectRestSpreadOptions, PresetEnvOptions, TransformRuntimeOptions,
};

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::Result;

/// Import/export convention of the emitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleFormat {
    /// Standard ECMAScript `import`/`export`.
    #[serde(rename = "esm")]
    EcmaScript,
    /// Synchronous-require interop format.
    #[serde(rename = "cjs")]
    CommonJs,
}

impl std::fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EcmaScript => write!(f, "esm"),
            Self::CommonJs => write!(f, "cjs"),
        }
    }
}

/// One preset or plugin: a name plus an optional options record.
///
/// Serializes the way the host compiler expects its preset/plugin lists:
/// a bare name string when there are no options, a `[name, options]` pair
/// otherwise.
///
/// # Example
///
/// ```
/// use transform_plan::plan::ConfigEntry;
/// use serde_json::json;
///
/// let bare = ConfigEntry::bare("@babel/preset-react");
/// assert_eq!(serde_json::to_value(&bare).unwrap(), json!("@babel/preset-react"));
///
/// let with_opts = ConfigEntry::with_options("@babel/preset-env", &json!({ "loose": true }));
/// assert_eq!(
///     serde_json::to_value(&with_opts).unwrap(),
///     json!(["@babel/preset-env", { "loose": true }])
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    /// Name the host compiler resolves the preset/plugin by.
    pub name: String,
    /// Options record, if the entry takes one.
    pub options: Option<Value>,
}

impl ConfigEntry {
    /// An entry with no options.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    /// An entry with an options record.
    pub fn with_options<T: Serialize>(name: impl Into<String>, options: &T) -> Self {
        Self {
            name: name.into(),
            options: Some(serde_json::json!(options)),
        }
    }

    /// Look up a single option by key, if present.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|opts| opts.get(key))
    }
}

impl Serialize for ConfigEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.options {
            None => serializer.serialize_str(&self.name),
            Some(options) => {
                let mut pair = serializer.serialize_seq(Some(2))?;
                pair.serialize_element(&self.name)?;
                pair.serialize_element(options)?;
                pair.end()
            }
        }
    }
}

/// The resolved transformation plan.
///
/// Ordering of `presets` and `plugins` is significant: later entries may
/// assume earlier ones already normalized syntax, and the host compiler
/// applies them in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformPlan {
    /// Module format the compiler should emit.
    pub output_module_format: ModuleFormat,
    /// Ordered preset list.
    pub presets: Vec<ConfigEntry>,
    /// Ordered plugin list.
    pub plugins: Vec<ConfigEntry>,
}

impl TransformPlan {
    /// Render the plan as compact JSON for the host compiler.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the plan as pretty-printed JSON (for humans).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn module_format_serializes_as_tag() {
        assert_eq!(json!(ModuleFormat::EcmaScript), json!("esm"));
        assert_eq!(json!(ModuleFormat::CommonJs), json!("cjs"));
    }

    #[test]
    fn module_format_display() {
        assert_eq!(ModuleFormat::EcmaScript.to_string(), "esm");
        assert_eq!(ModuleFormat::CommonJs.to_string(), "cjs");
    }

    #[test]
    fn bare_entry_serializes_as_string() {
        let entry = ConfigEntry::bare("@babel/preset-react");
        assert_eq!(json!(entry), json!("@babel/preset-react"));
    }

    #[test]
    fn entry_with_options_serializes_as_pair() {
        let entry = ConfigEntry::with_options("p", &json!({ "loose": true }));
        assert_eq!(json!(entry), json!(["p", { "loose": true }]));
    }

    #[test]
    fn option_lookup_by_key() {
        let entry = ConfigEntry::with_options("p", &json!({ "loose": true }));
        assert_eq!(entry.option("loose"), Some(&json!(true)));
        assert_eq!(entry.option("missing"), None);
        assert_eq!(ConfigEntry::bare("p").option("loose"), None);
    }

    #[test]
    fn plan_serializes_with_camel_case_format_key() {
        let plan = TransformPlan {
            output_module_format: ModuleFormat::EcmaScript,
            presets: vec![ConfigEntry::bare("a")],
            plugins: vec![],
        };
        let value = json!(plan);
        assert_eq!(value["outputModuleFormat"], json!("esm"));
        assert_eq!(value["presets"], json!(["a"]));
        assert_eq!(value["plugins"], json!([]));
    }

    #[test]
    fn plan_json_renderers_agree() {
        let plan = TransformPlan {
            output_module_format: ModuleFormat::CommonJs,
            presets: vec![],
            plugins: vec![ConfigEntry::bare("x")],
        };
        let compact: Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        let pretty: Value = serde_json::from_str(&plan.to_json_pretty().unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }
}

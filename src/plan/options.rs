//! Typed option records for the fixed preset/plugin set.
//!
//! Field names serialize in camelCase because that is how the host compiler
//! spells its option keys.

use serde::{Serialize, Serializer};

use super::ModuleFormat;

/// The `modules` option of the syntax-downleveling preset.
///
/// The host compiler reads the literal `false` as "leave module syntax
/// as-is" and the string tag `"commonjs"` as "rewrite to synchronous
/// requires". This is the one place the resolved [`ModuleFormat`] propagates
/// into plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulesSetting {
    /// Leave `import`/`export` untouched (serializes as `false`).
    Preserve,
    /// Rewrite to the interop format (serializes as `"commonjs"`).
    CommonJs,
}

impl From<ModuleFormat> for ModulesSetting {
    fn from(format: ModuleFormat) -> Self {
        match format {
            ModuleFormat::EcmaScript => Self::Preserve,
            ModuleFormat::CommonJs => Self::CommonJs,
        }
    }
}

impl Serialize for ModulesSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Preserve => serializer.serialize_bool(false),
            Self::CommonJs => serializer.serialize_str("commonjs"),
        }
    }
}

/// Options for the syntax-downleveling preset (`@babel/preset-env`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetEnvOptions {
    /// Module rewrite behavior; see [`ModulesSetting`].
    pub modules: ModulesSetting,
    /// Emit looser, smaller output at the cost of exact semantics.
    pub loose: bool,
}

/// Options for the runtime-helper-injection plugin
/// (`@babel/plugin-transform-runtime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformRuntimeOptions {
    /// Import helpers as ES modules rather than requires.
    // Not plain camelCase: the host compiler spells it "useESModules".
    #[serde(rename = "useESModules")]
    pub use_es_modules: bool,
}

/// Options for the object rest/spread plugin
/// (`@babel/plugin-proposal-object-rest-spread`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRestSpreadOptions {
    /// Use native `Object.assign` instead of an injected helper.
    pub use_built_ins: bool,
    /// Looser, smaller output.
    pub loose: bool,
}

//! Plan resolution.
//!
//! Maps an [`EnvSignals`] snapshot to a [`TransformPlan`] using the
//! precedence chain:
//!
//! 1. Test mode (`NODE_ENV=test`) forces the interop format, always
//! 2. The `MODULES=cjs` override forces the interop format
//! 3. Otherwise emit standard ES modules
//!
//! Resolution is total and pure: every signal combination yields a complete
//! plan, and identical snapshots yield structurally equal plans.

use super::options::{
    ModulesSetting, ObjectRestSpreadOptions, PresetEnvOptions, TransformRuntimeOptions,
};
use super::{ConfigEntry, ModuleFormat, TransformPlan};
use crate::signals::{BuildMode, EnvSignals, ModuleOverride};

/// Framework-syntax preset: translates component-style markup into plain calls.
pub const PRESET_REACT: &str = "@babel/preset-react";

/// Baseline syntax-downleveling preset.
pub const PRESET_ENV: &str = "@babel/preset-env";

/// Runtime-helper-injection transform.
pub const PLUGIN_TRANSFORM_RUNTIME: &str = "@babel/plugin-transform-runtime";

/// Object rest/spread destructuring transform.
pub const PLUGIN_OBJECT_REST_SPREAD: &str = "@babel/plugin-proposal-object-rest-spread";

impl ModuleFormat {
    /// Resolve the output module format from the decoded signals.
    ///
    /// Test mode wins over the override: a test runner needs synchronous
    /// requires even when the build asked for ES modules.
    pub fn resolve(signals: &EnvSignals) -> Self {
        match (signals.mode, signals.module_override) {
            (BuildMode::Test, _) => Self::CommonJs,
            (BuildMode::Normal, ModuleOverride::CommonJs) => Self::CommonJs,
            (BuildMode::Normal, ModuleOverride::Default) => Self::EcmaScript,
        }
    }
}

impl TransformPlan {
    /// Resolve the full transformation plan from the decoded signals.
    ///
    /// # Example
    ///
    /// ```
    /// use transform_plan::plan::{ModuleFormat, TransformPlan};
    /// use transform_plan::signals::EnvSignals;
    ///
    /// let plan = TransformPlan::resolve(&EnvSignals::default());
    /// assert_eq!(plan.output_module_format, ModuleFormat::EcmaScript);
    /// assert_eq!(plan.presets.len(), 2);
    /// assert_eq!(plan.plugins.len(), 2);
    /// ```
    pub fn resolve(signals: &EnvSignals) -> Self {
        let format = ModuleFormat::resolve(signals);
        let esm = format == ModuleFormat::EcmaScript;
        tracing::debug!(%format, ?signals, "resolved output module format");

        Self {
            output_module_format: format,
            presets: vec![
                ConfigEntry::bare(PRESET_REACT),
                ConfigEntry::with_options(
                    PRESET_ENV,
                    &PresetEnvOptions {
                        modules: ModulesSetting::from(format),
                        loose: true,
                    },
                ),
            ],
            plugins: vec![
                ConfigEntry::with_options(
                    PLUGIN_TRANSFORM_RUNTIME,
                    &TransformRuntimeOptions {
                        use_es_modules: esm,
                    },
                ),
                ConfigEntry::with_options(
                    PLUGIN_OBJECT_REST_SPREAD,
                    &ObjectRestSpreadOptions {
                        use_built_ins: true,
                        loose: true,
                    },
                ),
            ],
        }
    }
}

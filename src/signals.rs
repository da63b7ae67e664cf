//! Environment signal snapshot.
//!
//! The resolver is driven by exactly two process environment variables:
//!
//! - `NODE_ENV` — test-mode indicator; only the literal value `test` matters
//! - `MODULES` — module-format override; only the literal value `cjs` matters
//!
//! Both are read once, at snapshot time, and decoded into closed enums so the
//! decision logic downstream dispatches on variants instead of comparing
//! strings. An absent variable is simply the default variant, never an error.

/// Environment variable carrying the test-mode indicator.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

/// Environment variable carrying the module-format override.
pub const MODULES_VAR: &str = "MODULES";

/// How the build was invoked, per `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// `NODE_ENV=test` — a test runner is driving the compiler.
    Test,
    /// Any other value, including an unset `NODE_ENV`.
    Normal,
}

impl BuildMode {
    /// Decode a raw `NODE_ENV` value. Only the literal `"test"` selects
    /// [`BuildMode::Test`].
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            Some("test") => Self::Test,
            _ => Self::Normal,
        }
    }
}

/// Requested module-format override, per `MODULES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleOverride {
    /// `MODULES=cjs` — force the synchronous-require interop format.
    CommonJs,
    /// Any other value, including an unset `MODULES`.
    Default,
}

impl ModuleOverride {
    /// Decode a raw `MODULES` value. Only the literal `"cjs"` selects
    /// [`ModuleOverride::CommonJs`].
    pub fn decode(raw: Option<&str>) -> Self {
        match raw {
            Some("cjs") => Self::CommonJs,
            _ => Self::Default,
        }
    }
}

/// An immutable snapshot of the two environment signals.
///
/// Taken once per resolution; the resolver never re-reads the ambient
/// environment mid-computation, so a given snapshot always produces the
/// same plan.
///
/// # Example
///
/// ```
/// use transform_plan::signals::{BuildMode, EnvSignals, ModuleOverride};
///
/// let signals = EnvSignals::from_lookup(|key| match key {
///     "NODE_ENV" => Ok("test".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert_eq!(signals.mode, BuildMode::Test);
/// assert_eq!(signals.module_override, ModuleOverride::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvSignals {
    /// Decoded test-mode indicator.
    pub mode: BuildMode,
    /// Decoded module-format override.
    pub module_override: ModuleOverride,
}

impl EnvSignals {
    /// Build a snapshot directly from decoded variants.
    pub fn new(mode: BuildMode, module_override: ModuleOverride) -> Self {
        Self {
            mode,
            module_override,
        }
    }

    /// Snapshot the real process environment.
    ///
    /// This is the host boundary's one ambient read; everything past this
    /// point is a pure function of the returned value.
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Snapshot with a custom env var lookup (for testing).
    pub fn from_lookup<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let node_env = env_fn(NODE_ENV_VAR).ok();
        let modules = env_fn(MODULES_VAR).ok();
        let signals = Self {
            mode: BuildMode::decode(node_env.as_deref()),
            module_override: ModuleOverride::decode(modules.as_deref()),
        };
        tracing::debug!(
            ?signals,
            node_env = node_env.as_deref().unwrap_or("<unset>"),
            modules = modules.as_deref().unwrap_or("<unset>"),
            "decoded environment signals"
        );
        signals
    }

    /// Snapshot from raw string values already pulled out of the environment.
    pub fn from_raw(node_env: Option<&str>, modules: Option<&str>) -> Self {
        Self {
            mode: BuildMode::decode(node_env),
            module_override: ModuleOverride::decode(modules),
        }
    }
}

impl Default for EnvSignals {
    fn default() -> Self {
        Self::new(BuildMode::Normal, ModuleOverride::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn clean_env_decodes_to_defaults() {
        let signals = EnvSignals::from_lookup(make_env(&[]));
        assert_eq!(signals.mode, BuildMode::Normal);
        assert_eq!(signals.module_override, ModuleOverride::Default);
        assert_eq!(signals, EnvSignals::default());
    }

    #[test]
    fn node_env_test_decodes_to_test_mode() {
        let signals = EnvSignals::from_lookup(make_env(&[("NODE_ENV", "test")]));
        assert_eq!(signals.mode, BuildMode::Test);
    }

    #[test]
    fn node_env_other_values_are_normal() {
        for value in ["production", "development", "TEST", "testing", ""] {
            let signals = EnvSignals::from_lookup(make_env(&[("NODE_ENV", value)]));
            assert_eq!(signals.mode, BuildMode::Normal, "NODE_ENV={value}");
        }
    }

    #[test]
    fn modules_cjs_decodes_to_commonjs_override() {
        let signals = EnvSignals::from_lookup(make_env(&[("MODULES", "cjs")]));
        assert_eq!(signals.module_override, ModuleOverride::CommonJs);
    }

    #[test]
    fn modules_other_values_are_default() {
        for value in ["esm", "CJS", "commonjs", ""] {
            let signals = EnvSignals::from_lookup(make_env(&[("MODULES", value)]));
            assert_eq!(
                signals.module_override,
                ModuleOverride::Default,
                "MODULES={value}"
            );
        }
    }

    #[test]
    fn both_signals_decode_independently() {
        let signals = EnvSignals::from_lookup(make_env(&[
            ("NODE_ENV", "test"),
            ("MODULES", "cjs"),
        ]));
        assert_eq!(signals.mode, BuildMode::Test);
        assert_eq!(signals.module_override, ModuleOverride::CommonJs);
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        let signals = EnvSignals::from_lookup(make_env(&[("CI", "true"), ("PATH", "/usr/bin")]));
        assert_eq!(signals, EnvSignals::default());
    }

    #[test]
    fn process_env_snapshot_matches_lookup_over_real_env() {
        // No env mutation here; both paths read the same ambient state.
        assert_eq!(
            EnvSignals::from_process_env(),
            EnvSignals::from_lookup(|key| std::env::var(key))
        );
    }

    #[test]
    fn from_raw_matches_lookup_decoding() {
        assert_eq!(
            EnvSignals::from_raw(Some("test"), Some("cjs")),
            EnvSignals::from_lookup(make_env(&[("NODE_ENV", "test"), ("MODULES", "cjs")]))
        );
        assert_eq!(
            EnvSignals::from_raw(None, None),
            EnvSignals::from_lookup(make_env(&[]))
        );
    }
}

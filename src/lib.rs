//! transform-plan - Environment-driven transformation plan resolution.
//!
//! Given two environment signals — a test-mode indicator (`NODE_ENV`) and a
//! module-format override (`MODULES`) — this crate decides which module
//! format a Babel-style compiler should emit and which ordered preset/plugin
//! set should run. It computes the configuration; the compiler that consumes
//! it does all the actual parsing and code generation.
//!
//! # Modules
//!
//! - [`signals`] - Environment signal snapshot and decoding
//! - [`plan`] - Transformation plan types and the resolver
//! - [`cli`] - Command-line interface of the host binary
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use transform_plan::plan::{ModuleFormat, TransformPlan};
//! use transform_plan::signals::{BuildMode, EnvSignals, ModuleOverride};
//!
//! // A test runner invocation: test mode wins over any override.
//! let signals = EnvSignals::new(BuildMode::Test, ModuleOverride::CommonJs);
//! let plan = TransformPlan::resolve(&signals);
//! assert_eq!(plan.output_module_format, ModuleFormat::CommonJs);
//! ```

pub mod cli;
pub mod error;
pub mod plan;
pub mod signals;

pub use error::{PlanError, Result};
pub use plan::{ModuleFormat, TransformPlan};
pub use signals::EnvSignals;

//! Command-line interface for the host boundary binary.
//!
//! The resolver library takes an [`EnvSignals`](crate::signals::EnvSignals)
//! value and never touches the ambient environment; this binary is the host
//! side that performs the one ambient read. The two signals map through
//! clap's `env` attribute, so the binary can be driven either by the real
//! environment variables or by explicit flags (flags win, as usual).

use clap::Parser;

use crate::signals::EnvSignals;

/// transform-plan - Resolve a transformation plan from environment signals.
#[derive(Debug, Parser)]
#[command(name = "transform-plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Test-mode indicator ("test" forces the interop module format)
    #[arg(long, env = "NODE_ENV", value_name = "VALUE")]
    pub node_env: Option<String>,

    /// Module-format override ("cjs" forces the interop module format)
    #[arg(long, env = "MODULES", value_name = "VALUE")]
    pub modules: Option<String>,

    /// Pretty-print the resolved plan
    #[arg(short, long)]
    pub pretty: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Decode the snapshot this invocation resolves against.
    pub fn signals(&self) -> EnvSignals {
        EnvSignals::from_raw(self.node_env.as_deref(), self.modules.as_deref())
    }
}

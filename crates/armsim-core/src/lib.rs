// armsim-core: Config, errors, and frame timing for the armsim workspace.

pub mod config;
pub mod error;
pub mod time;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ComponentSpec, SimConfig};
    pub use crate::error::{ArmsimError, ConfigError};
    pub use crate::time::FrameClock;
}

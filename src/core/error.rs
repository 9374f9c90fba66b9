//=========================================================================
// Core Errors
//=========================================================================
//
// Error taxonomy for the simulation core.
//
//   ConfigError:   invalid or unreadable tunables (fatal at startup)
//   StoreError:    high-score persistence failed (recovered, logged)
//   PlatformError: window system failure (ends `Engine::run`)
//
// Ring indices are always reduced modulo the buffer size and empty-track
// accessors return neutral defaults, so the tick path itself is
// infallible.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::io;
use std::path::PathBuf;

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
///
/// All variants are fatal: the binary logs them and exits before any
/// window is created.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The config file is not valid RON for [`RunnerConfig`](super::config::RunnerConfig).
    Parse { path: PathBuf, message: String },

    /// A tunable is out of its legal range.
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read config {}: {}", path.display(), source)
            }
            Self::Parse { path, message } => {
                write!(f, "Failed to parse config {}: {}", path.display(), message)
            }
            Self::Invalid { field, reason } => {
                write!(f, "Invalid config value `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

//=== StoreError ==========================================================

/// High-score store unavailable.
///
/// Never fatal. Callers fall back to an in-memory score and log a warning.
#[derive(Debug)]
pub enum StoreError {
    /// Reading the backing file failed.
    Read(io::Error),

    /// Writing the backing file failed.
    Write(io::Error),

    /// The backing file exists but holds no readable score.
    Corrupt(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "Score store unavailable (read): {}", e),
            Self::Write(e) => write!(f, "Score store unavailable (write): {}", e),
            Self::Corrupt(msg) => write!(f, "Score store unavailable (corrupt): {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) | Self::Write(e) => Some(e),
            Self::Corrupt(_) => None,
        }
    }
}

//=== PlatformError =======================================================

/// Window system failures surfaced from `Engine::run`.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (no display, wrong thread).
    EventLoopCreation(winit::error::EventLoopError),

    /// The event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

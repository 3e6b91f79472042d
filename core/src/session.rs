//! # Device Session Facade
//!
//! The one seam between discovery and the wire. A session runs one
//! read-only command at a time against a single device and hands back
//! the raw text; command ordering matters to the caller, so everything
//! here is strictly request/response.
//!
//! [`connect`] tries SSH first and falls back to a single Telnet-style
//! attempt, after which the device counts as unreachable for this pass.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

mod ssh;
mod telnet;

pub use ssh::SshSession;
pub use telnet::TelnetSession;

/// Default exec timeout for one command round trip.
pub const COMMAND_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("i/o failure talking to the device: {0}")]
    Io(#[from] std::io::Error),

    #[error("ssh transport failure: {0}")]
    Ssh(#[from] ssh2::Error),

    #[error("device never presented a prompt for '{command}'")]
    PromptTimeout { command: String },

    #[error("authentication rejected for user '{username}'")]
    AuthRejected { username: String },

    /// Every transport to the device was tried and exhausted.
    #[error("all transports to {device} exhausted")]
    Exhausted { device: String },
}

/// Single-use, strictly ordered command channel to one device.
#[async_trait]
pub trait DeviceSession: Send {
    /// Executes one show-style command and returns its full output.
    async fn run(&mut self, command: &str) -> Result<String, SessionError>;

    /// Releases the underlying transport. Must be called on every exit
    /// path; a second call is a no-op.
    async fn disconnect(&mut self);
}

/// Opens a session to `addr`, SSH first, one Telnet fallback.
pub async fn connect(
    device_id: &str,
    addr: &str,
    username: &str,
    password: &str,
) -> Result<Box<dyn DeviceSession>, SessionError> {
    debug!("trying ssh to {device_id} ({addr})");
    match SshSession::open(addr, username, password) {
        Ok(session) => return Ok(Box::new(session)),
        Err(err) => warn!("ssh to {device_id} failed: {err}"),
    }

    debug!("trying telnet to {device_id} ({addr})");
    match TelnetSession::open(addr, username, password) {
        Ok(session) => Ok(Box::new(session)),
        Err(err) => {
            warn!("telnet to {device_id} failed: {err}");
            Err(SessionError::Exhausted {
                device: device_id.to_string(),
            })
        }
    }
}

//! SSH transport over one exec channel per command.

use std::io::Read;
use std::net::TcpStream;
use std::time::Duration;

use async_trait::async_trait;

use super::{COMMAND_TIMEOUT_SECS, DeviceSession, SessionError};

pub struct SshSession {
    session: Option<ssh2::Session>,
}

impl SshSession {
    /// Connects and authenticates with a password; the device gets one
    /// command per exec channel so no prompt emulation is needed.
    pub fn open(addr: &str, username: &str, password: &str) -> Result<Self, SessionError> {
        let stream = TcpStream::connect((addr, 22))?;
        stream.set_read_timeout(Some(Duration::from_secs(COMMAND_TIMEOUT_SECS)))?;
        stream.set_write_timeout(Some(Duration::from_secs(COMMAND_TIMEOUT_SECS)))?;

        let mut session = ssh2::Session::new()?;
        session.set_tcp_stream(stream);
        session.handshake()?;
        session.userauth_password(username, password)?;
        if !session.authenticated() {
            return Err(SessionError::AuthRejected {
                username: username.to_string(),
            });
        }

        Ok(Self {
            session: Some(session),
        })
    }
}

#[async_trait]
impl DeviceSession for SshSession {
    async fn run(&mut self, command: &str) -> Result<String, SessionError> {
        let Some(session) = self.session.as_ref() else {
            return Err(SessionError::Io(std::io::ErrorKind::NotConnected.into()));
        };
        let mut channel = session.channel_session()?;
        channel.exec(command)?;
        let mut output = String::new();
        channel.read_to_string(&mut output)?;
        channel.wait_close()?;
        Ok(output)
    }

    async fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = session.disconnect(None, "discovery pass complete", None);
        }
    }
}

impl Drop for SshSession {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = session.disconnect(None, "dropped", None);
        }
    }
}

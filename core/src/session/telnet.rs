//! Plain-TCP fallback transport with a minimal login dialog.
//!
//! Sufficient for the lab gear that still answers on port 23: option
//! negotiation bytes are stripped rather than negotiated, and the
//! prompt is taken to be a line ending in `#` or `>`.

use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use async_trait::async_trait;

use super::{COMMAND_TIMEOUT_SECS, DeviceSession, SessionError};

const IAC: u8 = 0xFF;

pub struct TelnetSession {
    stream: Option<TcpStream>,
}

impl TelnetSession {
    pub fn open(addr: &str, username: &str, password: &str) -> Result<Self, SessionError> {
        let stream = TcpStream::connect((addr, 23))?;
        stream.set_read_timeout(Some(Duration::from_secs(COMMAND_TIMEOUT_SECS)))?;
        stream.set_write_timeout(Some(Duration::from_secs(COMMAND_TIMEOUT_SECS)))?;

        let mut session = Self {
            stream: Some(stream),
        };
        session.expect(&["Username:", "login:"], "login banner")?;
        session.send_line(username)?;
        session.expect(&["Password:"], "password prompt")?;
        session.send_line(password)?;
        session.expect(&["#", ">"], "exec prompt")?;
        // Stops the device paginating long command output.
        session.send_line("terminal length 0")?;
        session.expect(&["#", ">"], "exec prompt")?;
        Ok(session)
    }

    fn send_line(&mut self, line: &str) -> Result<(), SessionError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(SessionError::Io(ErrorKind::NotConnected.into()));
        };
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
        stream.flush()?;
        Ok(())
    }

    /// Reads until the buffered text ends with one of `markers`. Read
    /// timeouts become [`SessionError::PromptTimeout`] naming `what` so
    /// failures say which stage of the dialog stalled.
    fn expect(&mut self, markers: &[&str], what: &str) -> Result<String, SessionError> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(SessionError::Io(ErrorKind::NotConnected.into()));
        };
        let mut collected: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) => {
                    return Err(SessionError::PromptTimeout {
                        command: what.to_string(),
                    });
                }
                Ok(n) => n,
                Err(err)
                    if err.kind() == ErrorKind::WouldBlock || err.kind() == ErrorKind::TimedOut =>
                {
                    return Err(SessionError::PromptTimeout {
                        command: what.to_string(),
                    });
                }
                Err(err) => return Err(err.into()),
            };
            collected.extend(strip_iac(&chunk[..n]));
            let text = String::from_utf8_lossy(&collected);
            let tail = text.trim_end_matches([' ', '\r', '\n']);
            if markers.iter().any(|marker| tail.ends_with(marker)) {
                return Ok(text.into_owned());
            }
        }
    }
}

/// Drops telnet option negotiation (IAC triples) from a chunk.
fn strip_iac(chunk: &[u8]) -> Vec<u8> {
    let mut cleaned = Vec::with_capacity(chunk.len());
    let mut skip = 0usize;
    for &byte in chunk {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        if byte == IAC {
            skip = 2;
            continue;
        }
        cleaned.push(byte);
    }
    cleaned
}

#[async_trait]
impl DeviceSession for TelnetSession {
    async fn run(&mut self, command: &str) -> Result<String, SessionError> {
        self.send_line(command)?;
        let raw = self.expect(&["#", ">"], command)?;
        // First line is the echoed command, last line the prompt.
        let mut lines: Vec<&str> = raw.lines().collect();
        if !lines.is_empty() {
            lines.remove(0);
        }
        lines.pop();
        Ok(lines.join("\n"))
    }

    async fn disconnect(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(std::net::Shutdown::Both);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iac_triples_are_stripped() {
        let chunk = [0xFF, 0xFB, 0x01, b'h', b'i', 0xFF, 0xFD, 0x03, b'!'];
        assert_eq!(strip_iac(&chunk), b"hi!");
    }

    #[test]
    fn plain_bytes_pass_through() {
        assert_eq!(strip_iac(b"Router#"), b"Router#");
    }
}

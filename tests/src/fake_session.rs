//! Scripted stand-ins for the session layer: a transcript-driven
//! session and openers that either serve it or refuse every device.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use routescout_common::config::Config;
use routescout_common::topology::device::Device;
use routescout_core::discovery::SessionOpener;
use routescout_core::session::{DeviceSession, SessionError};

pub struct FakeSession {
    transcript: HashMap<String, String>,
    disconnected: Arc<AtomicBool>,
}

impl FakeSession {
    pub fn new(transcript: HashMap<String, String>, disconnected: Arc<AtomicBool>) -> Self {
        Self {
            transcript,
            disconnected,
        }
    }
}

#[async_trait]
impl DeviceSession for FakeSession {
    async fn run(&mut self, command: &str) -> Result<String, SessionError> {
        self.transcript
            .get(command)
            .cloned()
            .ok_or_else(|| SessionError::PromptTimeout {
                command: command.to_string(),
            })
    }

    async fn disconnect(&mut self) {
        self.disconnected.store(true, Ordering::Relaxed);
    }
}

/// Serves the same transcript to every device and counts the sessions
/// it hands out.
pub struct FakeOpener {
    transcript: HashMap<String, String>,
    pub opened: AtomicUsize,
    pub disconnected: Arc<AtomicBool>,
}

impl FakeOpener {
    pub fn new(transcript: HashMap<String, String>) -> Self {
        Self {
            transcript,
            opened: AtomicUsize::new(0),
            disconnected: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl SessionOpener for FakeOpener {
    async fn open(
        &self,
        _device: &Device,
        _cfg: &Config,
    ) -> Result<Box<dyn DeviceSession>, SessionError> {
        self.opened.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(FakeSession::new(
            self.transcript.clone(),
            self.disconnected.clone(),
        )))
    }
}

/// Refuses every device, as if both transports were exhausted.
pub struct UnreachableOpener {
    pub attempts: AtomicUsize,
}

impl UnreachableOpener {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SessionOpener for UnreachableOpener {
    async fn open(
        &self,
        device: &Device,
        _cfg: &Config,
    ) -> Result<Box<dyn DeviceSession>, SessionError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        Err(SessionError::PromptTimeout {
            command: device.id.clone(),
        })
    }
}

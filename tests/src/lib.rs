#![cfg(test)]

mod fake_session;
mod pipeline;

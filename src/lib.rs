#![doc(test(attr(deny(warnings))))]

//! Quote Core implements a multi-step motor-insurance quote wizard: a
//! step-sequencing state machine, per-step validators, a deterministic
//! premium calculator, and persisted quote metadata, plus the interactive
//! CLI that renders it.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod quote;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Quote Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

//! Interactive terminal rendering for the wizard.
//!
//! Everything here is presentational: screens display the form and the
//! current validation errors, then hand a [`screens::ScreenAction`] back to
//! the shell loop. Sequencing, validation, pricing, and persistence all live
//! in the library modules.

pub mod output;
pub mod prompts;
pub mod screens;
mod shell;

pub use shell::run_cli;

//! Core library for the `loadpulse` CLI.
//!
//! A [`driver::LoadDriver`] fires a fixed batch of GET requests at randomly
//! chosen targets on every tick of a periodic timer until a deadline passes,
//! logging each outcome through a [`logger::LoadLog`]. The HTTP transport and
//! the log sink are traits so the loop can run against fakes and a paused
//! clock in tests.
pub mod args;
pub mod config;
pub mod driver;
pub mod error;
pub mod http;
pub mod logger;

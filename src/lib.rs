//! Simulated temperature sensor sampling engine with blocking per-consumer reads.
//!
//! ## Example
//!
//! Open a session, start the engine, and block for the first couple of
//! samples.
//!
//! ```rust
//! use std::sync::atomic::AtomicBool;
//!
//! use simtemp::engine::{Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default());
//! engine.start().unwrap();
//!
//! let session = engine.open_session();
//! let cancel = AtomicBool::new(false);
//!
//! let mut buf = [0u8; 16];
//! let sample = engine.read_into(session, &mut buf, &cancel).unwrap();
//! println!("{} mC at {}ns", sample.temp_mc, sample.timestamp_ns);
//!
//! engine.close_session(session);
//! engine.stop();
//! ```
//!
//! ## Modules
//!
//! [`engine`] is the entry point; [`record`] and [`mode`] describe the wire
//! record and operating modes it produces and consumes; [`timer`] is the
//! pluggable tick source; [`readiness`] and [`session`] back the
//! non-blocking poll and per-consumer cursor.

pub mod engine;
mod ffi;
mod generator;
pub mod mode;
pub mod readiness;
pub mod record;
pub mod session;
pub mod timer;

pub mod error;

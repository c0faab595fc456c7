//! LeanPawgress backend: pet weight and calorie tracking.
//!
//! The domain lives in [`domain`], persistence in [`storage`]. [`io::rest`]
//! exposes the domain over HTTP and [`console`] drives it from a line-oriented
//! REPL.

pub mod config;
pub mod console;
pub mod domain;
pub mod io;
pub mod storage;

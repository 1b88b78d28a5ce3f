//! Sound-wave emission and physics for the showroom speakers.
//!
//! Platform-neutral: the web and native front-ends feed analyser frames in
//! and read wave snapshots out.

pub mod collision;
pub mod color;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod instance;
pub mod interference;
pub mod pool;
pub mod spectrum;
pub mod wave;

pub use collision::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use diagnostics::*;
pub use driver::*;
pub use emitter::*;
pub use error::*;
pub use instance::*;
pub use interference::*;
pub use pool::*;
pub use spectrum::*;
pub use wave::*;

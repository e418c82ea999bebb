pub mod analyzer;
pub mod api;
pub mod batch;
pub mod config;
pub mod consts;
pub mod cost;
pub mod encoder;
pub mod engine;
pub mod ergonomics;
pub mod error;
pub mod generator;
pub mod ingest;
pub mod layout;
pub mod path;
pub mod similarity;
pub mod store;
pub mod util;

pub use analyzer::{PasswordAnalyzer, PatternGroup};
pub use encoder::{Fingerprint, PathEncoder};
pub use engine::{EngineBuilder, WalkEngine};
pub use error::{KeyWalkError, KwResult};
pub use layout::{KeyboardLayout, LayoutKind};
pub use path::{Direction, PathFinder, PathStep};

//! Uniquely named temporary files and directories.
//!
//! Names are built as `<prefix><number><suffix>`, where the number comes from a counter seeded
//! randomly once per process. Creation is exclusive, so a name already taken on disk is skipped
//! and the next one tried. Nothing created here is tracked or cleaned up afterwards.

mod builder;
pub mod error;
mod global_consts;
mod helpers;
pub mod name_gen;
pub mod temp_dir;
pub mod temp_file;

pub use builder::Builder;
pub use error::*;
pub use global_consts::NUM_RETRY;
pub use helpers::resolve_dir;
pub use name_gen::NameCounter;
pub use temp_dir::temp_dir;
pub use temp_file::{temp_file, TempFile};

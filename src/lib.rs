//! Small text and number utilities
//!
//! The core is an HTML/XML entity codec ([`encode`] / [`decode`]) with
//! literal-level round-trip fidelity. Around it sit a handful of pure helpers
//! for clamping, bounded random numbers, whitespace and tag sniffing, and
//! circular indexing. Every function takes its value explicitly and touches
//! no shared state.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod sequence;
pub mod text;

pub use codec::{decode, encode};
pub use error::UtilError;
pub use numeric::{
    constrain_to_range, integer_truncate, random_bool, random_within_range,
    random_within_range_with,
};
pub use sequence::{wrapped_index, wrapped_index_f64};
pub use text::{contains_tags, is_empty, trim};

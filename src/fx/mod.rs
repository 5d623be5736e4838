//! Effects.

pub mod all_pass;
pub mod reverb;

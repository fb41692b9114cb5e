// ABOUTME: Permission module - codec, normalizer, matcher and hierarchy.
// ABOUTME: Stateless: every call builds and discards its own working set.

mod codec;
mod hierarchy;
mod matcher;
mod normalize;

pub use codec::*;
pub use hierarchy::*;
pub use matcher::*;
pub use normalize::*;

#[cfg(test)]
mod codec_test;

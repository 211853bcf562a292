//! Fast 8x8 DCT-II/DCT-III block transform.
//!
//! [`forward`] turns an 8x8 [`Block`] of real samples into its
//! frequency-domain representation; [`inverse`] reconstructs the samples.
//! Both mutate the block in place, allocate nothing, and share only the
//! read-only cosine-basis table, so independent blocks can be transformed
//! from any number of threads without synchronization.
//!
//! Applying [`forward`] then [`inverse`] reproduces the original block up
//! to floating-point rounding. Quantization, entropy coding, and block
//! extraction from a larger image belong to the surrounding pipeline.

#![forbid(unsafe_code)]

pub mod basis;
pub mod block;
pub mod dct;
pub mod error;

pub use block::{BLOCK_SIZE, Block, SAMPLES_PER_BLOCK};
pub use dct::{forward, inverse};
pub use error::BlockError;

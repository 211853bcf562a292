use crate::error::BlockError;

/// Side length of a transform block.
pub const BLOCK_SIZE: usize = 8;

/// Number of samples in a transform block.
pub const SAMPLES_PER_BLOCK: usize = BLOCK_SIZE * BLOCK_SIZE;

/// An 8x8 grid of real-valued samples, stored as a flat row-major array.
///
/// Position `(x, y)` with `x` the column and `y` the row maps to flat index
/// `y * 8 + x`. The block is a plain value: the transforms mutate it in
/// place and never allocate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    samples: [f32; SAMPLES_PER_BLOCK],
}

impl Block {
    /// Creates a zero-filled block.
    pub fn new() -> Self {
        Self {
            samples: [0.0; SAMPLES_PER_BLOCK],
        }
    }

    pub fn from_samples(samples: [f32; SAMPLES_PER_BLOCK]) -> Self {
        Self { samples }
    }

    /// Copies samples out of a runtime-sized slice. Anything other than
    /// exactly 64 samples is rejected; a block is never resized or padded.
    pub fn from_slice(samples: &[f32]) -> Result<Self, BlockError> {
        let samples: [f32; SAMPLES_PER_BLOCK] = samples
            .try_into()
            .map_err(|_| BlockError::InvalidLength { got: samples.len() })?;
        Ok(Self { samples })
    }

    /// Fills a block from a function of position, `f(x, y)`.
    pub fn from_fn(f: impl Fn(usize, usize) -> f32) -> Self {
        let mut block = Self::new();
        for y in 0..BLOCK_SIZE {
            for x in 0..BLOCK_SIZE {
                block.set(x, y, f(x, y));
            }
        }
        block
    }

    /// Sample at column `x`, row `y`. Panics if either index is out of range.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < BLOCK_SIZE && y < BLOCK_SIZE);
        self.samples[y * BLOCK_SIZE + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(x < BLOCK_SIZE && y < BLOCK_SIZE);
        self.samples[y * BLOCK_SIZE + x] = value;
    }

    pub fn samples(&self) -> &[f32; SAMPLES_PER_BLOCK] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [f32; SAMPLES_PER_BLOCK] {
        &mut self.samples
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_zeroed() {
        let block = Block::new();
        assert!(block.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn position_maps_to_row_major_index() {
        let mut block = Block::new();
        block.set(3, 5, 7.5);
        assert_eq!(block.get(3, 5), 7.5);
        assert_eq!(block.samples()[5 * BLOCK_SIZE + 3], 7.5);
    }

    #[test]
    fn from_fn_passes_column_then_row() {
        let block = Block::from_fn(|x, y| (x * 10 + y) as f32);
        assert_eq!(block.get(2, 7), 27.0);
        assert_eq!(block.get(7, 2), 72.0);
    }

    #[test]
    fn from_slice_requires_exactly_64_samples() {
        assert!(Block::from_slice(&[0.0; 64]).is_ok());

        let err = Block::from_slice(&[0.0; 63]).unwrap_err();
        assert!(err.to_string().contains("63"));
        let err = Block::from_slice(&[0.0; 65]).unwrap_err();
        assert!(err.to_string().contains("65"));
    }

    #[test]
    fn from_slice_round_trips_samples() {
        let data: Vec<f32> = (0..64).map(|i| i as f32 - 31.5).collect();
        let block = Block::from_slice(&data).unwrap();
        assert_eq!(block.samples().as_slice(), data.as_slice());
    }

    #[test]
    #[should_panic]
    fn get_rejects_out_of_range_column() {
        let block = Block::new();
        block.get(8, 0);
    }
}

//! # SMU Argument Payload
//!
//! Every SMU command carries six 32-bit argument words. The same block is
//! read back as the response when the command succeeds, so callers pass it
//! by mutable reference and find the reply in place.

use core::ops::{Index, IndexMut};

/// Number of argument words per command
pub const SMU_ARG_COUNT: usize = 6;

/// Size of the encoded payload in bytes
pub const SMU_ARGS_SIZE: usize = SMU_ARG_COUNT * core::mem::size_of::<u32>();

/// Six-word argument/response block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct SmuArgs {
    /// Argument words, `args[0]` first on the wire
    pub args: [u32; SMU_ARG_COUNT],
}

static_assertions::const_assert_eq!(core::mem::size_of::<SmuArgs>(), SMU_ARGS_SIZE);
static_assertions::const_assert_eq!(SMU_ARGS_SIZE, 24);

impl SmuArgs {
    /// All-zero payload
    #[inline]
    pub const fn new() -> Self {
        Self { args: [0; SMU_ARG_COUNT] }
    }

    /// Payload from explicit words
    #[inline]
    pub const fn from_words(args: [u32; SMU_ARG_COUNT]) -> Self {
        Self { args }
    }

    /// Payload with only the first word set
    #[inline]
    pub fn with_arg(arg0: u32) -> Self {
        let mut args = [0; SMU_ARG_COUNT];
        args[0] = arg0;
        Self { args }
    }

    /// Words as a slice
    #[inline]
    pub fn words(&self) -> &[u32; SMU_ARG_COUNT] {
        &self.args
    }

    /// Encode as native-endian bytes
    pub fn to_bytes(&self) -> [u8; SMU_ARGS_SIZE] {
        let mut out = [0u8; SMU_ARGS_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.args.iter()) {
            chunk.copy_from_slice(&word.to_ne_bytes());
        }
        out
    }

    /// Decode from native-endian bytes
    pub fn from_bytes(bytes: &[u8; SMU_ARGS_SIZE]) -> Self {
        let mut args = [0u32; SMU_ARG_COUNT];
        for (word, chunk) in args.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { args }
    }
}

impl Index<usize> for SmuArgs {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.args[index]
    }
}

impl IndexMut<usize> for SmuArgs {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.args[index]
    }
}

impl From<[u32; SMU_ARG_COUNT]> for SmuArgs {
    fn from(args: [u32; SMU_ARG_COUNT]) -> Self {
        Self::from_words(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_word_order() {
        let args = SmuArgs::from_words([1, 2, 3, 4, 5, 0xDEAD_BEEF]);
        let bytes = args.to_bytes();
        assert_eq!(&bytes[0..4], &1u32.to_ne_bytes());
        assert_eq!(&bytes[20..24], &0xDEAD_BEEFu32.to_ne_bytes());
        assert_eq!(SmuArgs::from_bytes(&bytes), args);
    }

    #[test]
    fn test_with_arg() {
        let mut args = SmuArgs::with_arg(0x50);
        assert_eq!(args[0], 0x50);
        assert_eq!(&args.words()[1..], &[0; 5]);
        args[5] = 9;
        assert_eq!(args.args[5], 9);
    }
}

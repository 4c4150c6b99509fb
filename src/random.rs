//! Random decisions for the randomized traversal

use rand::RngCore;

/// Source of unbiased random booleans
///
/// The randomized search draws exactly one bit per internal node it visits
/// and uses it to pick which branch to explore first.
pub trait RandomBitSource {
    /// Produce the next random boolean
    fn bit(&mut self) -> bool;
}

impl<T: RandomBitSource + ?Sized> RandomBitSource for &mut T {
    #[inline]
    fn bit(&mut self) -> bool {
        (**self).bit()
    }
}

impl<T: RandomBitSource + ?Sized> RandomBitSource for Box<T> {
    #[inline]
    fn bit(&mut self) -> bool {
        (**self).bit()
    }
}

/// Hands out the bits of one `u64` draw at a time
#[derive(Debug, Clone)]
pub struct BufferedBitSource<R> {
    rng: R,
    buf: u64,
    remaining: u32,
}

impl<R: RngCore> BufferedBitSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            buf: 0,
            remaining: 0,
        }
    }

    /// Give back the wrapped generator; buffered bits are discarded
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomBitSource for BufferedBitSource<R> {
    #[inline]
    fn bit(&mut self) -> bool {
        if self.remaining == 0 {
            self.buf = self.rng.next_u64();
            self.remaining = u64::BITS;
        }
        let bit = self.buf & 1 == 1;
        self.buf >>= 1;
        self.remaining -= 1;
        bit
    }
}

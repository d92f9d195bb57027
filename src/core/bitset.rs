//! PairBitset - one bit per ordered body pair, reset every sub-step.
//!
//! Row `a` holds `words_per_row` u64 words; bit `b` of row `a` is set once the
//! pair (a, b) has been handled in the current sub-step.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct PairBitset {
    bits: Vec<u64>,
    words_per_row: usize,
    body_count: usize,
}

impl PairBitset {
    pub fn new() -> Self {
        Self {
            bits: Vec::new(),
            words_per_row: 0,
            body_count: 0,
        }
    }

    #[inline(always)]
    fn set_bit(bits: &mut [u64], idx: usize) {
        let word = idx >> 6; // idx / 64
        let bit = idx & 63; // idx % 64
        if word < bits.len() {
            bits[word] |= 1u64 << bit;
        }
    }

    #[inline(always)]
    fn check_bit(bits: &[u64], idx: usize) -> bool {
        let word = idx >> 6;
        let bit = idx & 63;
        word < bits.len() && (bits[word] & (1u64 << bit)) != 0
    }

    /// Words needed for `body_count` bodies: `ceil(n / 64) * n`.
    pub fn words_for(body_count: usize) -> usize {
        body_count.div_ceil(64) * body_count
    }

    /// Resize for `body_count` bodies and zero every word.
    pub fn reset(&mut self, body_count: usize) {
        self.body_count = body_count;
        self.words_per_row = body_count.div_ceil(64);
        let words = Self::words_for(body_count);
        if self.bits.len() != words {
            self.bits.resize(words, 0);
        }
        #[cfg(feature = "parallel")]
        {
            self.bits.par_iter_mut().for_each(|w| *w = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.bits.fill(0);
        }
    }

    #[inline]
    fn bit_index(&self, a: u32, b: u32) -> usize {
        debug_assert!((a as usize) < self.body_count && (b as usize) < self.body_count);
        (a as usize) * self.words_per_row * 64 + b as usize
    }

    #[inline]
    pub fn is_marked(&self, a: u32, b: u32) -> bool {
        Self::check_bit(&self.bits, self.bit_index(a, b))
    }

    #[inline]
    pub fn mark(&mut self, a: u32, b: u32) {
        let idx = self.bit_index(a, b);
        Self::set_bit(&mut self.bits, idx);
    }

    /// Marks the unordered pair; returns `false` if it was already marked.
    #[inline]
    pub fn mark_pair(&mut self, a: u32, b: u32) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if self.is_marked(lo, hi) {
            return false;
        }
        self.mark(lo, hi);
        true
    }

}

impl Default for PairBitset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_matches_rows_of_words() {
        assert_eq!(PairBitset::words_for(0), 0);
        assert_eq!(PairBitset::words_for(1), 1);
        assert_eq!(PairBitset::words_for(64), 64);
        assert_eq!(PairBitset::words_for(65), 130);
    }

    #[test]
    fn mark_is_ordered_and_mark_pair_is_not() {
        let mut set = PairBitset::new();
        set.reset(100);

        set.mark(3, 70);
        assert!(set.is_marked(3, 70));
        assert!(!set.is_marked(70, 3));

        assert!(set.mark_pair(90, 5));
        assert!(!set.mark_pair(5, 90));
    }

    #[test]
    fn reset_clears_previous_marks() {
        let mut set = PairBitset::new();
        set.reset(8);
        set.mark(1, 2);
        set.reset(8);
        assert!(!set.is_marked(1, 2));
        assert!(set.mark_pair(1, 2));
    }
}

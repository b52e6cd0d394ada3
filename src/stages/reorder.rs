use crate::stages::Stage;

/// Bit-reversed permutation of `n` interleaved complex points.
#[derive(Debug, Clone, Copy)]
pub struct BitReverse {
    n: usize,
}

impl BitReverse {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T: Copy + Send + Sync> Stage<T> for BitReverse {
    fn apply(&self, data: &mut [T]) {
        bit_rev_pairs(data, self.n);
    }
}

/// Swaps every complex point with the one at its bit-reversed index.
///
/// The reversed index is carried along incrementally, adding one at the top bit and
/// propagating the carry downwards.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn bit_rev_pairs<T: Copy>(data: &mut [T], n: usize) {
    let mut j = 0;

    for i in 1..n {
        let mut bit = n >> 1;

        while (j & bit) != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            data.swap(2 * i, 2 * j);
            data.swap(2 * i + 1, 2 * j + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(x: usize, log_n: u32) -> usize {
        if log_n == 0 {
            return x;
        }
        x.reverse_bits() >> (usize::BITS - log_n)
    }

    #[test]
    fn permutes_complex_points() {
        for log_n in 0..10 {
            let n = 1 << log_n;
            let mut data: Vec<usize> = (0..n).flat_map(|i| [i, i + n]).collect();
            Stage::apply(&BitReverse::new(n), &mut data);

            for (i, pair) in data.chunks_exact(2).enumerate() {
                let expected = reverse(i, log_n);
                assert_eq!(pair, [expected, expected + n]);
            }
        }
    }

    #[test]
    fn is_an_involution() {
        let n = 256;
        let original: Vec<f64> = (0..2 * n).map(|i| i as f64).collect();
        let mut data = original.clone();
        let stage = BitReverse::new(n);
        stage.apply(&mut data);
        assert_ne!(data, original);
        stage.apply(&mut data);
        assert_eq!(data, original);
    }
}

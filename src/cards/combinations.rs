use super::card::Card;

/// Every k-card combination of a pool of cards.
///
/// Works on positions in the pool rather than on the cards themselves: the
/// current combination is a bitmask over pool indices with exactly k bits
/// set, advanced by Gosper's hack to the next mask with the same popcount.
/// Each item lists its cards in pool order, and no combination (as a set)
/// is ever produced twice.
///
/// # Construction
///
/// Created by [`Combinations::new`] from a pool and a draw count `k >= 1`.
/// A pool smaller than `k` yields nothing, which is not an error.
///
/// # Performance
///
/// - Memory: O(1) state beyond the borrowed pool
/// - Time per `.next()`: O(1) to advance, O(k) to materialize the item
/// - Deterministic ordering for reproducible iteration
pub struct Combinations<'a> {
    pool: &'a [Card],
    next: u64,
    total: usize,
    taken: usize,
}

impl<'a> Combinations<'a> {
    /// Largest pool addressable by a 64-bit index mask with room to overflow.
    pub const MAX_POOL: usize = 63;

    pub fn new(pool: &'a [Card], k: usize) -> anyhow::Result<Self> {
        if k == 0 {
            anyhow::bail!("cannot enumerate combinations of zero cards");
        }
        if pool.len() > Self::MAX_POOL {
            anyhow::bail!("pool of {} cards exceeds {}", pool.len(), Self::MAX_POOL);
        }
        let n = pool.len();
        let total = match n < k {
            true => 0,
            false => (0..k).fold(1u128, |x, i| x * (n - i) as u128 / (i + 1) as u128) as usize,
        };
        log::trace!("enumerating {} choose {} = {}", n, k, total);
        Ok(Self {
            pool,
            next: (1u64 << k.min(Self::MAX_POOL)) - 1,
            total,
            taken: 0,
        })
    }
    /// Total number of combinations, C(n, k).
    pub fn combinations(&self) -> usize {
        self.total
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        self.taken >= self.total
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_110                       */ self.next;
        let  a = /* 000_111 <- 000_110 || 000_101 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_001 <-                    */ e >> f;
        let  h = /* 001_001 <- 001_000 || 000_001 */ b | g;
        h
    }
    /// Cards at the set positions of the current mask.
    fn look(&self) -> Vec<Card> {
        let mut mask = self.next;
        let mut cards = Vec::with_capacity(mask.count_ones() as usize);
        while mask > 0 {
            cards.push(self.pool[mask.trailing_zeros() as usize]);
            mask &= mask - 1;
        }
        cards
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<Card>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.taken += 1;
            if !self.exhausted() {
                self.next = self.permute();
            }
            Some(last)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.taken;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

/// Collects every k-card combination of the pool.
pub fn enumerate(pool: &[Card], k: usize) -> anyhow::Result<Vec<Vec<Card>>> {
    Ok(Combinations::new(pool, k)?.collect())
}

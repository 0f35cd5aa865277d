//! Separate-chaining hash set with load-factor driven growth.
//!
//! Buckets are plain vectors scanned linearly. The set doubles its bucket
//! count whenever the average chain length exceeds [`MAX_AVERAGE_BUCKET_SIZE`],
//! which keeps chains short enough that the linear scan stays cheap.

use crate::token::StableHash;

/// Number of buckets a fresh set starts with.
pub const INITIAL_BUCKET_COUNT: usize = 10;

/// Average bucket size above which the set grows.
pub const MAX_AVERAGE_BUCKET_SIZE: f64 = 3.0;

/// A growable hash set of immutable, equality-comparable items.
///
/// There is no iteration-order contract and no key/value storage; the set only
/// answers membership questions and reports bucket statistics.
#[derive(Debug, Clone)]
pub struct BucketSet<T> {
    buckets: Vec<Vec<T>>,
    len: usize,
}

impl<T> Default for BucketSet<T> {
    fn default() -> Self {
        Self {
            buckets: empty_buckets(INITIAL_BUCKET_COUNT),
            len: 0,
        }
    }
}

impl<T: StableHash + Eq> BucketSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`, returning `false` if an equal item is already present.
    ///
    /// The element count is incremented before the load factor is checked, so
    /// the insert that first pushes the average above the threshold is the one
    /// that triggers the resize.
    pub fn insert(&mut self, item: T) -> bool {
        let index = bucket_index(&item, self.buckets.len());
        let bucket = &mut self.buckets[index];
        if bucket.contains(&item) {
            return false;
        }

        bucket.push(item);
        self.len += 1;

        if self.load_factor() > MAX_AVERAGE_BUCKET_SIZE {
            self.resize();
        }
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.buckets[bucket_index(item, self.buckets.len())].contains(item)
    }

    /// Removes an equal item if present. The set never shrinks.
    pub fn remove(&mut self, item: &T) -> bool {
        let index = bucket_index(item, self.buckets.len());
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|existing| existing == item) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Doubles the bucket count and redistributes every item.
    fn resize(&mut self) {
        let new_count = self.buckets.len() * 2;
        let mut new_buckets = empty_buckets(new_count);

        for item in self.buckets.drain(..).flatten() {
            new_buckets[bucket_index(&item, new_count)].push(item);
        }

        tracing::debug!(
            "Resized bucket set to {} buckets ({} items)",
            new_count,
            self.len
        );
        self.buckets = new_buckets;
    }
}

impl<T> BucketSet<T> {
    /// Number of items in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn empty_bucket_count(&self) -> usize {
        self.buckets.iter().filter(|bucket| bucket.is_empty()).count()
    }

    /// Length of the longest chain.
    pub fn largest_bucket_size(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Average number of items per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn stats(&self) -> BucketStats {
        BucketStats {
            size: self.len,
            bucket_count: self.bucket_count(),
            empty_buckets: self.empty_bucket_count(),
            largest_bucket: self.largest_bucket_size(),
        }
    }
}

impl<T: StableHash + Eq> FromIterator<T> for BucketSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

/// A snapshot of bucket statistics for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BucketStats {
    pub size: usize,
    pub bucket_count: usize,
    pub empty_buckets: usize,
    pub largest_bucket: usize,
}

fn empty_buckets<T>(count: usize) -> Vec<Vec<T>> {
    std::iter::repeat_with(Vec::new).take(count).collect()
}

/// Maps an item onto `0..bucket_count` using the magnitude of its hash.
#[allow(clippy::cast_possible_truncation)]
fn bucket_index<T: StableHash>(item: &T, bucket_count: usize) -> usize {
    // `unsigned_abs` keeps i32::MIN well-defined.
    (u64::from(item.stable_hash().unsigned_abs()) % bucket_count as u64) as usize
}

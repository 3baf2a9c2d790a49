//! Bucket queue for Δ-stepping.

use vojo_common::utils::hash::FxHashSet;

/// Groups dense node indices by tentative-distance range.
///
/// Bucket `i` holds the nodes whose tentative distance falls in
/// `[i·Δ, (i+1)·Δ)`. A node occupies at most one bucket; its current bucket
/// index is tracked per node, so relocating it on an improved distance is
/// O(1) rather than a scan of the old bucket. The bucket array grows lazily
/// as larger distances appear, with empty buckets filling any gap.
#[derive(Debug)]
pub(crate) struct BucketQueue {
    delta: f64,
    buckets: Vec<FxHashSet<usize>>,
    position: Vec<Option<usize>>,
}

impl BucketQueue {
    /// Creates an empty queue with bucket width `delta` for `node_count`
    /// nodes.
    pub fn new(delta: f64, node_count: usize) -> Self {
        Self {
            delta,
            buckets: Vec::new(),
            position: vec![None; node_count],
        }
    }

    /// Bucket index covering a tentative distance.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn bucket_index(&self, distance: f64) -> usize {
        (distance / self.delta) as usize
    }

    /// Places `node` in the bucket covering `distance`, removing it from its
    /// previous bucket if it occupied one.
    pub fn insert(&mut self, node: usize, distance: f64) {
        let index = self.bucket_index(distance);
        if let Some(old) = self.position[node] {
            if old == index {
                return;
            }
            self.buckets[old].remove(&node);
        }
        if self.buckets.len() <= index {
            self.buckets.resize_with(index + 1, FxHashSet::default);
        }
        self.buckets[index].insert(node);
        self.position[node] = Some(index);
    }

    /// True when bucket `index` currently holds at least one node.
    pub fn has_members(&self, index: usize) -> bool {
        self.buckets.get(index).is_some_and(|bucket| !bucket.is_empty())
    }

    /// Drains bucket `index`, returning its members in ascending index
    /// order. The drained nodes no longer occupy any bucket.
    pub fn take(&mut self, index: usize) -> Vec<usize> {
        let Some(bucket) = self.buckets.get_mut(index) else {
            return Vec::new();
        };
        let mut members: Vec<usize> = bucket.drain().collect();
        members.sort_unstable();
        for &node in &members {
            self.position[node] = None;
        }
        members
    }

    /// Smallest index of a non-empty bucket at or after `from`.
    pub fn next_nonempty(&self, from: usize) -> Option<usize> {
        (from..self.buckets.len()).find(|&index| !self.buckets[index].is_empty())
    }

    /// Number of bucket slots currently allocated.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

/*

    Bounds of an object's recent history, e.g. its positions over the
    last N network ticks. Lag compensation checks against the total
    first before rewinding anything.

    Re-encapsulating N bounds on every insert is too slow for large N,
    so inserts are grouped in buckets of `bounds_per_bucket`:

        [bucket 0][bucket 1] ... [bucket k][current bucket]
         oldest                                newest

    When a bucket is full it is closed and queued. Once there are more
    than `bounds_limit / bounds_per_bucket` closed buckets, the oldest
    one is evicted and the total is rebuilt from the remaining buckets.
    Hence the history is only precise down to one bucket.

    @date: 18 Oct, 2026
    @author: bartu
*/

use std::collections::VecDeque;

use thiserror::Error;

use crate::prelude::*;
use crate::bbox::MinMaxBounds;
use crate::json_parser::deser_usize;

#[derive(Debug, Clone, Copy, Deserialize, SmartDefault, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct HistoryBoundsSettings {
    #[default = 64]
    #[serde(deserialize_with = "deser_usize")]
    pub bounds_limit: usize,

    #[default = 8]
    #[serde(deserialize_with = "deser_usize")]
    pub bounds_per_bucket: usize,
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("bounds per bucket needs to be at least 1")]
    EmptyBucket,

    #[error("bounds limit {limit} is smaller than bounds per bucket {per_bucket}")]
    LimitBelowBucket { limit: usize, per_bucket: usize },

    #[error("bounds limit {limit} needs to be a multiple of bounds per bucket {per_bucket}")]
    UnevenBuckets { limit: usize, per_bucket: usize },
}

#[derive(Debug, Clone)]
pub struct HistoryBounds {
    bounds_per_bucket: usize,
    bucket_limit: usize,

    full_buckets: VecDeque<MinMaxBounds>,
    current_bucket: Option<MinMaxBounds>,
    current_bucket_size: usize,

    total: Option<MinMaxBounds>,
}

impl HistoryBounds {

    pub fn new(settings: HistoryBoundsSettings) -> Result<Self, HistoryError> {
        let HistoryBoundsSettings { bounds_limit: limit, bounds_per_bucket: per_bucket } = settings;

        if per_bucket == 0 {
            return Err(HistoryError::EmptyBucket);
        }
        if limit < per_bucket {
            return Err(HistoryError::LimitBelowBucket { limit, per_bucket });
        }
        if limit % per_bucket != 0 {
            return Err(HistoryError::UnevenBuckets { limit, per_bucket });
        }

        let bucket_limit = limit / per_bucket;
        debug!("History bounds with {} buckets of {} bounds each", bucket_limit, per_bucket);

        Ok(Self {
            bounds_per_bucket: per_bucket,
            bucket_limit,
            // +1 since we push before evicting
            full_buckets: VecDeque::with_capacity(bucket_limit + 1),
            current_bucket: None,
            current_bucket_size: 0,
            total: None,
        })
    }

    pub fn insert(&mut self, bounds: MinMaxBounds) {
        match self.current_bucket.as_mut() {
            Some(bucket) => bucket.encapsulate_bounds(&bounds),
            None => self.current_bucket = Some(bounds),
        }
        self.current_bucket_size += 1;

        if self.current_bucket_size == self.bounds_per_bucket {
            if let Some(bucket) = self.current_bucket.take() {
                self.full_buckets.push_back(bucket);
            }
            self.current_bucket_size = 0;
        }

        if self.full_buckets.len() > self.bucket_limit {
            if let Some(evicted) = self.full_buckets.pop_front() {
                debug!("Evicted oldest history bucket {}", evicted);
            }
            self.rebuild_total();
            return;
        }

        // nothing left the window, so the total only grows
        match self.total.as_mut() {
            Some(total) => total.encapsulate_bounds(&bounds),
            None => self.total = Some(bounds),
        }
    }

    fn rebuild_total(&mut self) {
        let mut buckets = self.full_buckets.iter().chain(self.current_bucket.iter());
        self.total = buckets.next().copied().map(|first| {
            buckets.fold(first, |mut total, b| {
                total.encapsulate_bounds(b);
                total
            })
        });
    }

    pub fn total(&self) -> Option<MinMaxBounds> {
        self.total
    }

    /// Number of closed buckets, the current one is not counted.
    pub fn bucket_count(&self) -> usize {
        self.full_buckets.len()
    }

    pub fn reset(&mut self) {
        debug!("Resetting history bounds");
        self.full_buckets.clear();
        self.current_bucket = None;
        self.current_bucket_size = 0;
        self.total = None;
    }
}

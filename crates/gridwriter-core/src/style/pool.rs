use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use super::Style;

/// Interned styles of one sheet
///
/// Tables style whole ranges at once, so a sheet rarely carries more than a
/// handful of distinct styles. Cells store an index into this pool; index 0
/// is always the default style.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    // hash -> indices with that hash; collisions share a bucket
    buckets: AHashMap<u64, Vec<u32>>,
}

fn fingerprint(style: &Style) -> u64 {
    let mut hasher = ahash::AHasher::default();
    style.hash(&mut hasher);
    hasher.finish()
}

impl StylePool {
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::new(),
            buckets: AHashMap::new(),
        };
        pool.get_or_insert(Style::default());
        pool
    }

    /// Index of `style`, interning it on first sight
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        let bucket = self.buckets.entry(fingerprint(&style)).or_default();
        let existing = bucket
            .iter()
            .copied()
            .find(|&idx| self.styles[idx as usize] == style);

        match existing {
            Some(idx) => idx,
            None => {
                let idx = self.styles.len() as u32;
                bucket.push(idx);
                self.styles.push(style);
                idx
            }
        }
    }

    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Distinct styles, the default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Nothing interned besides the default
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

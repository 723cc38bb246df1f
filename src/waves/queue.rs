use crate::foundation::core::BUTTON_COUNT;
use crate::waves::wave::Wave;

/// Fixed-capacity FIFO that overwrites its oldest entry when full.
///
/// Storage is an inline array with a head index and a length; pushing never allocates and
/// never fails.
#[derive(Clone, Debug)]
pub struct WaveQueue<T = Wave, const N: usize = BUTTON_COUNT> {
    items: [T; N],
    head: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> Default for WaveQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> WaveQueue<T, N> {
    /// Empty queue.
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    /// Append `item`, evicting and returning the oldest entry when the queue is full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if N == 0 {
            return Some(item);
        }
        if self.len < N {
            self.items[(self.head + self.len) % N] = item;
            self.len += 1;
            None
        } else {
            let evicted = std::mem::replace(&mut self.items[self.head], item);
            self.head = (self.head + 1) % N;
            Some(evicted)
        }
    }

    /// Entry `i` positions after the oldest one.
    pub fn get(&self, i: usize) -> Option<&T> {
        (i < self.len).then(|| &self.items[(self.head + i) % N])
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of stored entries.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Stored entries, oldest first.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            pos: 0,
        }
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a WaveQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Oldest-first iterator over a [`WaveQueue`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T, const N: usize> {
    queue: &'a WaveQueue<T, N>,
    pos: usize,
}

impl<'a, T: Copy + Default, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.queue.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.queue.len - self.pos;
        (rest, Some(rest))
    }
}

impl<T: Copy + Default, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

#[cfg(test)]
#[path = "../../tests/unit/waves/queue.rs"]
mod tests;

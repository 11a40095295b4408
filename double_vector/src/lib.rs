use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{debug, trace, warn};

mod cursor;

pub use cursor::Cursor;

/// Upper bound on the number of slots a `DoubleVector` will allocate.
///
/// Fixed at `2^32 / size_of::<f64>() - 1` regardless of the host pointer width.
pub const MAX_CAPACITY: usize = ((1u64 << 32) / std::mem::size_of::<f64>() as u64 - 1) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DoubleVectorError {
    #[error("index {index} is out of bounds for a vector of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },

    #[error("allocation of {capacity} slots failed")]
    AllocFailed { capacity: usize },

    #[error("cursor does not refer to this vector's current buffer")]
    StaleCursor,
}

pub type Result<T> = std::result::Result<T, DoubleVectorError>;

// Every buffer gets its own stamp so cursors can detect reallocation.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

fn allocate(capacity: usize) -> Result<Box<[f64]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DoubleVectorError::AllocFailed { capacity })?;
    slots.resize(capacity, 0.0);
    Ok(slots.into_boxed_slice())
}

/// A growable array of `f64` that owns its buffer exclusively.
///
/// `len` counts the live elements; the capacity is the length of the boxed
/// buffer. Slots in `[len, capacity)` hold no meaningful value, although
/// `resize`, `pop_back` and `clear` overwrite the slots they vacate.
pub struct DoubleVector {
    buf: Box<[f64]>,
    len: usize,
    stamp: u64,
}

impl DoubleVector {
    /// Creates an empty vector without allocating.
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
            stamp: next_stamp(),
        }
    }

    /// Creates a vector holding `n` zeros, so `len == capacity == n`.
    ///
    /// `n` is clamped to [`MAX_CAPACITY`]. Uses a zeroed allocation and,
    /// like `vec!`, aborts if the allocator refuses it.
    pub fn zeroed(n: usize) -> Self {
        let n = n.min(MAX_CAPACITY);
        Self {
            buf: vec![0.0; n].into_boxed_slice(),
            len: n,
            stamp: next_stamp(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Always [`MAX_CAPACITY`].
    pub fn max_size(&self) -> usize {
        MAX_CAPACITY
    }

    /// True when `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the buffer to exactly `n` slots if `n` exceeds the current
    /// capacity. Never shrinks.
    pub fn reserve(&mut self, n: usize) -> Result<()> {
        if n > self.capacity() {
            check_capacity(n)?;
            self.reallocate(n)?;
        }
        Ok(())
    }

    /// Reallocates so that `capacity == len`.
    pub fn shrink_to_fit(&mut self) {
        if self.len != self.capacity() {
            // Shrinking keeps every live element, so a refused allocation
            // only costs the spare slots.
            if let Err(err) = self.reallocate(self.len) {
                warn!(%err, "shrink_to_fit kept the larger buffer");
            }
        }
    }

    /// Same as [`resize_with_value`](Self::resize_with_value) with `0.0`.
    pub fn resize(&mut self, n: usize) -> Result<()> {
        self.resize_with_value(n, 0.0)
    }

    /// Sets the length to `n`.
    ///
    /// Growing fills `[len, n)` with `val`, reallocating to exactly `n`
    /// slots when needed. Shrinking overwrites the dropped tail `[n, len)`
    /// with `val` and keeps the capacity.
    pub fn resize_with_value(&mut self, n: usize, val: f64) -> Result<()> {
        if n < self.len {
            self.buf[n..self.len].fill(val);
        } else {
            if n > self.capacity() {
                check_capacity(n)?;
                self.reallocate(n)?;
            }
            self.buf[self.len..n].fill(val);
        }
        self.len = n;
        Ok(())
    }

    /// Appends `val`, doubling the capacity when full.
    ///
    /// Fails with [`DoubleVectorError::CapacityExceeded`] once the vector
    /// holds [`MAX_CAPACITY`] elements.
    pub fn push_back(&mut self, val: f64) -> Result<()> {
        if self.len == self.capacity() {
            if self.capacity() >= MAX_CAPACITY {
                debug!(len = self.len, "push_back refused at maximum capacity");
                return Err(DoubleVectorError::CapacityExceeded {
                    requested: self.capacity() + 1,
                    max: MAX_CAPACITY,
                });
            }
            let grown = (self.capacity() * 2).min(MAX_CAPACITY).max(1);
            self.reallocate(grown)?;
        }
        self.buf[self.len] = val;
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and zeroes its slot.
    pub fn pop_back(&mut self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let val = self.buf[self.len];
        self.buf[self.len] = 0.0;
        Some(val)
    }

    /// Zeroes every live slot and sets the length to 0. Capacity is kept.
    pub fn clear(&mut self) {
        self.buf[..self.len].fill(0.0);
        self.len = 0;
    }

    /// Exchanges buffers, lengths and capacities with `other` without
    /// touching any element.
    pub fn swap(&mut self, other: &mut DoubleVector) {
        std::mem::swap(self, other);
    }

    /// Checked access; fails with [`DoubleVectorError::OutOfRange`] past `len`.
    pub fn at(&self, n: usize) -> Result<&f64> {
        let len = self.len;
        self.as_slice()
            .get(n)
            .ok_or(DoubleVectorError::OutOfRange { index: n, len })
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, n: usize) -> Result<&mut f64> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(n)
            .ok_or(DoubleVectorError::OutOfRange { index: n, len })
    }

    /// First element, `None` when empty.
    pub fn front(&self) -> Option<&f64> {
        self.as_slice().first()
    }

    /// Mutable first element.
    pub fn front_mut(&mut self) -> Option<&mut f64> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, `None` when empty.
    pub fn back(&self) -> Option<&f64> {
        self.as_slice().last()
    }

    /// Mutable last element.
    pub fn back_mut(&mut self) -> Option<&mut f64> {
        self.as_mut_slice().last_mut()
    }

    /// The live elements `[0, len)`.
    pub fn as_slice(&self) -> &[f64] {
        &self.buf[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.buf[..self.len]
    }

    /// The whole buffer, spare slots included.
    pub fn data(&self) -> &[f64] {
        &self.buf
    }

    /// Mutable access to the whole buffer. Writes past `len` are allowed but
    /// do not change the length.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.buf
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.stamp)
    }

    /// One past the last live element. Never dereferenceable.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len, self.stamp)
    }

    /// Dereferences `cursor`.
    ///
    /// Fails with [`DoubleVectorError::StaleCursor`] if the buffer the cursor
    /// was taken from has since been reallocated or swapped out, and with
    /// [`DoubleVectorError::OutOfRange`] if it sits outside `[begin, end)`.
    pub fn get(&self, cursor: Cursor) -> Result<&f64> {
        self.check_cursor(cursor)?;
        self.at(cursor.position())
    }

    /// Mutable dereference of `cursor`, checked like [`get`](Self::get).
    pub fn get_mut(&mut self, cursor: Cursor) -> Result<&mut f64> {
        self.check_cursor(cursor)?;
        self.at_mut(cursor.position())
    }

    /// Walks the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Walks the live elements mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.as_mut_slice().iter_mut()
    }

    fn check_cursor(&self, cursor: Cursor) -> Result<()> {
        if cursor.stamp() == self.stamp {
            Ok(())
        } else {
            Err(DoubleVectorError::StaleCursor)
        }
    }

    // The only place elements move. Invalidates every outstanding cursor.
    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        let mut fresh = allocate(capacity)?;
        let keep = self.len.min(capacity);
        fresh[..keep].copy_from_slice(&self.buf[..keep]);
        trace!(from = self.capacity(), to = capacity, "reallocating buffer");
        self.buf = fresh;
        self.len = keep;
        self.stamp = next_stamp();
        Ok(())
    }
}

fn check_capacity(requested: usize) -> Result<()> {
    if requested > MAX_CAPACITY {
        debug!(requested, "growth refused above maximum capacity");
        return Err(DoubleVectorError::CapacityExceeded {
            requested,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}

impl Default for DoubleVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies keep the source's capacity, not just its length. The new buffer
/// is allocated with `vec!`, which aborts on allocation failure.
impl Clone for DoubleVector {
    fn clone(&self) -> Self {
        let mut buf = vec![0.0; self.capacity()].into_boxed_slice();
        buf[..self.len].copy_from_slice(self.as_slice());
        Self {
            buf,
            len: self.len,
            stamp: next_stamp(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() != source.capacity() {
            self.buf = vec![0.0; source.capacity()].into_boxed_slice();
        }
        self.buf[..source.len].copy_from_slice(source.as_slice());
        self.len = source.len;
        self.stamp = next_stamp();
    }
}

impl fmt::Debug for DoubleVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for DoubleVector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl TryFrom<&[f64]> for DoubleVector {
    type Error = DoubleVectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        check_capacity(values.len())?;
        Ok(Self {
            buf: values.into(),
            len: values.len(),
            stamp: next_stamp(),
        })
    }
}

/// Unchecked in the sense of returning no `Result`: an index at or past
/// `len` panics.
impl Index<usize> for DoubleVector {
    type Output = f64;

    fn index(&self, n: usize) -> &f64 {
        &self.as_slice()[n]
    }
}

impl IndexMut<usize> for DoubleVector {
    fn index_mut(&mut self, n: usize) -> &mut f64 {
        &mut self.as_mut_slice()[n]
    }
}

impl<'a> IntoIterator for &'a DoubleVector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut DoubleVector {
    type Item = &'a mut f64;
    type IntoIter = std::slice::IterMut<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

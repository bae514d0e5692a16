//! Reusable scratch buffers.
//!
//! Every match call needs a handful of short-lived vectors (code points of the
//! candidate, code points of the query, matched indexes). Allocating them per
//! call on the keystroke path is measurable, so they are checked out of a
//! [`BufferPool`] and handed back when the [`Pooled`] guard drops.
//!
//! Free lists are kept per thread (`ThreadLocal`), so concurrent callers never
//! contend and never see each other's buffers.

use std::cell::RefCell;
use std::mem::size_of;
use std::ops::{Deref, DerefMut};
use std::sync::LazyLock;

use thread_local::ThreadLocal;

/// Buffers retaining more than this many bytes are dropped on release.
pub const MAX_RETAINED_BYTES: usize = 64 * 1024;

/// Idle buffers kept per thread and element type.
const MAX_IDLE_PER_THREAD: usize = 8;

/// A pool of `Vec<T>` scratch buffers with per-thread free lists.
pub struct BufferPool<T: Send> {
    free: ThreadLocal<RefCell<Vec<Vec<T>>>>,
}

impl<T: Send> Default for BufferPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> BufferPool<T> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            free: ThreadLocal::new(),
        }
    }

    /// Check out an empty buffer. It goes back to this thread's free list when
    /// the guard drops.
    pub fn acquire(&self) -> Pooled<'_, T> {
        let buf = self
            .free
            .get_or(|| RefCell::new(Vec::new()))
            .borrow_mut()
            .pop()
            .unwrap_or_default();
        Pooled { buf, pool: self }
    }

    /// Number of idle buffers held for the calling thread.
    pub fn idle(&self) -> usize {
        self.free.get().map_or(0, |free| free.borrow().len())
    }

    fn release(&self, mut buf: Vec<T>) {
        if buf.capacity().saturating_mul(size_of::<T>().max(1)) > MAX_RETAINED_BYTES {
            return;
        }
        buf.clear();
        let mut free = self.free.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        if free.len() < MAX_IDLE_PER_THREAD {
            free.push(buf);
        }
    }
}

/// A buffer checked out of a [`BufferPool`]. Derefs to `Vec<T>`.
pub struct Pooled<'a, T: Send> {
    buf: Vec<T>,
    pool: &'a BufferPool<T>,
}

impl<T: Send> Deref for Pooled<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.buf
    }
}

impl<T: Send> DerefMut for Pooled<'_, T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.buf
    }
}

impl<T: Send> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

static CHARS: LazyLock<BufferPool<char>> = LazyLock::new(BufferPool::new);
static INDICES: LazyLock<BufferPool<usize>> = LazyLock::new(BufferPool::new);

/// Process-wide pool of code point buffers.
pub fn chars() -> &'static BufferPool<char> {
    &CHARS
}

/// Process-wide pool of matched-index buffers.
pub fn indices() -> &'static BufferPool<usize> {
    &INDICES
}

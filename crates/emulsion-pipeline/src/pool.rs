//! Intermediate buffer pool.
//!
//! The orchestrator bounds memory to a fixed arena of frames and selects
//! buffers by index: two ping-pong slots the stage chain alternates
//! between, plus dedicated slots for the shared bright-pass and its
//! blurred copy. Skipped stages do not swap the ping-pong indices, so
//! the chain never copies just to keep the pattern going.

use emulsion_core::Frame;

/// Ping-pong slot A.
pub(crate) const PING: usize = 0;
/// Ping-pong slot B.
pub(crate) const PONG: usize = 1;
/// Bright-pass extraction, shared by halation and bloom.
pub(crate) const BRIGHT: usize = 2;
/// Blurred bright-pass.
pub(crate) const BLUR: usize = 3;

const POOL_SIZE: usize = 4;

/// Fixed arena of intermediate frames, all sharing one size.
pub(crate) struct BufferPool {
    frames: Vec<Frame>,
    width: u32,
    height: u32,
}

impl BufferPool {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            frames: (0..POOL_SIZE).map(|_| Frame::new(width, height)).collect(),
            width,
            height,
        }
    }

    /// Reallocates the arena when the frame size changes.
    pub(crate) fn ensure_size(&mut self, width: u32, height: u32) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        }
    }

    pub(crate) fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    pub(crate) fn frame_mut(&mut self, index: usize) -> &mut Frame {
        &mut self.frames[index]
    }

    /// Borrows one slot read-only and a different slot mutably.
    pub(crate) fn pair(&mut self, src: usize, dst: usize) -> (&Frame, &mut Frame) {
        assert_ne!(src, dst, "stage input and output must be distinct slots");
        if src < dst {
            let (head, tail) = self.frames.split_at_mut(dst);
            (&head[src], &mut tail[0])
        } else {
            let (head, tail) = self.frames.split_at_mut(src);
            (&tail[0], &mut head[dst])
        }
    }

    /// Runs `f` with two read slots and a distinct write slot.
    ///
    /// The write frame is temporarily moved out of the arena so the
    /// three borrows stay disjoint without unsafe aliasing.
    pub(crate) fn composite<R>(
        &mut self,
        base: usize,
        overlay: usize,
        dst: usize,
        f: impl FnOnce(&Frame, &Frame, &mut Frame) -> R,
    ) -> R {
        assert!(base != dst && overlay != dst);
        let mut out = std::mem::replace(&mut self.frames[dst], Frame::new(0, 0));
        let result = f(&self.frames[base], &self.frames[overlay], &mut out);
        self.frames[dst] = out;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_borrows_are_disjoint() {
        let mut pool = BufferPool::new(4, 4);
        pool.frame_mut(PING).fill([0.5, 0.5, 0.5, 1.0]);
        let (src, dst) = pool.pair(PING, PONG);
        dst.copy_from(src).unwrap();
        assert_eq!(pool.frame(PONG).pixel(0, 0), [0.5, 0.5, 0.5, 1.0]);

        // Reversed order works too.
        let (src, dst) = pool.pair(PONG, PING);
        assert_eq!(src.pixel(0, 0), dst.pixel(0, 0));
    }

    #[test]
    fn composite_restores_the_written_slot() {
        let mut pool = BufferPool::new(2, 2);
        pool.frame_mut(PING).fill([0.25, 0.0, 0.0, 1.0]);
        pool.frame_mut(BLUR).fill([0.5, 0.0, 0.0, 1.0]);
        pool.composite(PING, BLUR, PONG, |a, b, out| {
            out.fill([a.pixel(0, 0)[0] + b.pixel(0, 0)[0], 0.0, 0.0, 1.0]);
        });
        assert_eq!(pool.frame(PONG).pixel(0, 0)[0], 0.75);
    }

    #[test]
    fn ensure_size_reallocates_on_change() {
        let mut pool = BufferPool::new(4, 4);
        pool.ensure_size(4, 4);
        assert_eq!(pool.frame(PING).dimensions(), (4, 4));
        pool.ensure_size(8, 2);
        assert_eq!(pool.frame(BLUR).dimensions(), (8, 2));
    }
}

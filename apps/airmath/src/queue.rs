use std::collections::VecDeque;

use parking_lot::Mutex;

use am_platform::Frame;

/// Bounded buffer capacity between acquisition and processing.
pub const QUEUE_CAPACITY: usize = 3;

/// Bounded frame buffer with drop-oldest-on-full semantics.
///
/// Decouples the camera-rate acquisition thread from the processing tick: the
/// producer never blocks, and a slow consumer only ever loses the stalest
/// frames.
#[derive(Debug)]
pub struct FrameQueue {
    frames: Mutex<VecDeque<Frame>>,
    capacity: usize,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Push a frame, dropping the oldest one when the buffer is full.
    pub fn push(&self, frame: Frame) {
        let mut frames = self.frames.lock();
        if frames.len() == self.capacity {
            frames.pop_front();
        }
        frames.push_back(frame);
    }

    /// Take the oldest frame without blocking.
    pub fn try_pop(&self) -> Option<Frame> {
        self.frames.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.frames.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.lock().is_empty()
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(tag: u8) -> Frame {
        let mut f = Frame::new(2, 2);
        f.put_pixel(0, 0, image::Rgb([tag, 0, 0]));
        f
    }

    fn tag(f: &Frame) -> u8 {
        f.get_pixel(0, 0).0[0]
    }

    #[test]
    fn pops_in_fifo_order() {
        let q = FrameQueue::new();
        q.push(frame(1));
        q.push(frame(2));
        assert_eq!(q.try_pop().map(|f| tag(&f)), Some(1));
        assert_eq!(q.try_pop().map(|f| tag(&f)), Some(2));
        assert_eq!(q.try_pop().map(|f| tag(&f)), None);
    }

    #[test]
    fn full_queue_drops_the_oldest() {
        let q = FrameQueue::new();
        for i in 1..=4 {
            q.push(frame(i));
        }
        assert_eq!(q.len(), QUEUE_CAPACITY);
        assert_eq!(q.try_pop().map(|f| tag(&f)), Some(2));
        assert_eq!(q.try_pop().map(|f| tag(&f)), Some(3));
        assert_eq!(q.try_pop().map(|f| tag(&f)), Some(4));
    }
}

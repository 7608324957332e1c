/// Handle to one requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(u64);

/// Animation-frame primitive driven by the UI loop.
///
/// Callers `request` a frame and receive a handle. Once per redraw tick the
/// loop calls `begin_frame`, which hands over every handle requested before
/// the tick. Handles requested while a frame is being processed fire on the
/// next tick, never the current one.
///
/// The pending list and the caller's fired list trade buffers each tick, so
/// steady-state ticks do not allocate.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(handle);
        handle
    }

    /// Returns true if the handle was still pending
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        match self.pending.iter().position(|h| *h == handle) {
            Some(i) => {
                self.pending.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// Moves the pending handles into `fired`, discarding its old contents.
    pub fn begin_frame(&mut self, fired: &mut Vec<FrameHandle>) {
        fired.clear();
        std::mem::swap(&mut self.pending, fired);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }
}

//! The incremental page window.
//!
//! The listing never renders the whole result set at once: the window
//! exposes a prefix of the filtered+sorted sequence and grows it by one
//! fixed-size increment per accepted proximity signal. This bounds initial
//! render cost and gives infinite scroll its progressive feel.
//!
//! The window is a pure state machine; the asynchronous gap between
//! [`PageWindow::begin_load`] and [`PageWindow::complete_load`] belongs to
//! the caller (see [`crate::api::ProductBrowser::load_more`]).

/// Where the window currently is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// A further increment may be requested.
    Idle,
    /// An increment is in flight; further signals are ignored.
    Loading,
    /// Everything is exposed; terminal until the next reset.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct PageWindow {
    page_size: usize,
    loaded: usize,
    total: usize,
    phase: LoadPhase,
}

impl PageWindow {
    /// `page_size` is clamped to at least 1.
    pub fn new(page_size: usize) -> Self {
        let mut window = Self {
            page_size: page_size.max(1),
            loaded: 0,
            total: 0,
            phase: LoadPhase::Exhausted,
        };
        window.reset(0);
        window
    }

    /// Restart the window over a result set of `total` items: the first page
    /// is exposed immediately, and the window is exhausted right away when
    /// one page covers everything.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.loaded = self.page_size.min(total);
        self.phase = if self.loaded >= total {
            LoadPhase::Exhausted
        } else {
            LoadPhase::Idle
        };
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items currently exposed. Monotonically non-decreasing
    /// between resets.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.loaded < self.total
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Accept a proximity signal. Returns `true` and enters `Loading` when
    /// idle with more to expose; signals arriving while `Loading` or
    /// `Exhausted` are no-ops.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Loading;
        true
    }

    /// Finish the in-flight increment: expose one more page, clamped to the
    /// total, and settle in `Idle` or `Exhausted`. A no-op unless `Loading`.
    pub fn complete_load(&mut self) {
        if self.phase != LoadPhase::Loading {
            return;
        }
        self.loaded = (self.loaded + self.page_size).min(self.total);
        self.phase = if self.loaded >= self.total {
            LoadPhase::Exhausted
        } else {
            LoadPhase::Idle
        };
    }
}

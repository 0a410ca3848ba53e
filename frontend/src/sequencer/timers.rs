use gloo_timers::callback::Timeout;
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveals the caption over the video.
    Caption,
    /// Moves on to the invitation if nobody skipped.
    AutoAdvance,
    /// Video overlay fading out before the phase commits.
    FadeOut,
    /// Invitation fading in after the phase committed.
    FadeIn,
}

impl TimerKind {
    pub fn delay_ms(self) -> u32 {
        match self {
            TimerKind::Caption => 1_000,
            TimerKind::AutoAdvance => 8_000,
            TimerKind::FadeOut => 450,
            TimerKind::FadeIn => 500,
        }
    }
}

/// Arms one-shot timers. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, kind: TimerKind) -> Self::Handle;
}

/// Browser scheduler: reports fired timers back to the component.
pub struct GlooScheduler {
    on_fire: Callback<TimerKind>,
}

impl GlooScheduler {
    pub fn new(on_fire: Callback<TimerKind>) -> Self {
        Self { on_fire }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, kind: TimerKind) -> Timeout {
        let on_fire = self.on_fire.clone();
        Timeout::new(kind.delay_ms(), move || on_fire.emit(kind))
    }
}

/// One slot per timer kind, each holding at most one armed handle.
pub struct TimerSlots<H> {
    caption: Option<H>,
    auto_advance: Option<H>,
    fade_out: Option<H>,
    fade_in: Option<H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self {
            caption: None,
            auto_advance: None,
            fade_out: None,
            fade_in: None,
        }
    }
}

impl<H> TimerSlots<H> {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<H> {
        match kind {
            TimerKind::Caption => &mut self.caption,
            TimerKind::AutoAdvance => &mut self.auto_advance,
            TimerKind::FadeOut => &mut self.fade_out,
            TimerKind::FadeIn => &mut self.fade_in,
        }
    }

    /// Replaces (and so cancels) whatever was armed in the slot.
    pub fn arm(&mut self, kind: TimerKind, handle: H) {
        *self.slot(kind) = Some(handle);
    }

    pub fn disarm(&mut self, kind: TimerKind) {
        self.slot(kind).take();
    }

    /// Consumes the slot for a timer that just fired. False means the firing
    /// is stale and must be ignored.
    pub fn fire(&mut self, kind: TimerKind) -> bool {
        self.slot(kind).take().is_some()
    }

    #[cfg(test)]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Caption => self.caption.is_some(),
            TimerKind::AutoAdvance => self.auto_advance.is_some(),
            TimerKind::FadeOut => self.fade_out.is_some(),
            TimerKind::FadeIn => self.fade_in.is_some(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{Scheduler, TimerKind};

    struct Pending {
        kind: TimerKind,
        due_ms: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        next_seq: u64,
        pending: Vec<Pending>,
    }

    /// Virtual-clock scheduler. Clones share one clock.
    #[derive(Clone, Default)]
    pub struct FakeScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct FakeHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn schedule(&self, kind: TimerKind) -> FakeHandle {
            let mut clock = self.clock.borrow_mut();
            let cancelled = Rc::new(Cell::new(false));
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let due_ms = clock.now_ms + u64::from(kind.delay_ms());
            clock.pending.push(Pending {
                kind,
                due_ms,
                seq,
                cancelled: cancelled.clone(),
            });
            FakeHandle { cancelled }
        }
    }

    impl FakeScheduler {
        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now_ms
        }

        /// Moves the clock to the next live timer due within `limit_ms` and
        /// returns it, or moves to `limit_ms` and returns None.
        pub fn next_due(&self, limit_ms: u64) -> Option<TimerKind> {
            let mut clock = self.clock.borrow_mut();
            clock.pending.retain(|p| !p.cancelled.get());

            let next = clock
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= limit_ms)
                .min_by_key(|(_, p)| (p.due_ms, p.seq))
                .map(|(i, _)| i);

            match next {
                Some(i) => {
                    let fired = clock.pending.remove(i);
                    clock.now_ms = clock.now_ms.max(fired.due_ms);
                    Some(fired.kind)
                }
                None => {
                    clock.now_ms = clock.now_ms.max(limit_ms);
                    None
                }
            }
        }

        pub fn live_timers(&self) -> Vec<TimerKind> {
            self.clock
                .borrow()
                .pending
                .iter()
                .filter(|p| !p.cancelled.get())
                .map(|p| p.kind)
                .collect()
        }
    }
}

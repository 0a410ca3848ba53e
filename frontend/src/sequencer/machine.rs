use log::{debug, info};

use super::audio::AudioSink;
use super::phase::Phase;
use super::timers::{Scheduler, TimerKind, TimerSlots};

/// Everything that can happen to the invitation: user input, fired timers and
/// browser visibility/focus changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Start,
    Skip,
    TimerFired(TimerKind),
    ToggleMute,
    VisibilityChanged { hidden: bool },
    WindowBlur,
    WindowFocus,
    /// First pointer-down or key-down, used to retry blocked autoplay.
    UserGesture,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub muted: bool,
    pub playing: bool,
}

pub struct Sequencer<S: Scheduler, A: AudioSink> {
    phase: Phase,
    caption_visible: bool,
    transitioning: bool,
    invite_visible: bool,
    muted: bool,
    page_hidden: bool,
    gesture_retry: bool,
    timers: TimerSlots<S::Handle>,
    scheduler: S,
    audio: A,
}

impl<S: Scheduler, A: AudioSink> Sequencer<S, A> {
    pub fn new(scheduler: S, audio: A) -> Self {
        Self {
            phase: Phase::Intro,
            caption_visible: false,
            transitioning: false,
            invite_visible: false,
            muted: false,
            page_hidden: false,
            gesture_retry: false,
            timers: TimerSlots::default(),
            scheduler,
            audio,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn caption_visible(&self) -> bool {
        self.caption_visible
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn invite_visible(&self) -> bool {
        self.invite_visible
    }

    pub fn playback(&self) -> PlaybackState {
        PlaybackState {
            muted: self.muted,
            playing: !self.audio.is_paused(),
        }
    }

    #[cfg(test)]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Applies one signal. Returns whether the view needs to re-render.
    pub fn handle(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::Start => self.start(),
            Signal::Skip => self.begin_invite(),
            Signal::TimerFired(kind) => self.timer_fired(kind),
            Signal::ToggleMute => self.toggle_mute(),
            Signal::VisibilityChanged { hidden } => {
                self.page_hidden = hidden;
                if hidden {
                    self.audio.pause();
                } else {
                    self.resume_if_allowed();
                }
                false
            }
            Signal::WindowBlur => {
                self.audio.pause();
                false
            }
            Signal::WindowFocus => {
                if !self.page_hidden {
                    self.resume_if_allowed();
                }
                false
            }
            Signal::UserGesture => {
                if self.gesture_retry {
                    self.gesture_retry = false;
                    debug!("Retrying audio after user gesture");
                    self.start_audio();
                }
                false
            }
        }
    }

    /// Cancels every pending timer and silences the track.
    pub fn teardown(&mut self) {
        self.timers.clear();
        self.gesture_retry = false;
        self.audio.pause();
    }

    fn enter(&mut self, to: Phase) -> bool {
        match self.phase.transition(to) {
            Ok(next) => {
                info!("Phase {} -> {}", self.phase, next);
                self.phase = next;
                true
            }
            Err(e) => {
                debug!("Ignoring transition: {}", e);
                false
            }
        }
    }

    fn arm(&mut self, kind: TimerKind) {
        let handle = self.scheduler.schedule(kind);
        self.timers.arm(kind, handle);
    }

    fn start(&mut self) -> bool {
        if !self.enter(Phase::Video) {
            return false;
        }

        self.caption_visible = false;
        self.arm(TimerKind::Caption);
        self.arm(TimerKind::AutoAdvance);
        self.gesture_retry = !self.muted;
        self.start_audio();
        true
    }

    /// Shared by skip and auto-advance; whichever comes first wins.
    fn begin_invite(&mut self) -> bool {
        if self.transitioning || self.phase != Phase::Video {
            debug!("Invite transition already underway or not in video");
            return false;
        }

        self.transitioning = true;
        self.timers.disarm(TimerKind::Caption);
        self.timers.disarm(TimerKind::AutoAdvance);
        self.caption_visible = false;
        self.arm(TimerKind::FadeOut);
        true
    }

    fn timer_fired(&mut self, kind: TimerKind) -> bool {
        if !self.timers.fire(kind) {
            debug!("Ignoring stale {:?} timer", kind);
            return false;
        }

        match kind {
            TimerKind::Caption => {
                self.caption_visible = true;
                true
            }
            TimerKind::AutoAdvance => self.begin_invite(),
            TimerKind::FadeOut => {
                if !self.enter(Phase::Invite) {
                    return false;
                }
                self.invite_visible = true;
                self.gesture_retry = false;
                self.arm(TimerKind::FadeIn);
                true
            }
            TimerKind::FadeIn => {
                self.transitioning = false;
                true
            }
        }
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.audio.set_muted(self.muted);

        if self.muted {
            self.audio.pause();
            self.gesture_retry = false;
        } else {
            if self.phase == Phase::Video {
                self.gesture_retry = true;
            }
            if !self.page_hidden {
                self.resume_if_allowed();
            }
        }
        true
    }

    fn resume_if_allowed(&mut self) {
        if self.phase == Phase::Intro {
            return;
        }
        self.start_audio();
    }

    fn start_audio(&mut self) {
        if self.muted || !self.audio.is_paused() {
            return;
        }
        self.audio.play();
    }
}

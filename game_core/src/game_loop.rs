//! Frame-driven loop around [`Game`] with cancellable frame scheduling.
//!
//! Hosts deliver frames asynchronously (e.g. `requestAnimationFrame`), and
//! some cannot guarantee that cancelling a queued frame prevents it from
//! firing. Every scheduled frame therefore carries a [`FrameToken`]; frames
//! whose token no longer matches the loop's generation are ignored.

use log::debug;

use crate::game::{FrameReport, Game};
use crate::host::{DrawSurface, ScoreDisplay};
use crate::input::InputState;

/// Identifies the loop generation a frame was scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Host facility that calls back into [`GameLoop::on_frame`] at the next
/// render opportunity
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&mut self, token: FrameToken) -> Self::Handle;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct GameLoop<S: FrameScheduler> {
    pub game: Game,
    scheduler: S,
    generation: u64,
    pending: Option<S::Handle>,
}

impl<S: FrameScheduler> GameLoop<S> {
    pub fn new(game: Game, scheduler: S) -> Self {
        Self {
            game,
            scheduler,
            generation: 0,
            pending: None,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Token a frame scheduled right now would carry
    pub fn current_token(&self) -> FrameToken {
        FrameToken(self.generation)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Start (or restart) a match and schedule its first frame.
    ///
    /// A running loop is stopped first, so at most one frame stream is live.
    pub fn start<D, P>(&mut self, now_ms: f64, surface: &D, display: &mut P)
    where
        D: DrawSurface + ?Sized,
        P: ScoreDisplay + ?Sized,
    {
        self.stop();
        let map = surface.size();
        self.game.start(now_ms, &map);
        display.show_score(&self.game.score);
        self.schedule();
    }

    /// Halt the match and invalidate any frame already queued
    pub fn stop(&mut self) {
        self.game.stop();
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Handle one render opportunity.
    ///
    /// Returns `None` for stale frames (stopped or superseded loop).
    pub fn on_frame<D, P>(
        &mut self,
        token: FrameToken,
        now_ms: f64,
        input: &InputState,
        surface: &mut D,
        display: &mut P,
    ) -> Option<FrameReport>
    where
        D: DrawSurface + ?Sized,
        P: ScoreDisplay + ?Sized,
    {
        if token.0 != self.generation || !self.game.is_running() {
            debug!("Ignoring stale frame for generation {}", token.0);
            return None;
        }
        self.pending = None;

        let map = surface.size();
        let report = self.game.advance(now_ms, &map, input);
        if !report.points.is_empty() {
            display.show_score(&self.game.score);
        }
        self.game.draw(&map, surface);

        if self.game.is_running() {
            self.schedule();
        }
        Some(report)
    }

    fn schedule(&mut self) {
        let token = FrameToken(self.generation);
        self.pending = Some(self.scheduler.request_frame(token));
    }
}

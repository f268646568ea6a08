use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::controls::ControlId;
use crate::core::Axis;
use crate::error::PlotResult;
use crate::render::Renderer;

use super::GraphViewport;
use super::services::EventPoll;

pub const MOVIE_STATUS: &str = "Playing the movie - click the movie control again to stop";

/// Outcome counters of one movie run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovieStats {
    pub frames: usize,
    /// Frames whose deadline had already passed; the view still advanced.
    pub skipped: usize,
    pub stopped_by_click: bool,
}

impl<R: Renderer> GraphViewport<R> {
    /// Scrolls the X axis at the configured page rate until the view touches
    /// the full-data range or a click lands on the movie control.
    ///
    /// Blocks the caller; clicks are polled once per frame.
    pub fn play_movie(&mut self, forward: bool) -> PlotResult<MovieStats> {
        let interval = Duration::from_secs_f64(1.0 / self.config.movie_frames_per_second);
        let step = if forward { 1.0 } else { -1.0 }
            * self.config.movie_page_rate
            * interval.as_secs_f64();
        let control = ControlId::Movie { forward };
        let mut poll = self.services.event_poll.take();
        let mut stats = MovieStats::default();
        self.status = MOVIE_STATUS.to_owned();
        self.status_forced = true;
        debug!(forward, interval_ms = interval.as_millis(), "movie started");

        let mut deadline = Instant::now() + interval;
        let result = loop {
            let range = self.ranges.range(Axis::X);
            let max = self.ranges.max_range(Axis::X);
            if range.low() <= max.low() || range.high() >= max.high() {
                break Ok(());
            }
            if let Some(poll) = poll.as_deref_mut()
                && self.movie_stop_requested(poll, control)
            {
                stats.stopped_by_click = true;
                break Ok(());
            }

            let now = Instant::now();
            let late = now > deadline;
            if !late {
                thread::sleep(deadline - now);
            }
            deadline += interval;

            self.ranges.range_jump(Axis::X, step * range.width());
            self.interaction.set_small_move(true);
            if late {
                stats.skipped += 1;
                continue;
            }
            stats.frames += 1;
            if let Err(err) = self.prepare_draw() {
                break Err(err);
            }
        };

        self.services.event_poll = poll;
        self.controls.set(control, false);
        self.interaction.set_small_move(false);
        self.status.clear();
        self.status_forced = false;
        debug!(
            frames = stats.frames,
            skipped = stats.skipped,
            stopped_by_click = stats.stopped_by_click,
            "movie stopped"
        );
        result?;
        self.prepare_draw()?;
        Ok(stats)
    }

    fn movie_stop_requested(&self, poll: &mut dyn EventPoll, control: ControlId) -> bool {
        let Some(movie) = self.controls.get(control) else {
            return true;
        };
        let mut stop = false;
        while let Some(click) = poll.next_click() {
            stop |= movie.contains(&self.bounds, click.position);
        }
        stop
    }
}

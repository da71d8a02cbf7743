//! Frame timing for host loops.
//!
//! The simulation itself only consumes a `dt`; this helper produces one.
//! Call [`FrameTimer::tick`] once per rendered frame and pass the returned
//! delta to [`FlowFieldSim::step`](crate::flowfield::FlowFieldSim::step),
//! which applies its own hitch clamp on top.

use std::time::{Duration, Instant};

/// Wall-clock frame timer with periodic FPS estimation.
#[derive(Debug)]
pub struct FrameTimer {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl FrameTimer {
    /// Start a timer at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Advance the timer by one frame and return the frame's delta time in
    /// seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let since_fps = now.duration_since(self.fps_update_time);
        if since_fps >= self.fps_update_interval {
            let frames = self.frame_count - self.fps_frame_count;
            self.fps = frames as f32 / since_fps.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Seconds since the timer started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Last frame's delta time in seconds.
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked since the timer started.
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames per second, updated every half second.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

//! Sprite-strip playback cursor.
//!
//! An [`Animation`] points into a shared [`FrameSource`] and keeps its own
//! frame index. Playback is driven by the game loop: the
//! [`animation`](crate::systems::animation::animation) system calls
//! [`Animation::tick`] once per tick with the frame delta, and the cursor
//! advances whenever a full `delay` has accumulated. Nothing runs in the
//! background, so reads during drawing always see a whole frame.

use std::sync::Arc;
use std::time::Duration;

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::resources::framestore::FrameSource;

#[derive(Debug, Component)]
pub struct Animation {
    frames: Arc<FrameSource>,
    index: usize,
    running: bool,
    delay: Duration,
    elapsed: Duration,
}

impl Animation {
    /// Stopped cursor on the first frame of `frames`.
    pub fn new(frames: Arc<FrameSource>) -> Self {
        Self {
            frames,
            index: 0,
            running: false,
            delay: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Start playback, or change the delay of the running playback.
    ///
    /// Restarting with the same delay keeps the time accumulated towards the
    /// next frame. A new delay starts counting from zero, as a fresh ticker.
    pub fn start(&mut self, delay: Duration) {
        if !self.running || delay != self.delay {
            self.elapsed = Duration::ZERO;
        }
        self.running = true;
        self.delay = delay;
    }

    /// Stop playback. Stopping a stopped animation does nothing.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Step to the next frame, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.frame_count();
    }

    /// Independent, stopped cursor over the same frames, starting at frame 0.
    pub fn copy(&self) -> Self {
        Self::new(Arc::clone(&self.frames))
    }

    /// Feed `dt` of game time. Returns how many frames were advanced.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.running {
            return 0;
        }
        if self.delay.is_zero() {
            self.advance();
            return 1;
        }

        self.elapsed += dt;
        let mut steps = 0;
        while self.elapsed >= self.delay {
            self.elapsed -= self.delay;
            self.advance();
            steps += 1;
        }
        steps
    }

    /// Source rectangle of the frame currently shown.
    pub fn current_frame(&self) -> Rectangle {
        self.frames.frame(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    pub fn frame_size(&self) -> Vector2 {
        self.frames.frame_size()
    }

    pub fn frames(&self) -> &Arc<FrameSource> {
        &self.frames
    }
}

#![allow(dead_code)]

use std::fmt;

use live_lin_reg::clock::FrameClock;
use live_lin_reg::error::VizError;
use live_lin_reg::surface::{Frame, Surface};

/// Keeps every presented frame instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame>,
    pub resizes: Vec<(u32, u32)>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Surface for RecordingSurface {
    type Error = VizError;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), VizError> {
        self.width = width;
        self.height = height;
        self.resizes.push((width, height));
        Ok(())
    }

    fn present(&mut self, frame: &Frame) -> Result<(), VizError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Refuses every frame.
#[derive(Debug)]
pub struct BrokenSurface;

#[derive(Debug)]
pub struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("surface is gone")
    }
}

impl std::error::Error for Broken {}

impl Surface for BrokenSurface {
    type Error = Broken;

    fn size(&self) -> (u32, u32) {
        (80, 80)
    }

    fn resize(&mut self, _: u32, _: u32) -> Result<(), Broken> {
        Err(Broken)
    }

    fn present(&mut self, _: &Frame) -> Result<(), Broken> {
        Err(Broken)
    }
}

/// Counts how often the loop waited for a frame.
#[derive(Debug, Default)]
pub struct CountingClock {
    pub waits: usize,
}

impl FrameClock for CountingClock {
    fn wait_for_next_frame(&mut self) {
        self.waits += 1;
    }
}

impl FrameClock for &mut CountingClock {
    fn wait_for_next_frame(&mut self) {
        self.waits += 1;
    }
}

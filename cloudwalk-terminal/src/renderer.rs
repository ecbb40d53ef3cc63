//! Character-cell point plotter for terminal output

use cloudwalk_core::{PointSink, Vector2};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

const POINT_CHAR: char = '@';

/// Plots projected points into a char buffer sized to the terminal
pub struct CharRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
}

impl CharRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for cell in &mut self.char_buffer {
            *cell = ' ';
        }
    }

    /// Plot a single screen point, discarding anything off the buffer
    pub fn plot(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        let (col, row) = (x.round() as i64, y.round() as i64);
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return;
        }
        self.char_buffer[row as usize * self.width + col as usize] = POINT_CHAR;
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::White))?;
        for y in 0..self.height {
            for x in 0..self.width {
                writer.queue(Print(self.char_buffer[y * self.width + x]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print('\n'))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl PointSink for CharRenderer {
    fn emit(&mut self, point: Vector2) {
        self.plot(point.x, point.y);
    }
}

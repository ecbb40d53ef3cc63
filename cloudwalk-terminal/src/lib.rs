//! Terminal host for the cloudwalk kernel
//!
//! Owns the event loop: raw-mode key events are mapped onto the kernel's
//! command set, each command mutates the viewer state and triggers a full
//! re-render as one indivisible unit.

use cloudwalk_core::{Command, Frame, PointCloud, Projection, ViewerState};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};

pub mod renderer;

pub use renderer::CharRenderer;

/// Map a key to a viewer command, following the classic bindings:
/// `wasd` + `r/f` translate, `ijkl` + `u/o` rotate
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') => Some(Command::MoveForward),
        KeyCode::Char('s') => Some(Command::MoveBack),
        KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Char('r') => Some(Command::MoveUp),
        KeyCode::Char('f') => Some(Command::MoveDown),
        KeyCode::Char('i') => Some(Command::PitchUp),
        KeyCode::Char('k') => Some(Command::PitchDown),
        KeyCode::Char('j') => Some(Command::YawLeft),
        KeyCode::Char('l') => Some(Command::YawRight),
        KeyCode::Char('u') => Some(Command::RollLeft),
        KeyCode::Char('o') => Some(Command::RollRight),
        _ => None,
    }
}

/// Main application struct for first-person point cloud viewing
pub struct TerminalApp {
    cloud: PointCloud,
    viewer: ViewerState,
    projection: Projection,
    renderer: CharRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(cloud: PointCloud) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        // terminal cells are roughly twice as tall as wide; shrink the
        // focal length so the default scene fits the cell grid
        let projection = Projection::new(width as u32, height as u32, height as f64, 1.0)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            cloud,
            viewer: ViewerState::default(),
            projection,
            renderer: CharRenderer::new(width as usize, height as usize),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        while self.running {
            // command-driven: block until a key arrives, no animation timer
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Release {
                    continue;
                }
                self.handle_key(code)?;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> io::Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
                Ok(())
            }
            KeyCode::Char('0') => {
                self.viewer.reset();
                self.render()
            }
            code => match command_for_key(code) {
                Some(command) => {
                    // state mutation, renormalization, and re-render form
                    // one indivisible unit per command
                    self.viewer
                        .apply(command)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
                    self.render()
                }
                None => Ok(()),
            },
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();

        let frame = Frame::new(&self.viewer, &self.projection);
        frame.render_into(&self.cloud, &mut self.renderer);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Cloudwalk | eye ({:.1}, {:.1}, {:.1}) | wasd+rf=Move ijkl+uo=Rotate 0=Reset q=Quit",
                self.viewer.eye.x, self.viewer.eye.y, self.viewer.eye.z
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

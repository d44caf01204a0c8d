//! Full-terminal fire display.
//!
//! Each terminal cell shows two fire pixels with an upper half block. Keys:
//! `q`/`Esc` quit, `space` pauses, `g` toggles gamma correction.

use fire_effect_core::color::gamma_correct;
use fire_effect_core::{FireConfig, FireSimulator, FRAME_INTERVAL};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::crossterm::terminal::size as terminal_size;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::DefaultTerminal;
use std::io;
use std::time::Instant;
use tracing::info;

/// Rows kept free under the fire for the status line
const STATUS_ROWS: u16 = 1;

struct App {
    sim: FireSimulator,
    paused: bool,
    gamma: bool,
}

impl App {
    fn new(sim: FireSimulator) -> Self {
        Self {
            sim,
            paused: false,
            gamma: false,
        }
    }

    /// Returns `true` when the key asks to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('g') => self.gamma = !self.gamma,
            _ => {}
        }
        false
    }

    fn step(&mut self) {
        if !self.paused {
            self.sim.update();
        }
    }
}

/// Draws the simulator's last rendered frame, two pixel rows per terminal row.
struct FireView<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
    gamma: bool,
}

impl FireView<'_> {
    fn pixel(&self, x: usize, y: usize) -> Color {
        if y >= self.height {
            return Color::Rgb(0, 0, 0);
        }
        let i = y * self.width * 3 + x * 3;
        let mut rgb = [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]];
        if self.gamma {
            rgb = rgb.map(gamma_correct);
        }
        Color::Rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl Widget for FireView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = self.width.min(area.width as usize);
        let rows = self.height.div_ceil(2).min(area.height as usize);

        for row in 0..rows {
            for x in 0..columns {
                let top = self.pixel(x, row * 2);
                let bottom = self.pixel(x, row * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + row as u16)) {
                    cell.set_char('▀').set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let fire_area = Rect {
        height: area.height.saturating_sub(STATUS_ROWS),
        ..area
    };
    let status_area = Rect {
        y: area.y + fire_area.height,
        height: area.height - fire_area.height,
        ..area
    };

    frame.render_widget(
        FireView {
            pixels: app.sim.buffer(),
            width: app.sim.width(),
            height: app.sim.height(),
            gamma: app.gamma,
        },
        fire_area,
    );

    let status = format!(
        " frame {} | gamma {} | {}q quit  space pause  g gamma",
        app.sim.frame_count(),
        if app.gamma { "on" } else { "off" },
        if app.paused { "PAUSED | " } else { "" },
    );
    frame.render_widget(
        Line::styled(status, Style::default().fg(Color::DarkGray)),
        status_area,
    );
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    let mut next_frame = Instant::now();
    loop {
        let now = Instant::now();
        if now >= next_frame {
            app.step();
            terminal.draw(|frame| draw(frame, app))?;
            next_frame = now + FRAME_INTERVAL;
        }

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && app.handle_key(key.code) => {
                return Ok(());
            }
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // Size the grid before entering the alternate screen so construction logs stay visible
    let (columns, rows) = terminal_size()?;
    let width = usize::from(columns).max(1);
    let height = (usize::from(rows.saturating_sub(STATUS_ROWS)) * 2).max(1);

    let sim = match FireSimulator::new(FireConfig::new(width, height)) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Failed to create fire effect: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(sim);
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    info!(
        "Rendered {} frames at {}x{}",
        app.sim.frame_count(),
        width,
        height
    );
    result
}

use clap::Parser;
use fire_effect_core::color::gamma_correct;
use fire_effect_core::{FireConfig, FireSimulator, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{info, warn};

/// Run the fire effect without a window and print the last frame to the terminal
#[derive(Parser, Debug)]
#[command(name = "fire-effect-demo")]
#[command(about = "Headless procedural fire demo", long_about = None)]
struct Args {
    /// Grid width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 300)]
    frames: u64,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Apply gamma 2.8 to the printed frame
    #[arg(short, long)]
    gamma: bool,

    /// Log stats every N frames (0 disables)
    #[arg(long, default_value_t = 50)]
    report_every: u64,

    /// Skip printing the final frame
    #[arg(long)]
    no_preview: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = FireConfig::new(args.width, args.height);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut sim = match FireSimulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Failed to create fire effect: {}", e);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    for frame in 1..=args.frames {
        sim.tick();
        if args.report_every > 0 && frame % args.report_every == 0 {
            let grid = sim.grid();
            info!(
                frame,
                max_heat = grid.max_heat(),
                total_heat = grid.total_heat(),
                "progress"
            );
        }
    }
    let elapsed = start.elapsed();

    let per_frame_us = if args.frames == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() * 1e6 / args.frames as f64
    };
    info!(
        "Simulated {} frames of {}x{} in {:.2?} ({:.1} µs/frame)",
        args.frames, args.width, args.height, elapsed, per_frame_us
    );

    if args.no_preview {
        return;
    }

    let pixels = sim.render();
    let preview = half_block_frame(pixels, args.width, args.height, args.gamma);

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(preview.as_bytes()).and_then(|()| stdout.flush()) {
        warn!("Failed to write preview: {}", e);
    }
}

/// Render an RGB24 frame as ANSI true-color text, two pixel rows per line.
///
/// Each line uses `▀` with the upper pixel as foreground and the lower one as
/// background. An odd final row gets a black lower half.
fn half_block_frame(pixels: &[u8], width: usize, height: usize, gamma: bool) -> String {
    let stride = width * 3;
    let pixel = |x: usize, y: usize| -> [u8; 3] {
        if y >= height {
            return [0, 0, 0];
        }
        let i = y * stride + x * 3;
        let rgb = [pixels[i], pixels[i + 1], pixels[i + 2]];
        if gamma {
            rgb.map(gamma_correct)
        } else {
            rgb
        }
    };

    let mut out = String::with_capacity(height.div_ceil(2) * (width * 40 + 8));
    for y in (0..height).step_by(2) {
        for x in 0..width {
            let [tr, tg, tb] = pixel(x, y);
            let [br, bg, bb] = pixel(x, y + 1);
            let _ = write!(
                out,
                "\x1b[38;2;{tr};{tg};{tb}m\x1b[48;2;{br};{bg};{bb}m▀"
            );
        }
        out.push_str("\x1b[0m\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_block_pairs_rows() {
        // 1x2 frame: red over blue
        let pixels = [255, 0, 0, 0, 0, 255];
        let text = half_block_frame(&pixels, 1, 2, false);
        assert_eq!(text, "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m▀\x1b[0m\n");
    }

    #[test]
    fn test_half_block_odd_height_pads_black() {
        let pixels = [10, 20, 30];
        let text = half_block_frame(&pixels, 1, 1, false);
        assert!(text.contains("\x1b[48;2;0;0;0m"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_preview_shows_last_simulated_frame() {
        let mut sim = FireSimulator::new(FireConfig::new(3, 4).with_seed(11)).unwrap();
        for _ in 0..5 {
            sim.tick();
        }
        let preview = half_block_frame(sim.render(), 3, 4, false);
        assert_eq!(sim.frame_count(), 5);

        let mut reference = FireSimulator::new(FireConfig::new(3, 4).with_seed(11)).unwrap();
        for _ in 0..4 {
            reference.tick();
        }
        let expected = half_block_frame(reference.update(), 3, 4, false);
        assert_eq!(preview, expected);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["demo-headless"]);
        assert_eq!(args.width, DEFAULT_WIDTH);
        assert_eq!(args.height, DEFAULT_HEIGHT);
        assert!(!args.gamma);
    }
}

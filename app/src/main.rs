use anyhow::Context;
use clap::Parser;
use sin_wave_core::{
    Config, FrameLoop, FrequencyOscillation, Rgb24, UpdatePolicy,
    config::{DEFAULT_FREQUENCY, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    pacing::DEFAULT_FPS,
};
use sin_wave_sdl2::Display;
use std::process::ExitCode;

fn parse_rgb24(s: &str) -> Result<Rgb24, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected a colour as RRGGBB, got \"{s}\""));
    }
    let value = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
    Ok(Rgb24::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

#[derive(Parser, Debug)]
#[command(name = "sin_wave")]
#[command(about = "Renders an animated sine wave. Press q to quit.")]
struct Args {
    /// Screen width
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Screen height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Fullscreen
    #[arg(short, long)]
    fullscreen: bool,
    /// Number of cycles across the width of the screen
    #[arg(
        short = 'F',
        long,
        default_value_t = DEFAULT_FREQUENCY,
        allow_negative_numbers = true
    )]
    frequency: f32,
    /// Peak height in pixels [default: half the screen height]
    #[arg(short, long, allow_negative_numbers = true)]
    amplitude: Option<f32>,
    /// Phase in radians [default: random]
    #[arg(long, allow_negative_numbers = true)]
    phase: Option<f32>,
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,
    #[arg(long, value_parser = parse_rgb24, default_value = "ffffff")]
    foreground: Rgb24,
    #[arg(long, value_parser = parse_rgb24, default_value = "000000")]
    background: Rgb24,
    /// Sweep the frequency back and forth between --min-frequency and
    /// --max-frequency
    #[arg(long)]
    animate_frequency: bool,
    #[arg(long, default_value_t = FrequencyOscillation::default().min)]
    min_frequency: f32,
    #[arg(long, default_value_t = FrequencyOscillation::default().max)]
    max_frequency: f32,
    /// Change in frequency per millisecond while animating
    #[arg(long, default_value_t = FrequencyOscillation::default().rate_per_ms)]
    frequency_rate: f32,
}

impl Args {
    fn into_config(self) -> Config {
        let update_policy = if self.animate_frequency {
            UpdatePolicy::OscillateFrequency(FrequencyOscillation {
                min: self.min_frequency,
                max: self.max_frequency,
                rate_per_ms: self.frequency_rate,
            })
        } else {
            UpdatePolicy::Static
        };
        Config {
            width: self.width,
            height: self.height,
            fullscreen: self.fullscreen,
            frequency: self.frequency,
            amplitude: self.amplitude,
            phase: self.phase,
            fps: self.fps,
            foreground: self.foreground,
            background: self.background,
            update_policy,
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    let mut state = config.render_state(&mut rand::thread_rng());
    let wave = state.wave();
    log::info!(
        "frequency: {}, phase: {}, amplitude: {}",
        wave.frequency,
        wave.phase,
        wave.amplitude
    );
    let mut display =
        Display::new(config).context("failed to initialize display")?;
    let mut frame_loop =
        FrameLoop::new(config.frame_pacer()?, config.update_policy);
    frame_loop.run(&mut state, &mut display.surface, &mut display.events)
}

fn main() -> ExitCode {
    env_logger::init();
    let config = Args::parse().into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

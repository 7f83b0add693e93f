use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tiny_skia::Pixmap;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use rose_core::{PaletteMode, PipelineConfig, Preset, RenderLoop, SampleSlot, CANVAS_SIZE};

mod input;
mod raster;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    /// 6-24 slices, fixed rose frequency, step 1-360
    Curve,
    /// 6-12 slices, frequency 2-10, step 50-100
    Reduced,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PaletteArg {
    Ramp,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "rose-native")]
#[command(about = "Sensor-driven Maurer rose kaleidoscope")]
#[command(version = "0.1.0")]
struct Cli {
    /// Line source: `-` for stdin, or a file / serial device path
    #[arg(long, default_value = "-")]
    input: String,

    /// Parameter domain set
    #[arg(long, value_enum, default_value = "curve")]
    preset: PresetArg,

    /// Palette strategy (defaults to the preset's own)
    #[arg(long, value_enum)]
    palette: Option<PaletteArg>,

    /// Seed for the random palette
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore the light reading
    #[arg(long)]
    no_light: bool,

    /// Ignore the button
    #[arg(long)]
    no_fill_toggle: bool,

    /// Skip the central motif
    #[arg(long)]
    no_center: bool,

    /// Target frames per second
    #[arg(long, default_value = "60")]
    fps: u32,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        let preset = match self.preset {
            PresetArg::Curve => Preset::Curve,
            PresetArg::Reduced => Preset::Reduced,
        };
        let mut config = PipelineConfig::for_preset(preset);
        if let Some(palette) = self.palette {
            config.palette = match palette {
                PaletteArg::Ramp => PaletteMode::Ramp,
                PaletteArg::Random => PaletteMode::Random,
            };
        }
        config.seed = self.seed.unwrap_or_else(rand::random);
        config.secondary_signal &= !self.no_light;
        config.fill_toggle &= !self.no_fill_toggle;
        config.central_motif &= !self.no_center;
        config
    }
}

type WindowSurface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

fn present(surface: &mut WindowSurface, window: &Window, pixmap: &Pixmap) -> anyhow::Result<()> {
    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
    else {
        return Ok(());
    };
    surface
        .resize(width, height)
        .map_err(|e| anyhow!("surface resize: {e}"))?;
    let mut buffer = surface
        .buffer_mut()
        .map_err(|e| anyhow!("surface buffer: {e}"))?;
    raster::blit(
        pixmap,
        &mut buffer[..],
        size.width as usize,
        size.height as usize,
    );
    buffer
        .present()
        .map_err(|e| anyhow!("surface present: {e}"))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.pipeline_config();
    log::info!(
        "[native] preset={:?} palette={:?} light={} fill_toggle={} center={}",
        config.preset,
        config.palette,
        config.secondary_signal,
        config.fill_toggle,
        config.central_motif
    );

    // Input reader thread -> latest-sample slot -> frame tick
    let slot = SampleSlot::new();
    let source = input::open(&cli.input)?;
    input::spawn_reader(source, slot.clone())?;
    log::info!("[input] reading from {}", cli.input);

    let event_loop = EventLoop::new()?;
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("Maurer Rose Kaleidoscope")
            .with_inner_size(LogicalSize::new(CANVAS_SIZE as f64, CANVAS_SIZE as f64))
            .with_resizable(false)
            .build(&event_loop)?,
    );
    let context =
        softbuffer::Context::new(window.clone()).map_err(|e| anyhow!("softbuffer: {e}"))?;
    let mut surface =
        softbuffer::Surface::new(&context, window.clone()).map_err(|e| anyhow!("softbuffer: {e}"))?;

    let size = CANVAS_SIZE as u32;
    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| anyhow!("Failed to create pixmap"))?;
    let mut render_loop = RenderLoop::new(config);

    let frame_interval = Duration::from_secs_f64(1.0 / cli.fps.max(1) as f64);
    let mut next_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::RedrawRequested,
            ..
        } => {
            let frame = render_loop.frame(slot.take());
            raster::render(&mut pixmap, &frame);
            if let Err(e) = present(&mut surface, &window, &pixmap) {
                log::error!("[native] {e:?}");
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_frame {
                window.request_redraw();
                next_frame = now + frame_interval;
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
        }
        _ => {}
    })?;
    Ok(())
}

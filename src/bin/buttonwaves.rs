use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use buttonwaves::{
    Animation, BUTTON_COUNT, ButtonSet, ButtonWaves, DEFAULT_FILL, EngineConfig, FrameInput,
    InMemoryOptions, JsonFileOptions, MaskSetting, OptionsStore, PixelMatrix, Rgb8, StaticFill,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "buttonwaves", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a press script and write every frame as one row of a PNG.
    Simulate(SimulateArgs),
    /// Show or cycle the mask setting persisted in an options file.
    Mode(ModeArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Press script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output pixels per button and per frame.
    #[arg(long, default_value_t = 8)]
    scale: u32,
}

#[derive(Parser, Debug)]
struct ModeArgs {
    /// Options JSON file (created if missing).
    #[arg(long)]
    options: PathBuf,

    /// What to do with the stored mode.
    #[arg(value_enum, default_value_t = ModeAction::Show)]
    action: ModeAction,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeAction {
    Show,
    Next,
    Prev,
}

#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
struct Script {
    presses: Vec<ScriptPress>,
    config: EngineConfig,
    mode: Option<MaskSetting>,
    background: Option<Rgb8>,
}

#[derive(serde::Deserialize, Debug)]
struct ScriptPress {
    button: usize,
    start_ms: f64,
    end_ms: f64,
}

impl Script {
    fn pressed_at(&self, t_ms: f64) -> ButtonSet {
        self.presses
            .iter()
            .filter(|p| (p.start_ms..p.end_ms).contains(&t_ms))
            .map(|p| p.button)
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Mode(args) => cmd_mode(args),
    }
}

fn read_script(path: &Path) -> anyhow::Result<Script> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let script: Script =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?;
    if let Some(p) = script.presses.iter().find(|p| p.button >= BUTTON_COUNT) {
        anyhow::bail!("script presses button {}, panel has {BUTTON_COUNT}", p.button);
    }
    Ok(script)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0.0, "--fps must be > 0");
    anyhow::ensure!(args.scale > 0, "--scale must be > 0");
    let script = read_script(&args.script)?;

    let matrix = PixelMatrix::one_per_button();
    let options = InMemoryOptions {
        mask_setting: script.mode.map(|m| m.ordinal() as i32),
    };
    let mut fill = StaticFill::new(matrix.clone(), script.background.unwrap_or(DEFAULT_FILL));
    let mut waves = ButtonWaves::new(matrix, script.config, options, None)?;

    let width = BUTTON_COUNT as u32 * args.scale;
    let height = args.frames * args.scale;
    let mut img = image::RgbImage::new(width, height);

    for frame_idx in 0..args.frames {
        let t_ms = f64::from(frame_idx) * 1000.0 / args.fps;
        let input = FrameInput::new((t_ms * 1000.0) as u64, Some(script.pressed_at(t_ms)));

        let mut frame = [Rgb8::BLACK; BUTTON_COUNT];
        fill.animate(&mut frame, &input);
        waves.animate(&mut frame, input.pressed, input.now_micros);

        for (button, px) in frame.iter().enumerate() {
            let x0 = button as u32 * args.scale;
            let y0 = frame_idx * args.scale;
            for y in y0..y0 + args.scale {
                for x in x0..x0 + args.scale {
                    img.put_pixel(x, y, image::Rgb([px.r, px.g, px.b]));
                }
            }
        }
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, mode {})",
        args.out.display(),
        args.frames,
        waves.mask_setting()
    );
    Ok(())
}

fn cmd_mode(args: ModeArgs) -> anyhow::Result<()> {
    let options = JsonFileOptions::open(&args.options)?;
    let mut engine = ButtonWaves::new(
        PixelMatrix::one_per_button(),
        EngineConfig::default(),
        options,
        None,
    )?;
    let mode = match args.action {
        ModeAction::Show => engine.mask_setting(),
        ModeAction::Next => engine.cycle_forward()?,
        ModeAction::Prev => engine.cycle_backward()?,
    };
    println!(
        "{mode} ({})",
        engine.options().load_mask_setting().unwrap_or(-1)
    );
    Ok(())
}

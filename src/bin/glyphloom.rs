use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glyphloom::{
    BackgroundKind, FontLibrary, FontStyle, FrameSink, GifSink, Palette, PngSink, RenderConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glyphloom", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render text to a PNG, or a looping GIF with --animate.
    Render(RenderArgs),
    /// List background kinds and font styles.
    List,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Text to render.
    text: String,

    /// JSON job file; flags given on the command line override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Starting font size in points.
    #[arg(long)]
    font_size: Option<f32>,

    /// Background pattern (see `glyphloom list`).
    #[arg(long)]
    bg: Option<BackgroundKind>,

    /// Font style (see `glyphloom list`).
    #[arg(long)]
    font: Option<FontStyle>,

    /// Show the background only through the text.
    #[arg(long)]
    reveal_bg: bool,

    /// Write a looping GIF cycling through the text effects.
    #[arg(long)]
    animate: bool,

    /// Output directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory holding the Roboto .ttf files.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(args: &RenderArgs) -> anyhow::Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_path(path)?,
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(font_size) = args.font_size {
        config.font_size = font_size;
    }
    if let Some(bg) = args.bg {
        config.background = bg;
    }
    if let Some(font) = args.font {
        config.font_style = font;
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(fonts_dir) = &args.fonts_dir {
        config.fonts_dir = fonts_dir.clone();
    }
    config.reveal |= args.reveal_bg;
    config.animate |= args.animate;
    config.validate().context("configuration error")?;
    Ok(config)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let library = FontLibrary::new(&config.fonts_dir);
    let palette = Palette::studio();

    let extension = if config.animate { "gif" } else { "png" };
    let path = glyphloom::output_path(&config.output_dir, &args.text, extension)?;
    let mut sink: Box<dyn FrameSink> = if config.animate {
        Box::new(GifSink::new(&path, palette.clone()))
    } else {
        Box::new(PngSink::new(&path))
    };

    glyphloom::render_to_sink(&args.text, &config, &library, &palette, sink.as_mut())
        .with_context(|| format!("generate '{}'", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn cmd_list() {
    println!("backgrounds:");
    for key in BackgroundKind::sorted_keys() {
        println!("  {key}");
    }
    println!("fonts:");
    for key in FontStyle::sorted_keys() {
        println!("  {key}");
    }
}

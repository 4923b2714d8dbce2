use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardsmith::{
    AnimationMode, CardError, CardSpec, Combination, FsAssetSource, Side, SpriteLibrary, ThemeKey,
    XorShift32,
};

#[derive(Parser, Debug)]
#[command(name = "cardsmith", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card file to a standalone HTML preview.
    Render(RenderArgs),
    /// Print seeded sprite placements as JSON.
    Sprites(SpritesArgs),
    /// Print the SVG path data of one border edge.
    Edge(EdgeArgs),
    /// Print the CSS background of a texture.
    Texture(TextureArgs),
    /// Print random background/decoration combinations as JSON.
    Shuffle(ShuffleArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input card JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,

    /// Asset directory holding `backgrounds/` and `decorations/` (defaults to the card's folder).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Placement seed; overrides the card's `seed`.
    #[arg(long)]
    seed: Option<i32>,
}

#[derive(Parser, Debug)]
struct SpritesArgs {
    #[arg(long, default_value = "pool")]
    theme: String,

    #[arg(long, default_value_t = 15)]
    density: usize,

    /// Sprite scale in percent.
    #[arg(long, default_value_t = 100.0)]
    scale: f64,

    /// `off`, `gentle` or `lively`.
    #[arg(long, default_value = "gentle")]
    animation: String,

    #[arg(long)]
    seed: Option<i32>,
}

#[derive(Parser, Debug)]
struct EdgeArgs {
    #[arg(long)]
    style: String,

    #[arg(long, default_value = "default")]
    variant: String,

    #[arg(long, default_value = "top")]
    side: String,

    /// Edge length in canvas units.
    #[arg(long, default_value_t = 900.0)]
    length: f64,
}

#[derive(Parser, Debug)]
struct TextureArgs {
    #[arg(long)]
    kind: String,

    #[arg(long, default_value_t = 40)]
    scale: i32,
}

#[derive(Parser, Debug)]
struct ShuffleArgs {
    #[arg(long)]
    seed: Option<i32>,

    #[arg(long, default_value_t = 1)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sprites(args) => cmd_sprites(args),
        Command::Edge(args) => cmd_edge(args),
        Command::Texture(args) => cmd_texture(args),
        Command::Shuffle(args) => cmd_shuffle(args),
    }
}

fn rng_for(seed: Option<i32>) -> XorShift32 {
    seed.map_or_else(XorShift32::from_entropy, XorShift32::new)
}

fn report(warnings: &[CardError]) {
    for w in warnings {
        eprintln!("warning: {w}");
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read card '{}'", args.in_path.display()))?;
    let spec = CardSpec::from_json(&text)
        .with_context(|| format!("parse card '{}'", args.in_path.display()))?;
    spec.validate()?;

    let assets_root = args.assets.clone().unwrap_or_else(|| {
        args.in_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    let library = SpriteLibrary::load(&FsAssetSource::new(assets_root));
    report(&library.warnings);

    let mut rng = rng_for(args.seed.or(spec.seed));
    let card = cardsmith::render_card(&spec, &mut rng, &library.value);
    report(&card.warnings);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, card.value.to_html())
        .with_context(|| format!("write html '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sprites(args: SpritesArgs) -> anyhow::Result<()> {
    let key = ThemeKey::resolve(&args.theme);
    report(&key.warnings);
    let animation = AnimationMode::parse(&args.animation)
        .with_context(|| format!("unknown animation mode '{}'", args.animation))?;

    let mut rng = rng_for(args.seed);
    let placed = cardsmith::generate_placements(
        &key.value.theme(),
        args.density,
        args.scale,
        animation,
        &mut rng,
    );
    report(&placed.warnings);

    println!("{}", serde_json::to_string_pretty(&placed.value)?);
    Ok(())
}

fn cmd_edge(args: EdgeArgs) -> anyhow::Result<()> {
    let side: Side = args.side.parse()?;
    let resolved = cardsmith::resolve_edge(&args.style, &args.variant);
    report(&resolved.warnings);

    let Some((style, variant)) = resolved.value else {
        eprintln!("edge style '{}' draws nothing", args.style.trim());
        return Ok(());
    };
    match cardsmith::build_edge_path(style, variant, side, args.length) {
        Some(path) => println!("{}", path.to_svg()),
        None => eprintln!("edge style '{style}' draws nothing"),
    }
    Ok(())
}

fn cmd_texture(args: TextureArgs) -> anyhow::Result<()> {
    let css = cardsmith::texture_css(&args.kind, args.scale);
    report(&css.warnings);
    println!("{}", css.value);
    Ok(())
}

fn cmd_shuffle(args: ShuffleArgs) -> anyhow::Result<()> {
    let mut rng = rng_for(args.seed);
    let picks: Vec<Combination> = (1..=args.count)
        .map(|serial| Combination::random(&mut rng, serial))
        .collect();
    println!("{}", serde_json::to_string_pretty(&picks)?);
    Ok(())
}

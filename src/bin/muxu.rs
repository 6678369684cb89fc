use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "muxu", version)]
struct Cli {
    /// JSON config overriding player/checkout defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one hero sweep and print a JSON line per display tick.
    Sweep(SweepArgs),
    /// Paint one frame covering a viewport and write it as PNG.
    Frame(FrameArgs),
    /// List the catalog with size pricing.
    Catalog(CatalogArgs),
    /// Create a checkout session for the given cart lines and print its URL.
    Checkout(CheckoutArgs),
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Frame directory or base URL.
    #[arg(long)]
    frames: String,

    #[arg(long, value_enum, default_value_t = SweepDirection::Forward)]
    direction: SweepDirection,

    /// Start index (clamped into the sequence).
    #[arg(long, default_value_t = 0)]
    from: u32,

    /// Virtual display refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SweepDirection {
    Forward,
    Backward,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame directory or base URL.
    #[arg(long)]
    frames: String,

    #[arg(long)]
    index: u32,

    #[arg(long)]
    width: u32,

    #[arg(long)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    #[arg(long, default_value = "es")]
    locale: String,

    /// Message catalog JSON used for product names.
    #[arg(long)]
    messages: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckoutArgs {
    #[arg(long, value_enum)]
    backend: BackendChoice,

    /// Override the configured session endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Cart line as `product_id:size[:quantity]`, e.g. `lotus:grande:2`.
    #[arg(long = "item", required = true)]
    items: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Hosted,
    Card,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Sweep(args) => cmd_sweep(args, config),
        Command::Frame(args) => cmd_frame(args, config),
        Command::Catalog(args) => cmd_catalog(args),
        Command::Checkout(args) => cmd_checkout(args, config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<muxu::Config> {
    match path {
        Some(p) => muxu::Config::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(muxu::Config::default()),
    }
}

fn cmd_sweep(args: SweepArgs, config: muxu::Config) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let root = muxu::AssetRoot::parse(&args.frames);
    let mut player = muxu::FramePlayer::open(root, config.player)?;
    player.seek(muxu::FrameIndex(args.from));

    let direction = match args.direction {
        SweepDirection::Forward => muxu::Direction::Down,
        SweepDirection::Backward => muxu::Direction::Up,
    };
    let t0 = Instant::now();
    let dt = Duration::from_secs(1) / args.fps;
    player.start_sweep(direction, t0);

    let mut now = t0;
    loop {
        let tick = player.tick(now);
        let line = serde_json::json!({
            "t_ms": now.duration_since(t0).as_millis() as u64,
            "index": tick.index.0,
            "drawn": tick.drawn.map(|i| i.0),
            "title": tick.overlays.title.opacity,
            "subtitle": tick.overlays.subtitle.opacity,
        });
        println!("{line}");
        if !tick.animating {
            break;
        }
        now += dt;
    }
    player.shutdown();
    Ok(())
}

fn cmd_frame(args: FrameArgs, config: muxu::Config) -> anyhow::Result<()> {
    let root = muxu::AssetRoot::parse(&args.frames);
    let count = muxu::resolve_frame_count(&root, config.player.default_frame_count);
    let frame = muxu::load_frame(&root, count, muxu::FrameIndex(args.index))?;
    let img = muxu::render_cover(Some(&frame), args.width, args.height)?;
    img.save(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let locale: muxu::Locale = args.locale.parse()?;
    let messages = match &args.messages {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("read messages '{}'", p.display()))?;
            muxu::Messages::from_json_str(&raw)?
        }
        None => muxu::Messages::default(),
    };

    for p in muxu::commerce::catalog::builtin() {
        let line = serde_json::json!({
            "id": p.id,
            "slug": p.slug,
            "locale": locale.code(),
            "name": messages.product_field(p.id, "name", p.name),
            "tagline": messages.product_field(p.id, "tagline", p.tagline),
            "price": muxu::format_price(p.price_cents),
            "limitedEdition": p.limited_edition,
            "sizes": muxu::pricing_options(p),
        });
        println!("{line}");
    }
    Ok(())
}

fn parse_item(raw: &str) -> anyhow::Result<(&'static muxu::Product, muxu::Size, u32)> {
    let mut parts = raw.split(':');
    let (Some(id), Some(size)) = (parts.next(), parts.next()) else {
        anyhow::bail!("item '{raw}' must look like product_id:size[:quantity]");
    };
    let product = muxu::commerce::catalog::require(id)?;
    let size: muxu::Size = size.parse()?;
    let quantity = match parts.next() {
        Some(q) => q
            .parse::<u32>()
            .with_context(|| format!("quantity in '{raw}'"))?,
        None => 1,
    };
    if quantity == 0 {
        anyhow::bail!("quantity in '{raw}' must be at least 1");
    }
    Ok((product, size, quantity))
}

fn cmd_checkout(args: CheckoutArgs, config: muxu::Config) -> anyhow::Result<()> {
    let mut cart = muxu::Cart::new();
    for raw in &args.items {
        let (product, size, quantity) = parse_item(raw)?;
        let unit = muxu::commerce::catalog::size_price(product, size);
        cart.add_quantity(product.id, size, unit, quantity);
    }

    let mut checkout = config.checkout;
    let kind = match args.backend {
        BackendChoice::Hosted => muxu::CheckoutKind::Hosted,
        BackendChoice::Card => muxu::CheckoutKind::Card,
    };
    if let Some(endpoint) = args.endpoint {
        match kind {
            muxu::CheckoutKind::Hosted => checkout.hosted_endpoint = endpoint,
            muxu::CheckoutKind::Card => checkout.card_endpoint = endpoint,
        }
    }

    let transport = muxu::UreqTransport::new(checkout.timeout());
    let backend = muxu::commerce::checkout::backend(kind, &checkout, transport);
    let url = backend
        .create_session(cart.items())
        .with_context(|| format!("create {} checkout session", backend.name()))?;
    eprintln!(
        "{} items, subtotal {}",
        cart.total_items(),
        muxu::format_price(u32::try_from(cart.subtotal_cents()).unwrap_or(u32::MAX))
    );
    println!("{url}");
    Ok(())
}

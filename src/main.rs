use std::io::Read;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use emotedex::application::{EmoteResolver, TokenExtractor};
use emotedex::domain::entities::{EmoteCache, ResolvedEmote};
use emotedex::infrastructure::{
    AppConfig, BasicEmoteLoader, CliArgs, DirAssetSource, JsonEmoteStore,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn gather_text(args: &CliArgs) -> Result<String> {
    if args.text.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(args.text.join(" "))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = AppConfig::load(&args)?;

    init_logging(&config)?;

    info!(version = emotedex::VERSION, "Starting emotedex");

    let store = Arc::new(JsonEmoteStore::load(&config.index_path())?);
    let assets = Arc::new(DirAssetSource::new(config.pack_dir.clone()));
    let loader = Arc::new(BasicEmoteLoader::new());
    let cache = Arc::new(EmoteCache::new(
        config.image_cache_size,
        config.animation_cache_size,
    ));
    let resolver = EmoteResolver::new(cache.clone(), store.clone(), assets, loader);

    info!(
        pack = %config.pack_dir.display(),
        emotes = store.len(),
        "Emote pack loaded"
    );

    let text = gather_text(&args)?;
    let tokens = TokenExtractor::extract_tokens(&text);

    if tokens.is_empty() {
        println!("no emote tokens found");
        return Ok(());
    }

    for token in &tokens {
        match resolver.resolve(token) {
            Some(ResolvedEmote::Static { bounds, .. }) => {
                println!(":{token}: still image, {bounds}");
            }
            Some(ResolvedEmote::Animated { animation, bounds }) => {
                println!(
                    ":{token}: animation, {bounds}, {} frames, {:?} per loop",
                    animation.frame_count(),
                    animation.total_duration()
                );
            }
            None => println!(":{token}: unresolved"),
        }
    }

    println!("{}", cache.stats());

    Ok(())
}

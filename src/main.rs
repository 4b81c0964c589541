use clap::Parser;
use scala_prep::config::{Cli, Command, FetchConfig, JarConfig};
use scala_prep::core::{descriptor, fetch, install, jar, resolve};
use scala_prep::utils::{logger, validation::Validate};
use scala_prep::CoursierFetcher;
use std::fs;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Fetch(config) => run_fetch(config).await,
        Command::Jar(config) => run_jar(config),
    }
}

async fn run_fetch(config: FetchConfig) -> anyhow::Result<()> {
    config.validate()?;

    let install_dir = install::scala_install_dir(&config.install_root);
    let coursier = install::install_coursier(&install_dir).await?;

    let cache_dir = config
        .cache_dir
        .clone()
        .unwrap_or_else(|| install::ivy_cache_dir(&config.install_root));
    fs::create_dir_all(&cache_dir)?;

    let dep_files = config.descriptor_files();
    let projects = descriptor::load_projects(&dep_files)?;
    tracing::info!(
        "Loaded {} projects from {} descriptor files",
        projects.len(),
        dep_files.len()
    );

    let groups = resolve::resolve(&projects)?;
    tracing::info!("Resolved {} dependency groups", groups.len());

    let fetcher = CoursierFetcher::new(coursier);
    fetch::fetch_all(&fetcher, &cache_dir, &groups).await?;

    println!("✅ Fetched {} dependency groups", groups.len());
    Ok(())
}

fn run_jar(config: JarConfig) -> anyhow::Result<()> {
    config.validate()?;
    jar::build_jar(&config.output, &config.dirs)?;
    println!("✅ Wrote {}", config.output.display());
    Ok(())
}

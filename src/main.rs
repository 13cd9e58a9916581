use blueprint_registry::utils::{logger, validation::Validate};
use blueprint_registry::{
    seed_examples, BlueprintService, CliConfig, RegistryConfig, TomlConfig,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting blueprint-registry");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Either the TOML file or the CLI flags drive the wiring; both satisfy
    // the same configuration surface.
    let toml_config;
    let config: &dyn RegistryConfig = match &cli.config {
        Some(path) => {
            let loaded = TomlConfig::from_file(path)?;
            loaded.validate()?;
            toml_config = loaded;
            &toml_config
        }
        None => &cli,
    };

    tracing::info!(
        "Active filter: {}, store backend: {}",
        config.filter_kind(),
        config.backend()
    );

    let store = config.backend().build(config.data_dir())?;
    let service = BlueprintService::new(store.clone(), config.filter_kind().build());

    if config.seed() {
        let inserted = seed_examples(store.as_ref())?;
        if inserted > 0 {
            println!("Seeded {} example blueprints", inserted);
        }
    }

    let all = service.get_all_blueprints();
    println!("Registry holds {} blueprints", all.len());
    for bp in &all {
        let filtered = service.get_blueprint(&bp.author, &bp.name)?;
        println!(
            "  {}/{}: {} points stored, {} after {} filter",
            bp.author,
            bp.name,
            bp.points.len(),
            filtered.points.len(),
            config.filter_kind()
        );
    }

    tracing::info!("✅ Done");
    Ok(())
}

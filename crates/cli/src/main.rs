fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = stockroom_infra::InventoryConfig::from_env();
    tracing::debug!(path = %config.path.display(), "using inventory file");

    let stdout = std::io::stdout();
    stockroom_cli::run(&config, &mut stdout.lock())
}

use anyhow::Result;
use clap::Parser;
use startup_cofounder::cli::{self, Args};
use startup_cofounder::generator::modules::ModuleRegistry;
use startup_cofounder::generator::workflow::launch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config()?;

    init_tracing(config.verbose);

    if args.list_modules {
        print!("{}", cli::format_module_list(&ModuleRegistry::builtin()));
        return Ok(());
    }

    let idea = args.read_idea()?;
    launch(&config, &idea).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "warn,startup_cofounder=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

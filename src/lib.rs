pub mod cli;
pub mod config;
pub mod db;
pub mod entities;

use clap::Parser;
use cli::{Cli, Commands};
pub use config::Config;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let args = Cli::parse();

    match args.command {
        None | Some(Commands::Demo) => cli::cmd_demo(&config).await,

        Some(Commands::Add {
            name,
            username,
            email,
            address,
        }) => cli::cmd_add_user(&config, &name, &username, &email, address.as_deref()).await,

        Some(Commands::List) => cli::cmd_list_users(&config).await,

        Some(Commands::Show { user }) => cli::cmd_show_user(&config, &user).await,

        Some(Commands::Rename { id, name }) => cli::cmd_rename_user(&config, id, &name).await,

        Some(Commands::Remove { id }) => cli::cmd_remove_user(&config, id).await,

        Some(Commands::Init) => cli::cmd_init(),
    }
}

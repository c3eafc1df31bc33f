use anyhow::Context;
use course_registration::modules::registration::application::registration_system as registry;
use course_registration::shared::config::Config;
use course_registration::shell::menu::Menu;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .init();
    tracing::info!(
        minimum_payment_ratio = config.payment_policy.minimum_ratio,
        "registration system starting"
    );

    let mut system = registry::RegistrationSystem::new().with_policy(config.payment_policy);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut system, stdin.lock(), stdout.lock())
        .run()
        .context("menu loop failed")?;
    Ok(())
}

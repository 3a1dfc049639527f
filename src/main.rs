use namely::configuration::get_configuration;
use namely::startup::build;
use namely::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("namely".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let server = build(configuration).await?;
    server.await?;

    Ok(())
}

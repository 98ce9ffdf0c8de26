#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fithub_server::start().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    metasync::run().await
}

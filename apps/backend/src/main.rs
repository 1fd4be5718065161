#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kana_drill_backend::run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nl2sql_server::start().await
}

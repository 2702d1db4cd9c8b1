use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    careerhub::cli::run().await
}

use coldmail_lib::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG from it applies to the subscriber.
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();
    coldmail_lib::logging::init(cli.verbose);
    coldmail_lib::run(cli).await
}

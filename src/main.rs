use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = profilecard::cli::Cli::parse();

    if let Err(err) = profilecard::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

use clap::Parser;
use lexiscan::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lexiscan::tracing::init(cli.verbose);

    let config = cli.resolve_config()?;
    tracing::info!(
        "Analyzing {} against {}",
        config.corpus.display(),
        config.dictionary.display()
    );

    let report = lexiscan::analysis::run(&config).await.inspect_err(|e| {
        tracing::error!("Analysis failed: {:?}", e);
    })?;

    if cli.json {
        println!("{}", report.render_json()?);
    } else {
        println!("{}", report.render_text());
    }

    Ok(())
}

use anyhow::Result;
use clap::Parser;

use mentor::{
    app::load_config,
    cli::{handle_command, Cli},
    models::ModelFactory,
    runtime::{OneShotRunner, Repl},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a .env file before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Subcommands that don't need a session
    if let Some(command) = &cli.command {
        if handle_command(command)? {
            return Ok(());
        }
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        let toml_str = std::fs::read_to_string(config_path)?;
        toml::from_str(&toml_str)?
    } else {
        load_config().unwrap_or_default()
    };

    // CLI flag overrides the configured model
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }

    // The backend reads the API credential here; a missing credential
    // stops the process before any session exists.
    let model = ModelFactory::create(&config)?;

    if let Some(question) = cli.prompt.clone() {
        // One-shot mode: --module plus --prompt, answer and exit
        let module = cli.module.clone().unwrap_or_default();
        let runner = OneShotRunner::new(model);
        let reply = runner.execute(&module, &question).await?;
        println!("{reply}");
        return Ok(());
    }

    // Interactive mentoring session
    let mut repl = Repl::new(model);
    repl.run(cli.module.clone()).await
}

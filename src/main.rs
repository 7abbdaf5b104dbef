//! Главный исполняемый файл sqlproxy-lexer

use clap::Parser;
use sqlproxy_lexer::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;
    cli::init_logging(&config)?;

    cli::run(cli, &config)
}

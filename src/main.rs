use clap::Parser;
use skillstd_rust::{cli, error, extractor, verifier};
use cli::{Cli, Commands};
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { excel, output } => {
            println!("📊 skillstd - スキルレベル抽出\n");
            extractor::run(&excel, &output)?;
        }

        Commands::Verify => {
            println!("🔍 skillstd - データ整合性検証\n");
            let passed = verifier::run()?;
            if !passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Splits Dagor Engine packed textures into separate PBR maps
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(commands::convert::ConvertCmd),
    Inspect(commands::inspect::InspectCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Convert(cmd) => {
            commands::convert::handle_convert_command(cmd)?;
        }
        Commands::Inspect(cmd) => {
            commands::inspect::handle_inspect_command(cmd)?;
        }
    }

    Ok(())
}

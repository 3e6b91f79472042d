mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, resume};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Discover {
            inventory,
            username,
            password,
            output_prefix,
        } => {
            print::header("route discovery");
            discover::discover(inventory, username, password, output_prefix).await
        }
        Commands::Resume => {
            print::header("loading last snapshot");
            resume::resume()
        }
    }
}

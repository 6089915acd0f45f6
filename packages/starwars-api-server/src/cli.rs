pub(crate) use crate::commands::run;
use clap::{Parser, Subcommand};
use starwars_lib::config::ApiServerArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "starwars-api-server",
    about = "Star Wars GraphQL API server",
    version,
    rename_all = "kebab-case"
)]
pub struct Opt {
    #[clap(subcommand)]
    command: ApiServer,
}

#[derive(Debug, Subcommand)]
pub enum ApiServer {
    Run(ApiServerArgs),
}

pub async fn run_cli() -> anyhow::Result<()> {
    let opt = Opt::try_parse();

    match opt {
        Ok(opt) => match opt.command {
            ApiServer::Run(args) => run::exec(args).await,
        },
        Err(e) => {
            // Prints the error and exits.
            e.exit()
        }
    }
}

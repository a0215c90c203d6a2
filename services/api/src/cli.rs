use crate::report::{run_calculate, run_programs, CalculateArgs, ProgramsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skills_funding::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "skills-funding",
    about = "Check vocational training funding eligibility from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work out which funding programs an applicant qualifies for
    Calculate(CalculateArgs),
    /// List the programs in the catalog
    Programs(ProgramsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Calculate(args) => run_calculate(args),
        Command::Programs(args) => run_programs(args),
    }
}

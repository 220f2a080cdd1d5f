use crate::commands::{run_catalog, run_check, run_submit, CatalogArgs, CheckArgs, SubmitArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hbsa_apply::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HBSA Apply",
    about = "Serve and exercise the HBSA committee application intake",
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
    /// Print the committee catalog
    Catalog(CatalogArgs),
    /// Walk an application JSON file through every wizard page and preview the webhook payload
    Check(CheckArgs),
    /// Forward an application JSON file to the configured spreadsheet webhook
    Submit(SubmitArgs),
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
        Command::Catalog(args) => run_catalog(args),
        Command::Check(args) => run_check(args),
        Command::Submit(args) => run_submit(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["hbsa-apply"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_takes_a_file() {
        let cli = Cli::try_parse_from(["hbsa-apply", "check", "application.json"]).expect("parses");
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.file, std::path::PathBuf::from("application.json"))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["hbsa-apply", "serve", "--port", "8080"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(8080)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}

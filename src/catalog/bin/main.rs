use std::io;
use clap::Parser;
use library_catalog::console;
use library_catalog::console::prompt::Prompter;
use library_catalog::core::controller::AppState;
use library_catalog::core::library::LibraryError;
use library_catalog::core::repository::RepositoryStore;
use library_catalog::utils::logs::setup_tracing;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Library branch recorded on every catalog event
    #[arg(long, default_value = "main")]
    branch: String,
    /// Disable structured logs on stderr
    #[arg(long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let args = Args::parse();
    setup_tracing(args.quiet);

    let state = AppState::new(args.branch.as_str(), RepositoryStore::InMemory);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    console::run(&state, &mut prompter).await
}

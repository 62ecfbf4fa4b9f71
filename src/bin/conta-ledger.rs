use anyhow::Result;
use conta_ledger::bin_utils::Service;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // logs go to stderr so the session transcript stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    let service = Service {
        input: stdin,
        output: &mut stdout,
    };
    service.run()
}

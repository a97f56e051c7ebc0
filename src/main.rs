//! relnote binary entry point.

use relnote::cli;
use relnote::ui::output;

#[tokio::main]
async fn main() {
    if let Err(error) = cli::run().await {
        output::error(format!("{:#}", error));
        std::process::exit(1);
    }
}

//! Service entry point.

use std::process::ExitCode;

use tracing::error;

use salute::{Config, Error, Greeter, Server};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env();
    let greeter = Greeter::new(&config);

    Server::bind(config.addr).await?.serve(greeter).await
}

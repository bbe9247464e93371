use std::io::{self, Write};

use city_weather::{ApiClient, Config, ViewModel, render};
use tracing::{info, span};
use tracing_subscriber::EnvFilter;

/// The main function initializes the tracing subscriber, reads the API key from the
/// environment, and enters a loop that looks up every city the user types until
/// the user inputs "exit" or closes stdin.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    let mut view_model = ViewModel::new(ApiClient::new(config));

    println!("{}", render::banner());

    // read city names until the user sends `exit`
    while let Some(line) = read_line()? {
        let city = line.trim_start_matches('>').trim();
        if city == "exit" {
            info!("User wants to exit");
            break;
        }

        if !city.is_empty() {
            span!(tracing::Level::INFO, "lookup", role = "user").in_scope(|| {
                info!(city);
            });
        }

        if view_model.submit(city).await {
            println!("{}", render::render(&view_model));
        }
    }

    Ok(())
}

/// Prompts and reads one line; `None` at end of input.
fn read_line() -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

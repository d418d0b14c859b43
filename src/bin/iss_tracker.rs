use spacewatch::config::client::ClientConfig;
use spacewatch::logging;
use spacewatch::tracker::display::{display_astronauts, display_position, BANNER, FOOTER};
use spacewatch::tracker::open_notify::Tracker;
use spacewatch::tracker::transport::HttpTransport;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = ClientConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}\n", BANNER)?;

    // Fetch failures are printed, never turned into a failing exit status.
    match HttpTransport::new(config.clone()) {
        Ok(transport) => {
            let tracker = Tracker::new(transport, config);

            let position = tracker.position(&mut out)?;
            display_position(&mut out, position.as_ref())?;
            writeln!(out)?;

            let astronauts = tracker.astronauts(&mut out)?;
            display_astronauts(&mut out, astronauts.as_ref())?;
        }
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP client");
            writeln!(out, "Error creating HTTP client: {}", e)?;
            display_position(&mut out, None)?;
            writeln!(out)?;
            display_astronauts(&mut out, None)?;
        }
    }

    writeln!(out, "\n{}", FOOTER)?;
    out.flush()?;
    Ok(())
}

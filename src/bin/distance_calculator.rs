use spacewatch::calculator::report::write_report;
use spacewatch::logging;
use std::error::Error;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out)?;
    out.flush()?;
    Ok(())
}

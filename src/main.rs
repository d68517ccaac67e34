use std::error::Error;
use std::io::{self, BufWriter, Write};

use rps::app::{Config, Snapshot};
use rps::ui::Column;
use rps::utils::init_logging;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = match Config::from_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    let snapshot = match Snapshot::capture(&config) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("rps error: {err}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        rows = snapshot.records().len(),
        comm_width = snapshot.layout().width(Column::Command),
        "rendering process table"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match snapshot.write_to(&mut out).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        // reader went away, e.g. `rps | head`
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}

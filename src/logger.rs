use log::LevelFilter;
use env_logger::{Builder, Target};
use indicatif::ProgressBar;
use std::io::{self, Write};
use chrono::Local;

/// Writes log lines to stderr with the progress bar cleared, then
/// redraws the bar underneath.
struct ProgressWriter {
    progress: ProgressBar,
}

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.progress.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.progress.suspend(|| io::stderr().flush())
    }
}

/// `RUST_LOG`, when set, wins over the `verbose` switch.
pub fn init(verbose: bool, progress: &ProgressBar) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(ProgressWriter { progress: progress.clone() })))
        .init();

    log::debug!("Logger initialized at {}.", level);
}

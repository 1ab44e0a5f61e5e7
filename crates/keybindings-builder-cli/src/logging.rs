// Logging setup for the kbb binary

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Log level for the given verbosity flags; `quiet` wins over `verbose`
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// The fmt subscriber kbb logs through
pub fn subscriber<W>(level: Level, ansi: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .finish()
}

/// Install the stderr subscriber based on CLI flags
///
/// Colors are only used when stderr is a terminal. Calling this more than
/// once keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let _ = subscriber(
        level_for(verbose, quiet),
        atty::is(atty::Stream::Stderr),
        std::io::stderr,
    )
    .try_init();
}

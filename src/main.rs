use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use kurbo::Size;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trail_rs::config::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use trail_rs::session::Severity;
use trail_rs::svg::SvgSink;
use trail_rs::{NmeaFeed, TrackingSession, render};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Replay an NMEA log, measure the distance walked and draw the path as SVG"
)]
struct Args {
    /// NMEA log to read (e.g. a capture of /dev/serial0). Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the SVG drawing. Writes stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Drawing surface width in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    height: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trail_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let surface = Size::new(args.width, args.height);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            info!("reading NMEA sentences from {:?}", path);
            Box::new(BufReader::new(File::open(path)?))
        }
        None => {
            info!("reading NMEA sentences from stdin");
            Box::new(io::stdin().lock())
        }
    };

    let mut feed = NmeaFeed::new(reader);
    let mut session = TrackingSession::new();
    let mut sink = SvgSink::new();

    info!("{}", session.start()?);
    render(session.path().points(), surface, &mut sink);
    let mut rendered_version = session.path().version();

    while session.is_tracking() {
        let Some(event) = feed.next() else {
            if let Some(message) = session.stop() {
                info!("{}", message);
            }
            break;
        };

        let message = session.handle(event)?;
        match message.severity {
            Severity::Error => warn!("{}", message),
            _ => info!("{}", message),
        }

        // Redraw only when the path actually moved on.
        if session.path().version() != rendered_version {
            render(session.path().points(), surface, &mut sink);
            rendered_version = session.path().version();
        }
    }

    if feed.parse_errors() > 0 {
        warn!("{} sentences could not be parsed", feed.parse_errors());
    }
    info!(
        "total distance: {:.2} m over {} points",
        session.total_distance(),
        session.path().len()
    );

    let svg = sink.to_svg_string();
    match &args.output {
        Some(path) => {
            fs::write(path, svg)?;
            info!("drawing written to {:?}", path);
        }
        None => io::stdout().write_all(svg.as_bytes())?,
    }

    Ok(())
}

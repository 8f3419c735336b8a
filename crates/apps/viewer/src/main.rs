mod app;
mod clock;

use std::env;
use std::time::Duration;

use clap::Parser;
use layers::layer::Layer;
use render::command::DrawCommand;
use render::surface::Surface;
use render::tessellate::tessellate_polygon;
use scene::observer::ObservationWindow;
use scene::track::TrackedObject;
use streaming::client::{HttpPositionSource, fetch_boundary};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::{MapView, SelectionOutcome};
use crate::clock::SystemClock;

/// Animated satellite ground tracks over a world base map.
#[derive(Debug, Parser)]
#[command(name = "viewer")]
struct Args {
    /// Observer latitude (degrees).
    #[arg(long, default_value_t = 52.3)]
    latitude: f64,

    /// Observer longitude (degrees).
    #[arg(long, default_value_t = 4.9)]
    longitude: f64,

    /// Observer elevation above sea level (meters).
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,

    /// Observation window duration (minutes).
    #[arg(long, default_value_t = 90)]
    duration: u32,

    /// Tracked object, as ID or ID:NAME. Repeatable.
    #[arg(long = "object", value_parser = parse_object, required = true)]
    objects: Vec<TrackedObject>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 960.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
}

fn parse_object(raw: &str) -> Result<TrackedObject, String> {
    let (id_part, name) = match raw.split_once(':') {
        Some((id, name)) => (id, name.to_string()),
        None => (raw, raw.to_string()),
    };
    let id: u32 = id_part
        .trim()
        .parse()
        .map_err(|_| format!("invalid object id {id_part:?}; expected ID or ID:NAME"))?;
    Ok(TrackedObject::new(id, name))
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

fn base_triangle_count(surface: &Surface) -> usize {
    surface
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::FillPolygon { rings, .. } => tessellate_polygon(rings).len() / 3,
            _ => 0,
        })
        .sum()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let boundary_url = env::var("BOUNDARY_URL")
        .unwrap_or_else(|_| "https://unpkg.com/world-atlas@1.1.4/world/110m.json".to_string());
    let position_url = env::var("POSITION_API_URL")
        .unwrap_or_else(|_| "https://api.n2yo.com/rest/v1/satellite".to_string());
    let api_key = match env::var("POSITION_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            error!("POSITION_API_KEY is not set");
            return;
        }
    };

    let boundary = match fetch_boundary(&boundary_url, "countries", FETCH_TIMEOUT).await {
        Ok(boundary) => boundary,
        Err(e) => {
            // The base map never renders without boundary data; leave the
            // UI inert.
            error!(error = %e, "failed to load boundary data");
            return;
        }
    };
    info!(regions = boundary.regions.len(), "boundary geometry loaded");

    let mut view = MapView::new(SystemClock, args.width, args.height, boundary);
    info!(
        layer = view.basemap().name(),
        commands = view.canvas().base().commands().len(),
        triangles = base_triangle_count(view.canvas().base()),
        "base map rendered"
    );

    let source = match HttpPositionSource::new(position_url, api_key, FETCH_TIMEOUT) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "failed to set up position client");
            return;
        }
    };

    let window = ObservationWindow::new(args.latitude, args.longitude, args.elevation, args.duration);
    match view
        .on_selection_changed(&source, &args.objects, window)
        .await
    {
        SelectionOutcome::Started => {
            view.run_animation().await;
            info!("ground track animation complete");
        }
        SelectionOutcome::Rejected => {
            // Cannot happen with a single selection, but surface it anyway.
            warn!(notice = view.notice().unwrap_or(""), "selection rejected");
        }
        SelectionOutcome::FetchFailed => {}
    }
}

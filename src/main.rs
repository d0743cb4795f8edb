use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sketchgrid::Point;
use tracing::*;
use tracing_subscriber::EnvFilter;

mod sketches;

use sketches::{
    DiceProbability, DragGrid, GameOfLife, MouseEvents, RandomColors, Script, Sketch,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SketchKind {
    RandomColors,
    GameOfLife,
    DiceProbability,
    MouseEvents,
    DragGrid,
}

/// Render a grid sketch to an image, replaying scripted pointer input first.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Sketch to run
    #[arg(value_enum)]
    sketch: SketchKind,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 420)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 420)]
    height: u32,

    /// Frames to draw before saving
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Output image path
    #[arg(short, long, default_value = "sketch.png")]
    output: PathBuf,

    /// Pointer positions to move through, as X,Y
    #[arg(long = "hover", value_parser = parse_point)]
    hovers: Vec<Point>,

    /// Pointer positions to click, as X,Y
    #[arg(long = "click", value_parser = parse_point)]
    clicks: Vec<Point>,

    /// Where a drag starts, as X,Y
    #[arg(long, value_parser = parse_point, requires = "drag_to")]
    drag_from: Option<Point>,

    /// Where a drag ends, as X,Y
    #[arg(long, value_parser = parse_point, requires = "drag_from")]
    drag_to: Option<Point>,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let coordinate = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn build_sketch(kind: SketchKind, width: u32, height: u32) -> Result<Box<dyn Sketch>> {
    let sketch: Box<dyn Sketch> = match kind {
        SketchKind::RandomColors => Box::new(RandomColors::new(width, height)?),
        SketchKind::GameOfLife => Box::new(GameOfLife::new(width, height)?),
        SketchKind::DiceProbability => Box::new(DiceProbability::new(width, height)?),
        SketchKind::MouseEvents => Box::new(MouseEvents::new(width, height)?),
        SketchKind::DragGrid => Box::new(DragGrid::new(width, height)?),
    };
    Ok(sketch)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    debug!("Running with {:?}", args);

    let mut sketch = build_sketch(args.sketch, args.width, args.height)
        .with_context(|| format!("Failed to set up sketch {:?}", args.sketch))?;

    let script = Script {
        hovers: args.hovers.clone(),
        clicks: args.clicks.clone(),
        drag: args.drag_from.zip(args.drag_to),
    };
    sketches::run(sketch.as_mut(), &script, args.frames);

    sketch
        .canvas()
        .borrow()
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    info!(
        "Saved {:?} after {} frame(s) to {}",
        args.sketch,
        args.frames,
        args.output.display()
    );

    Ok(())
}

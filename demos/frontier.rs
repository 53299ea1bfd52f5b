//! Triangulates random points and writes every snapshot as an SVG frame.
//!
//! Run with: RUST_LOG=debug cargo run --example frontier -- [count] [seed]
//!
//! Frames land in `frames/`, one file per accepted triangle, showing the
//! triangles so far in grey and the bubble that closed the newest one.

use bubblemesh::{empty_circle_violations, Frontier, FrontierConfig, FrontierState, Point, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

const SIZE: f64 = 400.0;

fn render(snapshot: &Snapshot<f64>, points: &[Point<f64>]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SIZE} {SIZE}" width="{SIZE}" height="{SIZE}">"#
    );
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);

    for (i, t) in snapshot.triangles.iter().enumerate() {
        let fill = if i + 1 == snapshot.triangles.len() {
            "#f4a261"
        } else {
            "#dddddd"
        };
        svg.push_str(&format!(
            r#"<polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{}" stroke="black" stroke-width="0.5"/>"#,
            t.p1.x, t.p1.y, t.p2.x, t.p2.y, t.p3.x, t.p3.y, fill
        ));
    }

    let circle = snapshot.bubble.circle();
    svg.push_str(&format!(
        r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="#2a9d8f" stroke-width="1"/>"##,
        circle.center.x, circle.center.y, circle.radius
    ));

    let baseline = snapshot.bubble.initial_segment();
    svg.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="red" stroke-width="1.5"/>"#,
        baseline.p1.x, baseline.p1.y, baseline.p2.x, baseline.p2.y
    ));

    for p in points {
        svg.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="2" fill="black"/>"#,
            p.x, p.y
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(40);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(7);

    let mut rng = StdRng::seed_from_u64(seed);
    let margin = 20.0;
    let points: Vec<Point<f64>> = (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(margin..SIZE - margin),
                rng.random_range(margin..SIZE - margin),
            )
        })
        .collect();

    let out = Path::new("frames");
    fs::create_dir_all(out)?;

    let config = FrontierConfig::default().with_bucket_size(50.0);
    let mut frontier = Frontier::new(points.clone(), config)?;
    let mut frame = 0;
    for snapshot in &mut frontier {
        let snapshot = snapshot?;
        fs::write(
            out.join(format!("frame_{frame:04}.svg")),
            render(&snapshot, &points),
        )?;
        frame += 1;
    }

    let triangles = frontier.triangles();
    println!(
        "{} triangles from {} points in {frame} frames",
        triangles.len(),
        points.len()
    );
    if frontier.state() == FrontierState::Stalled {
        println!(
            "stalled: {} points unreached, {} baselines gave up",
            frontier.grid().len(),
            frontier.stalled_baselines().len()
        );
    }
    println!(
        "empty-circle violations: {}",
        empty_circle_violations(triangles, &points)?
    );

    Ok(())
}

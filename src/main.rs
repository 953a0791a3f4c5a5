// main.rs
//
// Minimal example of each exponent model of superellipse, plus the worker.
// Writes one SVG per shape into ./svg and logs timings (set RUST_LOG=debug).

use std::fs;

use superellipse::worker::{PathWorker, dispatch_batch};
use superellipse::{Corners, PathRequest, SamplingOptions, ShapeParams};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Ensure the /svg folder exists
    let _ = fs::create_dir_all("svg");

    let options = SamplingOptions::new(360, 2);
    let shapes = [
        ("ellipse", ShapeParams::symmetric(200.0, 100.0, 2.0)),
        ("squircle", ShapeParams::symmetric(200.0, 200.0, 4.0)),
        ("astroid", ShapeParams::symmetric(200.0, 200.0, 0.6)),
        ("asymmetric", ShapeParams::asymmetric(240.0, 160.0, 8.0, 2.5)),
        ("per_corner", ShapeParams::per_corner(200.0, 200.0, Corners::new(2.0, 4.0, 6.0, 8.0))),
    ];

    // 1) trace each shape directly and write it out
    for (name, shape) in &shapes {
        match shape.trace(options.steps) {
            Ok(boundary) => {
                println!("{name}: {} points, area {:.1}", boundary.len(), boundary.area());
                #[cfg(feature = "svg-io")]
                let _ = fs::write(format!("svg/{name}.svg"), boundary.to_svg(options.precision, "#4f46e5"));
            },
            Err(e) => eprintln!("{name}: {e}"),
        }
    }

    // 2) the same requests through the batch dispatcher
    let requests: Vec<PathRequest> = shapes
        .iter()
        .map(|(_, shape)| PathRequest::from_shape(*shape, options))
        .collect();
    for ((name, _), response) in shapes.iter().zip(dispatch_batch(&requests)) {
        println!("{name}: success={} in {:.3} ms", response.success, response.calculation_time);
    }

    // 3) a background worker where only the newest answer is kept
    let worker = match PathWorker::spawn() {
        Ok(worker) => worker,
        Err(e) => {
            eprintln!("{e}");
            return;
        },
    };
    let pending: Vec<_> = [2.0, 3.0, 5.0]
        .into_iter()
        .filter_map(|n| {
            let request = PathRequest::from_shape(ShapeParams::symmetric(100.0, 100.0, n), options);
            worker.submit(request).ok()
        })
        .collect();
    for pending in pending {
        match futures::executor::block_on(pending) {
            Ok(done) if worker.is_current(done.id) => {
                println!("request {} is current: {} bytes of path", done.id, done.response.path.map_or(0, |p| p.len()));
            },
            Ok(done) => println!("request {} superseded, discarded", done.id),
            Err(e) => eprintln!("{e}"),
        }
    }
    worker.shutdown();

    // 4) a failing request comes back as data
    let response = superellipse::handle_message(r#"{"type":"symmetric","width":100,"height":100}"#);
    println!("{}", response.to_json());
}

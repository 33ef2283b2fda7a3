//! Console host: drives the sync engine from typed commands on stdin.
//!
//! ```text
//! width <n>          edit the width field
//! height <n>         edit the height field
//! resize <w> <h>     live resize gesture to w x h
//! release            release the resize handle
//! drag <dx> <dy>     drag the shape
//! show               print fields and shape
//! download           save rectangle-dimensions.json
//! quit
//! ```


use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use rectangle_sync::config::SyncConfig;
use rectangle_sync::engine::{EngineHandle, SyncEngine};
use rectangle_sync::export;
use rectangle_sync::field::FieldState;
use rectangle_sync::model::Axis;
use rectangle_sync::store::HttpStore;
use rectangle_sync::surface::{HeadlessSurface, PointerGesture};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Input {
    Field(Axis, f64),
    Pointer(PointerGesture),
    Show,
    Download,
    Quit,
}

/// Parse one console line. Blank lines yield `Ok(None)`.
///
/// Field values are taken the way a numeric input reports them: text that is
/// not a number arrives as NaN and is left for the engine to clamp.
fn parse_input(line: &str) -> Result<Option<Input>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let input = match (command, args.as_slice()) {
        ("width", [v]) => Input::Field(Axis::Width, v.parse().unwrap_or(f64::NAN)),
        ("height", [v]) => Input::Field(Axis::Height, v.parse().unwrap_or(f64::NAN)),
        ("resize", [w, h]) => {
            Input::Pointer(PointerGesture::ResizeMove { width: number(w)?, height: number(h)? })
        }
        ("release", []) => Input::Pointer(PointerGesture::ResizeEnd),
        ("drag", [dx, dy]) => Input::Pointer(PointerGesture::DragMove { dx: number(dx)?, dy: number(dy)? }),
        ("show", []) => Input::Show,
        ("download", []) => Input::Download,
        ("quit" | "exit", []) => Input::Quit,
        _ => return Err(format!("unrecognized command: {}", line.trim())),
    };
    Ok(Some(input))
}

fn number(raw: &str) -> Result<f64, String> {
    raw.parse().map_err(|_| format!("not a number: {raw}"))
}

fn show(fields: &FieldState, handle: &EngineHandle) {
    let value = |axis| fields.value(axis).map_or_else(|| "-".to_string(), |v| v.to_string());
    println!("status: {:?}", handle.status());
    println!("fields: width={} height={}", value(Axis::Width), value(Axis::Height));
    match handle.shape() {
        Some(s) => println!(
            "shape:  {}x{} at ({}, {}) offset ({}, {})",
            s.width, s.height, s.x, s.y, s.offset_x, s.offset_y
        ),
        None => println!("shape:  -"),
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = SyncConfig::from_env()?;
    let store = Arc::new(HttpStore::new(&config.api_base_url, config.timeouts)?);

    let (fields, changes) = FieldState::new();
    let (engine, handle) =
        SyncEngine::new(Arc::clone(&store), HeadlessSurface::new(), fields.clone(), changes, &config);
    let engine_task = tokio::spawn(engine.run());

    tracing::info!(base_url = %config.api_base_url, "rectangle-sync started");
    handle.wait_until_settled().await;
    show(&fields, &handle);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Ok(None) => {}
            Ok(Some(Input::Quit)) => break,
            Ok(Some(Input::Field(axis, value))) => fields.set_from_user(axis, value),
            Ok(Some(Input::Pointer(gesture))) => {
                if !handle.pointer(gesture) {
                    break;
                }
            }
            Ok(Some(Input::Show)) => show(&fields, &handle),
            Ok(Some(Input::Download)) => match export::download_dimensions(store.as_ref(), &config.download_dir).await {
                Ok(path) => println!("saved {}", path.display()),
                Err(e) => eprintln!("download failed: {e}"),
            },
            Err(msg) => eprintln!("{msg}"),
        }
    }

    handle.teardown();
    engine_task.await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rectangle-sync failed");
            ExitCode::FAILURE
        }
    }
}

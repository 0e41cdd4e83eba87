//! Visualization and analysis commands (completed minimal layer)
//! - Static server for SPA assets
//! - JSON endpoints:
//!   - GET /api/health
//!   - GET /api/list (list recording files in the data directory)
//!   - GET /api/trajectories[?file=name][&symbol=N] (serve grid cells as JSON)
//! - Frontend draws pen strokes on a Canvas, styled per segment from the
//!   starting point: yellow while the pen touches the tablet, dark while
//!   it hovers, line width scaled by pressure
//! - Export renders the same grid cells as a standalone SVG

use clap::{Args, Subcommand, ValueEnum};
use std::fmt::Write as _;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, warn};

use digilets_format::{scan_blob, RawTrajectory};
use digilets_pipeline::dataset::discover_corpus_with;
use digilets_pipeline::{GridLayout, InstanceGrid};

use crate::error::{CliError, CliResult};
use crate::workspace::Workspace;

/// Visualization and analysis tools
#[derive(Args, Debug)]
pub struct VizCommand {
    #[command(subcommand)]
    pub sub: VizSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum VizSubcommand {
    /// Serve static viz and JSON endpoints
    Serve(VizServe),
    /// Render recording grids to SVG or JSON
    Export(VizExport),
}

/// Start visualization server
#[derive(Args, Debug)]
pub struct VizServe {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(long, default_value = "7878")]
    pub port: u16,
    /// Directory containing recording files (defaults to the workspace data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VizExport {
    /// Recording file (defaults to the first file of the workspace corpus)
    pub file: Option<PathBuf>,
    /// Output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: VizFormat,
    /// Render a single symbol row instead of the whole grid
    #[arg(long)]
    pub symbol: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VizFormat {
    Svg,
    Json,
}

struct ServerState {
    static_root: PathBuf,
    data_dir: PathBuf,
    corpus_suffix: String,
    info_suffix: String,
    layout: GridLayout,
}

impl VizCommand {
    pub async fn execute(self, workspace: PathBuf, _config: Option<PathBuf>) -> CliResult<()> {
        match self.sub {
            VizSubcommand::Serve(cmd) => cmd.execute(workspace).await,
            VizSubcommand::Export(cmd) => cmd.execute(workspace).await,
        }
    }
}

impl VizServe {
    pub async fn execute(self, workspace: PathBuf) -> CliResult<()> {
        // Ensure static assets exist
        let static_root = ensure_static_assets()?;

        let ws = Workspace::find_workspace_root(&workspace)
            .map(Workspace::new)
            .transpose()?;

        let data_dir = match (self.data_dir, &ws) {
            (Some(dir), _) => dir,
            (None, Some(ws)) => ws.data_dir(),
            (None, None) => {
                return Err(CliError::missing_resource(
                    "No --data-dir given and no workspace found",
                ))
            }
        };

        let (corpus_suffix, info_suffix, layout) = match &ws {
            Some(ws) => (
                ws.config.corpus.corpus_suffix.clone(),
                ws.config.corpus.info_suffix.clone(),
                ws.config.grid.to_layout()?,
            ),
            None => (
                digilets_pipeline::CORPUS_SUFFIX.to_string(),
                digilets_pipeline::INFO_SUFFIX.to_string(),
                GridLayout::default(),
            ),
        };

        let addr = format!("{}:{}", self.host, self.port);
        info!("Starting viz server at http://{}", addr);
        info!("Serving recordings from {}", data_dir.display());

        let state = Arc::new(ServerState {
            static_root,
            data_dir,
            corpus_suffix,
            info_suffix,
            layout,
        });

        let listener = TcpListener::bind(&addr)
            .map_err(|e| CliError::Generic(anyhow::anyhow!("bind {} failed: {}", addr, e)))?;

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let st = state.clone();
                    thread::spawn(move || {
                        if let Err(e) = handle_client(stream, st) {
                            error!("client error: {}", e);
                        }
                    });
                }
                Err(e) => error!("accept error: {}", e),
            }
        }
        Ok(())
    }
}

impl VizExport {
    pub async fn execute(self, workspace: PathBuf) -> CliResult<()> {
        let ws = Workspace::find_workspace_root(&workspace)
            .map(Workspace::new)
            .transpose()?;

        let file = match self.file {
            Some(file) => file,
            None => first_corpus_file(ws.as_ref())?,
        };
        if !file.is_file() {
            return Err(CliError::missing_resource(format!(
                "No recording file at {}",
                file.display()
            )));
        }

        let layout = match &ws {
            Some(ws) => ws.config.grid.to_layout()?,
            None => GridLayout::default(),
        };
        if let Some(symbol) = self.symbol {
            if symbol >= layout.num_symbols {
                return Err(CliError::invalid_args(format!(
                    "Symbol {} out of range (layout has {} symbols)",
                    symbol, layout.num_symbols
                )));
            }
        }

        let text = std::fs::read_to_string(&file)?;
        let scan = scan_blob(&text);
        let grid = InstanceGrid::from_trajectories(&scan.trajectories, layout)?;

        let output = match self.output {
            Some(output) => output,
            None => {
                let name = match (self.format, self.symbol) {
                    (VizFormat::Svg, Some(symbol)) => format!("viz_symbol{}.svg", symbol),
                    (VizFormat::Svg, None) => "viz_grid.svg".to_string(),
                    (VizFormat::Json, Some(symbol)) => format!("viz_symbol{}.json", symbol),
                    (VizFormat::Json, None) => "viz_grid.json".to_string(),
                };
                match &ws {
                    Some(ws) => ws.exports_dir().join(name),
                    None => PathBuf::from(name),
                }
            }
        };
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match self.format {
            VizFormat::Svg => {
                let svg = render_svg(&grid, self.symbol);
                std::fs::write(&output, svg)?;
            }
            VizFormat::Json => {
                let cells = trajectory_cells_json(&grid, self.symbol);
                let body = serde_json::json!({
                    "file": file.display().to_string(),
                    "occupied": grid.occupied(),
                    "cells": cells,
                });
                let text = serde_json::to_string_pretty(&body)
                    .map_err(|e| CliError::Generic(anyhow::anyhow!(e)))?;
                std::fs::write(&output, text)?;
            }
        }

        info!(
            "Rendered {} occupied cells from {} to {}",
            grid.occupied(),
            file.display(),
            output.display()
        );
        Ok(())
    }
}

fn first_corpus_file(ws: Option<&Workspace>) -> CliResult<PathBuf> {
    let ws = ws.ok_or_else(|| {
        CliError::missing_resource("No recording file given and no workspace found")
    })?;
    let corpus = &ws.config.corpus;
    let files = discover_corpus_with(
        ws.data_dir(),
        &corpus.corpus_suffix,
        &corpus.info_suffix,
    )?;
    files.into_iter().next().ok_or_else(|| {
        CliError::missing_resource(format!("No recording files in {}", ws.data_dir().display()))
    })
}

fn handle_client(mut stream: TcpStream, state: Arc<ServerState>) -> CliResult<()> {
    let mut buf = [0u8; 8192];
    let n = stream.read(&mut buf)?;
    if n == 0 {
        return Ok(());
    }
    let req = String::from_utf8_lossy(&buf[..n]);
    let mut lines = req.lines();
    let request_line = lines.next().unwrap_or("");
    let (method, full_path) = parse_request_line(request_line);
    let (path, query) = split_path_query(&full_path);

    match (method, path.as_str()) {
        ("GET", "/api/health") => {
            let json = serde_json::json!({
                "ok": true,
                "has_data": state.data_dir.exists()
            });
            respond_json(&mut stream, &serde_json::to_string(&json).unwrap())?;
        }
        ("GET", "/api/list") => {
            let mut entries: Vec<String> = Vec::new();
            if let Ok(files) = discover_corpus_with(
                &state.data_dir,
                &state.corpus_suffix,
                &state.info_suffix,
            ) {
                for path in files {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        entries.push(name.to_string());
                    }
                }
            }
            let json = serde_json::json!({ "files": entries });
            respond_json(&mut stream, &serde_json::to_string(&json).unwrap())?;
        }
        ("GET", "/api/trajectories") => {
            // optional query ?file=name&symbol=N
            let mut body = serde_json::json!({ "cells": [], "occupied": 0 });
            if let Some(path_to_serve) = resolve_recording_path(&state, query.as_deref()) {
                match std::fs::read_to_string(&path_to_serve) {
                    Ok(text) => {
                        let scan = scan_blob(&text);
                        match InstanceGrid::from_trajectories(&scan.trajectories, state.layout) {
                            Ok(grid) => {
                                let symbol = query
                                    .as_deref()
                                    .and_then(|q| query_param(q, "symbol"))
                                    .and_then(|s| s.parse::<usize>().ok());
                                let cells = trajectory_cells_json(&grid, symbol);
                                body = serde_json::json!({
                                    "file": path_to_serve
                                        .file_name()
                                        .and_then(|n| n.to_str())
                                        .unwrap_or_default(),
                                    "occupied": grid.occupied(),
                                    "cells": cells,
                                });
                            }
                            Err(e) => {
                                warn!("failed to build grid: {}", e);
                            }
                        }
                    }
                    Err(e) => {
                        warn!("failed to read {}: {}", path_to_serve.display(), e);
                    }
                }
            }
            respond_json(&mut stream, &serde_json::to_string(&body).unwrap())?;
        }
        ("GET", "/") => {
            let index = state.static_root.join("index.html");
            serve_path(&mut stream, &index)?;
        }
        ("GET", p) => {
            // sanitize path to prevent traversal
            let rel = p.trim_start_matches('/');
            let safe = Path::new(rel);
            if safe
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
            {
                respond_404(&mut stream)?;
            } else {
                let candidate = state.static_root.join(safe);
                if candidate.exists() {
                    serve_path(&mut stream, &candidate)?;
                } else {
                    respond_404(&mut stream)?;
                }
            }
        }
        _ => respond_404(&mut stream)?,
    }
    Ok(())
}

/// Grid cells as JSON rows of `[x, y, pressure, pen_down]` points
fn trajectory_cells_json(grid: &InstanceGrid, symbol: Option<usize>) -> Vec<serde_json::Value> {
    let symbols: Vec<usize> = match symbol {
        Some(symbol) => vec![symbol],
        None => (0..grid.layout().num_symbols).collect(),
    };

    let mut cells = Vec::new();
    for symbol in symbols {
        for (instance, trajectory) in grid.symbol_instances(symbol) {
            let points: Vec<[f32; 4]> = trajectory
                .points()
                .map(|p| [p.x, p.y, p.pressure, p.pen_down])
                .collect();
            cells.push(serde_json::json!({
                "symbol": symbol,
                "instance": instance,
                "points": points,
            }));
        }
    }
    cells
}

fn parse_request_line(line: &str) -> (&str, String) {
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("GET");
    let path = parts.next().unwrap_or("/");
    (method, path.to_string())
}

fn split_path_query(p: &str) -> (String, Option<String>) {
    if let Some(i) = p.find('?') {
        (p[..i].to_string(), Some(p[i + 1..].to_string()))
    } else {
        (p.to_string(), None)
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    for pair in query.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next().unwrap_or("");
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(percent_decode(v));
        }
    }
    None
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                if let (Some(a), Some(b)) = (from_hex(bytes[i + 1]), from_hex(bytes[i + 2])) {
                    out.push((a << 4) | b);
                    i += 3;
                    continue;
                } else {
                    // invalid escape; copy literal '%'
                    out.push(bytes[i]);
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).to_string()
}

fn from_hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + b - b'a'),
        b'A'..=b'F' => Some(10 + b - b'A'),
        _ => None,
    }
}

fn serve_path(stream: &mut TcpStream, path: &Path) -> CliResult<()> {
    let content = std::fs::read(path)?;
    let mime = mime_for_path(path);
    write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nCache-Control: no-cache\r\nConnection: close\r\n\r\n",
        mime,
        content.len()
    )?;
    stream.write_all(&content)?;
    Ok(())
}

fn respond_json(stream: &mut TcpStream, body: &str) -> CliResult<()> {
    write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nCache-Control: no-cache\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )?;
    Ok(())
}

fn respond_404(stream: &mut TcpStream) -> CliResult<()> {
    let body = b"Not Found";
    write!(
        stream,
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )?;
    stream.write_all(body)?;
    Ok(())
}

fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

fn resolve_recording_path(state: &ServerState, query: Option<&str>) -> Option<PathBuf> {
    if let Some(q) = query {
        if let Some(file_rel) = query_param(q, "file") {
            let rel = Path::new(&file_rel);
            // Disallow traversal
            if rel
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
            {
                return None;
            }
            let candidate = state.data_dir.join(rel);
            if candidate.exists() {
                return Some(candidate);
            }
            return None;
        }
    }
    // Fall back to the first recording in discovery order
    discover_corpus_with(&state.data_dir, &state.corpus_suffix, &state.info_suffix)
        .ok()
        .and_then(|files| files.into_iter().next())
}

const CELL_SIZE: f32 = 120.0;
const CELL_PAD: f32 = 10.0;

/// Render grid cells as a standalone SVG
///
/// Each stroke segment is styled from its starting point: yellow when the
/// pen touches the tablet, dark while it hovers, width from pressure.
fn render_svg(grid: &InstanceGrid, symbol: Option<usize>) -> String {
    let symbols: Vec<usize> = match symbol {
        Some(symbol) => vec![symbol],
        None => (0..grid.layout().num_symbols).collect(),
    };

    let width = grid.layout().instances_per_symbol as f32 * CELL_SIZE;
    let height = symbols.len() as f32 * CELL_SIZE;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        width, height
    );
    let _ = writeln!(
        svg,
        r##"<rect width="{}" height="{}" fill="#ffffff"/>"##,
        width, height
    );

    for (row, &symbol) in symbols.iter().enumerate() {
        for (instance, trajectory) in grid.symbol_instances(symbol) {
            let ox = instance as f32 * CELL_SIZE;
            let oy = row as f32 * CELL_SIZE;
            let _ = writeln!(
                svg,
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#e9ecef"/>"##,
                ox, oy, CELL_SIZE, CELL_SIZE
            );
            render_cell(&mut svg, trajectory, ox, oy);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Draw one trajectory scaled into its grid cell
fn render_cell(svg: &mut String, trajectory: &RawTrajectory, ox: f32, oy: f32) {
    if trajectory.len() < 2 {
        return;
    }

    let x = trajectory.x();
    let y = trajectory.y();
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for (&px, &py) in x.iter().zip(y.iter()) {
        min_x = min_x.min(px);
        max_x = max_x.max(px);
        min_y = min_y.min(py);
        max_y = max_y.max(py);
    }

    let inner = CELL_SIZE - 2.0 * CELL_PAD;
    let extent = (max_x - min_x).max(max_y - min_y).max(1e-6);
    let scale = inner / extent;
    let shift_x = ox + CELL_PAD + (inner - (max_x - min_x) * scale) / 2.0;
    let shift_y = oy + CELL_PAD + (inner - (max_y - min_y) * scale) / 2.0;

    // Tablet y grows upward, SVG y grows downward
    let to_svg = |px: f32, py: f32| {
        (
            shift_x + (px - min_x) * scale,
            shift_y + (max_y - py) * scale,
        )
    };

    for i in 0..trajectory.len() - 1 {
        let (Some(p0), Some(p1)) = (trajectory.point(i), trajectory.point(i + 1)) else {
            break;
        };
        let (x1, y1) = to_svg(p0.x, p0.y);
        let (x2, y2) = to_svg(p1.x, p1.y);
        let color = if p0.pen_down >= 0.5 { "#ffd43b" } else { "#212529" };
        let stroke_width = p0.pressure * 10.0 + 0.5;
        let _ = writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-opacity="0.6" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, stroke_width
        );
    }
}

fn ensure_static_assets() -> CliResult<PathBuf> {
    let dir = Path::new("crates/digilets-cli/static/viz");
    std::fs::create_dir_all(dir)?;
    let index = dir.join("index.html");
    let css = dir.join("style.css");
    let js = dir.join("app.js");

    if !index.exists() {
        std::fs::write(&index, DEFAULT_INDEX)?;
    }
    if !css.exists() {
        std::fs::write(&css, DEFAULT_CSS)?;
    }
    if !js.exists() {
        std::fs::write(&js, DEFAULT_JS)?;
    }
    Ok(dir.to_path_buf())
}

const DEFAULT_INDEX: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>DigiLeTs Viz</title>
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link rel="stylesheet" href="/style.css">
  </head>
  <body>
    <header><h1>DigiLeTs Trajectories</h1></header>
    <main>
      <section class="controls">
        <button id="refresh">Refresh</button>
        <label>File:
          <select id="fileSelect"></select>
        </label>
        <label>Symbol:
          <input id="symbolInput" type="number" min="0" placeholder="all">
        </label>
        <span class="status">Status: <span id="status">checking...</span></span>
      </section>
      <canvas id="viz" width="1000" height="600"></canvas>
    </main>
    <script src="/app.js"></script>
  </body>
</html>
"#;

const DEFAULT_CSS: &str = r#"
:root { color-scheme: light; }
body { font-family: system-ui, -apple-system, sans-serif; margin: 0; padding: 0; }
header { background: #5f3dc4; color: white; padding: 0.75rem 1rem; }
main { padding: 1rem; }
.controls { display: flex; gap: 1rem; align-items: center; margin-bottom: 0.5rem; }
.status { margin-left: auto; }
canvas { border: 1px solid #ccc; background: #fff; width: 100%; height: auto; max-height: 70vh; }
label select, label input { margin-left: 0.5rem; width: 6rem; }
button { padding: 0.25rem 0.75rem; }
"#;

const DEFAULT_JS: &str = r#"
const statusEl = document.getElementById('status');
const fileSelect = document.getElementById('fileSelect');
const symbolInput = document.getElementById('symbolInput');
const canvas = document.getElementById('viz');
const ctx = canvas.getContext('2d');
const refreshBtn = document.getElementById('refresh');

function setStatus(s) { statusEl.textContent = s; }

async function getJSON(url) {
  const res = await fetch(url, { cache: 'no-store' });
  if (!res.ok) throw new Error(`HTTP ${res.status}`);
  return res.json();
}

async function refreshHealth() {
  try {
    const health = await getJSON('/api/health');
    setStatus(health.ok ? 'OK' : 'Error');
  } catch (e) {
    setStatus('Unavailable');
  }
}

async function listFiles() {
  try {
    const data = await getJSON('/api/list');
    fileSelect.innerHTML = '';
    for (const f of data.files || []) {
      const opt = document.createElement('option');
      opt.value = f;
      opt.textContent = f;
      fileSelect.appendChild(opt);
    }
  } catch {
    // ignore
  }
}

function clearCanvas() {
  ctx.fillStyle = '#fff';
  ctx.fillRect(0, 0, canvas.width, canvas.height);
}

// One stroke segment, styled from its starting point: yellow while the pen
// is on the tablet, dark while it hovers, width scaled by pressure.
function drawCell(cell, rect) {
  const points = cell.points || [];
  if (points.length < 2) return;

  let minX = Infinity, maxX = -Infinity, minY = Infinity, maxY = -Infinity;
  for (const p of points) {
    if (p[0] < minX) minX = p[0];
    if (p[0] > maxX) maxX = p[0];
    if (p[1] < minY) minY = p[1];
    if (p[1] > maxY) maxY = p[1];
  }
  const pad = 8;
  const extent = Math.max(maxX - minX, maxY - minY, 1e-6);
  const scale = (Math.min(rect.w, rect.h) - 2 * pad) / extent;
  const shiftX = rect.x + pad + (rect.w - 2 * pad - (maxX - minX) * scale) / 2;
  const shiftY = rect.y + pad + (rect.h - 2 * pad - (maxY - minY) * scale) / 2;
  const toX = x => shiftX + (x - minX) * scale;
  const toY = y => shiftY + (maxY - y) * scale;

  ctx.globalAlpha = 0.6;
  ctx.lineCap = 'round';
  for (let i = 0; i + 1 < points.length; i++) {
    const p0 = points[i], p1 = points[i + 1];
    ctx.strokeStyle = p0[3] >= 0.5 ? '#ffd43b' : '#212529';
    ctx.lineWidth = p0[2] * 10 + 0.5;
    ctx.beginPath();
    ctx.moveTo(toX(p0[0]), toY(p0[1]));
    ctx.lineTo(toX(p1[0]), toY(p1[1]));
    ctx.stroke();
  }
  ctx.globalAlpha = 1.0;
}

function drawGrid(cells) {
  clearCanvas();
  if (!cells || cells.length === 0) {
    ctx.fillStyle = '#868e96';
    ctx.fillText('No trajectories', 20, 20);
    return;
  }

  const cols = Math.max(...cells.map(c => c.instance)) + 1;
  const symbols = [...new Set(cells.map(c => c.symbol))].sort((a, b) => a - b);
  const rowOf = new Map(symbols.map((s, i) => [s, i]));
  const cellW = canvas.width / cols;
  const cellH = canvas.height / symbols.length;

  ctx.strokeStyle = '#e9ecef';
  ctx.lineWidth = 1;
  for (const cell of cells) {
    const rect = {
      x: cell.instance * cellW,
      y: rowOf.get(cell.symbol) * cellH,
      w: cellW,
      h: cellH,
    };
    ctx.strokeRect(rect.x, rect.y, rect.w, rect.h);
    drawCell(cell, rect);
  }
}

async function loadAndDraw(selectedFile = null, symbol = null) {
  let url = '/api/trajectories';
  const params = [];
  if (selectedFile) params.push(`file=${encodeURIComponent(selectedFile)}`);
  if (symbol !== null && symbol !== '') params.push(`symbol=${encodeURIComponent(symbol)}`);
  if (params.length) url += `?${params.join('&')}`;
  try {
    const data = await getJSON(url);
    drawGrid(data.cells || []);
  } catch {
    clearCanvas();
    ctx.fillStyle = '#e03131';
    ctx.fillText('Failed to load trajectories', 20, 20);
  }
}

function currentSelection() {
  return [fileSelect.value || null, symbolInput.value || null];
}

refreshBtn.addEventListener('click', () => loadAndDraw(...currentSelection()));
fileSelect.addEventListener('change', () => loadAndDraw(...currentSelection()));
symbolInput.addEventListener('change', () => loadAndDraw(...currentSelection()));

async function boot() {
  await refreshHealth();
  await listFiles();
  await loadAndDraw(...currentSelection());
}

boot();
"#;

//! Renderline orchestrator CLI.
//!
//! Drives batch renders end to end: verify each scene, discover its render
//! directory, pick the next version tag, spawn the DCC with the handoff
//! environment set, then validate the handoff file and log the result.

mod discovery;
mod report;
mod runner;
mod scene;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use renderline_logging::{init_logging, LogConfig};
use renderline_protocol::JobContext;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "renderline", about = "Batch render orchestrator for DCC scenes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Mirror the full log to stderr
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render one or more scenes and log the results
    Render(RenderArgs),
    /// Inspect a handoff file and report its state
    Status {
        /// Handoff file to inspect
        handoff: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Scene files to render
    #[arg(required = true)]
    scenes: Vec<PathBuf>,

    /// Render root the act/shot output tree lives under
    #[arg(long, env = "RENDERLINE_ROOT")]
    root: PathBuf,

    /// DCC binary to invoke
    #[arg(long, env = "RENDERLINE_DCC_BIN")]
    dcc_bin: Option<PathBuf>,

    /// DCC version, used to locate a platform-default install
    #[arg(long)]
    dcc_version: Option<String>,

    /// Pre-render hook script passed to the DCC
    #[arg(long)]
    pre_script: Option<PathBuf>,

    /// Post-render hook script passed to the DCC
    #[arg(long)]
    post_script: Option<PathBuf>,

    /// Render log location (default: {root}/render_log.tsv)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(LogConfig {
        app_name: "renderline",
        verbose: cli.verbose,
    }) {
        eprintln!("Warning: logging unavailable: {err:#}");
    }

    let result = match cli.command {
        Command::Render(args) => return run_render(args),
        Command::Status { handoff, json } => run_status(&handoff, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_render(args: RenderArgs) -> ExitCode {
    let exec_start = report::timestamp_now();

    // One handoff file per batch, recreated by each pre-render hook.
    let handoff = match tempfile::Builder::new()
        .prefix("renderline_handoff_")
        .tempfile()
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error: cannot create handoff file: {err}");
            return ExitCode::FAILURE;
        }
    };

    let invocation = runner::RenderInvocation {
        binary: runner::resolve_binary(args.dcc_bin.clone(), args.dcc_version.as_deref()),
        pre_script: args.pre_script.clone(),
        post_script: args.post_script.clone(),
    };
    let tsv_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| args.root.join("render_log.tsv"));

    let mut rendered: Vec<String> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for scene_path in &args.scenes {
        let label = scene_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| scene_path.display().to_string());

        match render_one(
            scene_path,
            &args,
            &invocation,
            handoff.path(),
            &exec_start,
            &tsv_path,
        ) {
            Ok(count) => {
                info!(scene = %label, frames = count, "scene rendered");
                rendered.push(label);
            }
            Err(err) => {
                warn!(scene = %label, "scene failed: {err:#}");
                failed.push(format!("{label}: {err:#}"));
            }
        }
    }

    print_summary(&rendered, &failed);
    if rendered.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Verify, resolve, render, and log a single scene. Returns the frame count
/// reported through the handoff file.
fn render_one(
    scene_path: &PathBuf,
    args: &RenderArgs,
    invocation: &runner::RenderInvocation,
    handoff_path: &std::path::Path,
    exec_start: &str,
    tsv_path: &PathBuf,
) -> Result<u64> {
    scene::verify_scene(scene_path)?;

    let (act, shot) = scene::sequence(scene_path);
    let render_dir = discovery::find_render_dir(&args.root, &act, &shot)?;
    let version_tag = discovery::next_version_tag(&render_dir)?;
    let ctx = JobContext::new(render_dir, version_tag, handoff_path);

    let render_start = report::timestamp_now();
    invocation.render_scene(scene_path, &ctx)?;
    let render_end = report::timestamp_now();

    let doc = report::read_handoff(&ctx.handoff_file)?;
    let count = report::validate(&doc)?;

    report::append_log(
        &doc,
        &report::RenderTiming {
            exec_start: exec_start.to_string(),
            render_start,
            render_end,
            job_id: uuid::Uuid::new_v4().to_string(),
        },
        tsv_path,
    )?;
    Ok(count)
}

fn run_status(handoff: &PathBuf, json: bool) -> Result<()> {
    let doc = report::read_handoff(handoff)
        .with_context(|| format!("Cannot inspect {}", handoff.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("State:       {:?}", doc.state());
    println!("Version:     {}", doc.metadata.version_name);
    println!(
        "Frame range: {}..{} ({} frames)",
        doc.metadata.start_frame, doc.metadata.end_frame, doc.metadata.frame_count
    );
    println!("Color space: {}", doc.metadata.color_space);
    match doc.rendered_frames {
        Some(count) => println!("Rendered:    {count}"),
        None => println!("Rendered:    (render not verified)"),
    }
    Ok(())
}

fn print_summary(rendered: &[String], failed: &[String]) {
    println!();
    if rendered.is_empty() {
        println!("Failed to render");
    } else {
        println!("Successfully rendered:");
        for item in rendered {
            println!("  {item}");
        }
    }
    if !failed.is_empty() {
        println!();
        println!("Failed to render:");
        for item in failed {
            println!("  {item}");
        }
    }
}

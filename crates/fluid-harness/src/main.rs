// fluid-harness: desktop driver for the fluid engine bridge
//
// Runs the same host the Android app talks to through JNI, so the backend
// selection and emitter lifecycle can be exercised without a device.

mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fluid_engine::backend::{Capabilities, select_backend};
use fluid_engine::logging::install_panic_hook;
use fluid_engine::{EngineConfig, EngineHost};

use session::SessionPlan;

#[derive(Parser)]
#[command(name = "fluid-harness", about = "Desktop driver for the fluid engine bridge")]
struct Cli {
    /// JSON engine config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a scripted init/touch/frame session
    Run {
        #[arg(long, default_value = "1080")]
        width: i32,

        #[arg(long, default_value = "1920")]
        height: i32,

        /// Prefer Vulkan; `--vulkan false` overrides a config that prefers it
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        vulkan: Option<bool>,

        #[arg(short, long, default_value = "120")]
        frames: u32,

        #[arg(short, long, default_value = "2")]
        touches_per_frame: u32,

        /// Frame time in seconds
        #[arg(long, default_value = "0.016")]
        dt: f32,

        #[arg(long)]
        ai_strength: Option<f32>,
    },
    /// Show which backend would be selected here
    Probe {
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        vulkan: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    install_panic_hook();

    let config = cli
        .config
        .as_deref()
        .map(EngineConfig::load_or_default)
        .unwrap_or_default();

    match cli.command {
        Commands::Run {
            width,
            height,
            vulkan,
            frames,
            touches_per_frame,
            dt,
            ai_strength,
        } => {
            let plan = SessionPlan {
                width,
                height,
                prefer_vulkan: vulkan.unwrap_or(config.prefer_vulkan),
                frames,
                touches_per_frame,
                dt,
                ai_strength,
            };
            tracing::info!("Running {} frames at {}x{}", frames, width, height);

            let host = EngineHost::for_platform(&config);
            let report = session::run(&host, &plan);

            match report.backend {
                Some(kind) => println!("Backend:      {}", kind),
                None => println!("Backend:      none"),
            }
            println!("Frames:       {}", report.stats.frames);
            println!("Touches:      {}", report.touches_sent);
            println!("Last fps:     {:.1}", report.stats.fps);
            println!("AI strength:  {}", report.ai_strength);
        }
        Commands::Probe { vulkan } => {
            let capabilities = Capabilities::detect();
            let prefer_vulkan = vulkan.unwrap_or(config.prefer_vulkan);
            println!(
                "Capabilities: vulkan={} opengl={}",
                capabilities.vulkan, capabilities.opengl
            );
            match select_backend(prefer_vulkan, &capabilities) {
                Some(kind) => println!("Selected:     {}", kind),
                None => println!("Selected:     none"),
            }
        }
    }

    Ok(())
}

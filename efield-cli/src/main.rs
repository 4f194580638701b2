use clap::{Parser, Subcommand};
use efield_core::{default_world, parse_scene, CameraState, SimulationContext, Viewport};
use glam::Vec2;

#[derive(Parser)]
#[command(name = "efield")]
#[command(about = "Electrostatic field visualizer core - headless driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the particle simulation for a number of ticks and print the result
    Run {
        /// Charge specs as q@x,y, e.g. "5@500,300 -5@400,200" (default scene if omitted)
        #[arg(long)]
        charges: Option<String>,
        /// Number of simulation ticks
        #[arg(long, default_value_t = 100)]
        ticks: usize,
    },
    /// Perform one field sampling pass and print the samples
    Sample {
        /// Charge specs as q@x,y (default scene if omitted)
        #[arg(long)]
        charges: Option<String>,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f32,
        /// Height of the UI strip excluded from sampling
        #[arg(long, default_value_t = 60.0)]
        ui_height: f32,
        /// Zoom scale (clamped to [0.2, 1.1])
        #[arg(long, default_value_t = 1.0)]
        zoom: f32,
        /// Camera pan offset, x component
        #[arg(long, default_value_t = 0.0)]
        pan_x: f32,
        /// Camera pan offset, y component
        #[arg(long, default_value_t = 0.0)]
        pan_y: f32,
        /// Emit every sample as CSV (x,y,vx,vy) instead of a summary
        #[arg(long)]
        csv: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { charges, ticks } => run(charges.as_deref(), ticks),
        Commands::Sample {
            charges,
            width,
            height,
            ui_height,
            zoom,
            pan_x,
            pan_y,
            csv,
        } => sample(
            charges.as_deref(),
            Viewport::new(width, height, ui_height),
            CameraState::new(Vec2::new(pan_x, pan_y), zoom),
            csv,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_context(charges: Option<&str>) -> Result<SimulationContext, Box<dyn std::error::Error>> {
    let world = match charges {
        Some(specs) => parse_scene(specs)?,
        None => default_world(),
    };
    Ok(SimulationContext::new(world))
}

fn run(charges: Option<&str>, ticks: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = build_context(charges)?;
    ctx.running = true;

    for _ in 0..ticks {
        ctx.tick();
    }

    println!("after {} ticks:", ticks);
    for (i, c) in ctx.world.charges.iter().enumerate() {
        println!(
            "charge[{}] q={} pos=({:.3}, {:.3}) vel=({:.4}, {:.4})",
            i, c.charge, c.pos.x, c.pos.y, c.vel.x, c.vel.y
        );
    }

    Ok(())
}

fn sample(
    charges: Option<&str>,
    viewport: Viewport,
    camera: CameraState,
    csv: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = build_context(charges)?;
    ctx.camera = camera;

    let samples = ctx.sample_field(viewport);

    if csv {
        println!("x,y,vx,vy");
        for s in samples {
            println!("{},{},{},{}", s.pos.x, s.pos.y, s.vec.x, s.vec.y);
        }
    } else {
        let spacing = efield_core::sampler::SCREEN_SPACING / camera.scale;
        let peak = samples
            .iter()
            .map(|s| s.vec.length())
            .fold(0.0f32, f32::max);
        println!(
            "{} samples, world spacing {:.2}, peak display magnitude {:.2}",
            samples.len(),
            spacing,
            peak
        );
    }

    Ok(())
}

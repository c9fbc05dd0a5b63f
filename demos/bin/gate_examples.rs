//! Single-Qubit Gate Examples
//!
//! Runs the Pauli, phase and Hadamard demonstrations in sequence.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;

use gatelab_demos::{BackendSelection, Driver, ExampleRunner, connect, print_info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DriverArg {
    /// Measure qubit 0 into a classical bit, local simulator only
    Standard,
    /// Sample every qubit; local simulator or an Amazon Braket device
    Braket,
}

#[derive(Parser, Debug)]
#[command(name = "gate-examples")]
#[command(version, about = "Demonstrate Pauli, phase and Hadamard gates")]
struct Args {
    /// Presentation profile
    #[arg(long, value_enum, default_value = "braket")]
    driver: DriverArg,

    /// Run on an Amazon Braket device instead of the local simulator
    #[arg(long)]
    remote: bool,

    /// Braket device ARN or short name (sv1, tn1, dm1, ionq, aria, forte, rigetti, iqm-garnet)
    #[arg(long, env = "GATELAB_DEVICE_ARN")]
    device_arn: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let selection = match args.driver {
        DriverArg::Standard => BackendSelection::standard(args.remote)?,
        DriverArg::Braket => BackendSelection {
            use_remote: args.remote,
            device_arn: args.device_arn,
        },
    };

    let driver = match args.driver {
        DriverArg::Standard => Driver::Standard,
        DriverArg::Braket => {
            let cloud = selection.is_remote();
            let target = if cloud { "AWS Cloud" } else { "Local Simulator" };
            print_info(&format!("Initializing Amazon Braket examples with {target}..."));
            Driver::Braket { cloud }
        }
    };

    let backend = connect(&selection).await?;
    ExampleRunner::new(backend, driver).run_all().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

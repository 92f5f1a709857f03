use clap::Parser;
use log::{info, warn};

use host_profiling::{ClusterConfig, HostProfiler};

fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to cluster config
    #[clap(short, long, default_value = "configs/cluster.yaml")]
    config: String,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClusterConfig::from_file(&args.config)?;
    info!("loaded {} hosts from {}", config.number_of_hosts(), args.config);

    let profiler = HostProfiler::from_inventory(&config)?;
    println!("{}", serde_json::to_string(profiler.cluster_profile())?);

    for (host, result) in profiler.profile_hosts() {
        match result {
            Ok(profile) => println!(
                "{}",
                serde_json::json!({ "host": host.display_name(), "profile": profile })
            ),
            Err(e) => warn!("skipping host {}: {}", host.display_name(), e),
        }
    }
    Ok(())
}

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

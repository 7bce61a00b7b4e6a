use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use model_runner::runner::ScriptConfig;

#[derive(Debug, Parser)]
#[command(name = "model_runner")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 5000)]
    port: u16,
    #[arg(long, default_value = "python3")]
    interpreter: String,
    #[arg(long, default_value = "src/lib/kickstart_tensorflow.py")]
    script: PathBuf,
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let ip: IpAddr = cli
        .host
        .parse()
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
    let addr = SocketAddr::new(ip, cli.port);
    let config = ScriptConfig {
        interpreter: cli.interpreter,
        script_path: cli.script,
    };
    if let Err(e) = model_runner::server::serve(addr, config).await {
        eprintln!("server error: {e}");
        std::process::exit(1);
    }
}

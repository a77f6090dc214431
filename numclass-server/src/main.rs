use clap::Parser;
use numclass_server::Credentials;
use tokio::net::TcpListener;
use tracing::info;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    address: String,

    #[arg(long, default_value_t = 28563)]
    port: u16,

    #[arg(long, default_value = "admin")]
    admin_login: String,

    #[arg(long, default_value = "password")]
    admin_password: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("start");

    let listener = TcpListener::bind(format!("{}:{}", args.address, args.port)).await?;

    let credentials = Credentials {
        login: args.admin_login,
        password: args.admin_password,
    };

    numclass_server::run(listener, credentials).await?;

    Ok(())
}

use clap::Parser;
use egressgen::{
    cli::{Args, generate},
    error::EgressError,
    net::HickoryResolver,
};

#[tokio::main]
async fn main() -> Result<(), EgressError> {
    env_logger::init();

    let args = Args::parse();
    let resolver = HickoryResolver::from_system_conf()?;

    generate::run(&args, &resolver).await
}

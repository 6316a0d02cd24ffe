use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

mod describe;
mod error;
mod grpc_service;

use crate::grpc_service::FileSystemsService;
use stow_core::AdaptorRegistry;

#[derive(Parser, Debug)]
#[command(name = "stowd")]
#[command(about = "grpc gateway to storage-backend adaptors", long_about = None)]
struct Args {
    /// gRPC listen address
    #[arg(long, default_value = "0.0.0.0:50051")]
    listen: SocketAddr,

    /// print the registered adaptor descriptions as JSON and exit
    #[arg(long)]
    list_adaptors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stowd=info".into()),
        )
        .init();

    let args = Args::parse();

    let registry = AdaptorRegistry::with_builtin_adaptors();

    if args.list_adaptors {
        println!("{}", serde_json::to_string_pretty(&registry.descriptions())?);
        return Ok(());
    }

    info!("starting stowd");
    info!("gRPC listen: {}", args.listen);
    for name in registry.names() {
        info!("  adaptor: {}", name);
    }

    let service = FileSystemsService::new(Arc::new(registry));

    // build gRPC service
    let grpc_service = stow::file_systems_server::FileSystemsServer::new(service);

    // wrap with gRPC-web + CORS support for browser clients
    let grpc_web_service = tonic_web::enable(grpc_service);

    info!("starting gRPC server on {}", args.listen);
    info!("gRPC-web enabled for browser clients");

    Server::builder()
        .accept_http1(true) // required for gRPC-web
        .add_service(grpc_web_service)
        .serve(args.listen)
        .await?;

    Ok(())
}

// generated proto module
pub mod stow {
    tonic::include_proto!("stow.v1");
}

use clap::Parser;
use dotenv::dotenv;
use crate::config::Config;

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod models;
pub mod page;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    controller::serve(&config).await
}

//! A minimal command-line client for an Ontodocker server.
//!
//! The server is configured through the environment variables
//! `ONTODOCKER_ADDRESS` (required), `ONTODOCKER_TOKEN`,
//! `ONTODOCKER_CA_BUNDLE` and `ONTODOCKER_INSECURE`.
//! Logging is controlled by `RUST_LOG`.
//!
//! Usage:
//! - `ontodocker endpoints`
//! - `ontodocker datasets`
//! - `ontodocker create <dataset>`
//! - `ontodocker delete <dataset>`
//! - `ontodocker download <dataset> [<file>]`
//! - `ontodocker upload <dataset> <file>`
//! - `ontodocker query <dataset> <query> <column>...`

use std::path::Path;

use ontodocker::{ClientConfig, OntodockerClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let client = OntodockerClient::new(&ClientConfig::from_env()?)?;

    match args[..] {
        ["endpoints"] => {
            for info in client.endpoints().list()? {
                println!("{info}");
            }
        }
        ["datasets"] => {
            for name in client.datasets().list()? {
                println!("{name}");
            }
        }
        ["create", name] => println!("{}", client.datasets().create(name)?),
        ["delete", name] => println!("{}", client.datasets().delete(name)?),
        ["download", name] => {
            let path = client.datasets().download_turtle_to(name, None)?;
            eprintln!("written to {}", path.display());
        }
        ["download", name, file] => {
            client
                .datasets()
                .download_turtle_to(name, Some(Path::new(file)))?;
        }
        ["upload", name, file] => println!("{}", client.datasets().upload_turtlefile(name, file)?),
        ["query", name, query, ref columns @ ..] if !columns.is_empty() => {
            print!("{}", client.sparql().query(name, query, columns)?);
        }
        _ => {
            eprintln!("Usage: ontodocker <endpoints|datasets|create|delete|download|upload|query> [ARGS...]");
            std::process::exit(-1);
        }
    }
    Ok(())
}

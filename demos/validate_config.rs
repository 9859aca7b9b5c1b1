//! Offline demo harness for the validator.
//!
//! Usage:
//!   validate_config <incoming.json> <local_cluster_id> <local_pchannel,local_pchannel,...> [current.json]
//!
//! Prints `OK (growth=<bool>)` on success, or the rejection reason on failure, and
//! exits non-zero in the failure case. Unlike the teacher crate's examples, this
//! harness never opens a network connection: the validator it drives is a pure
//! function of its JSON inputs.

use std::{env, fs, process::ExitCode};

use replicate_config_validator::{model::ReplicateConfiguration, validate_configuration};

fn load(path: &str) -> ReplicateConfiguration {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {path}: {e}"));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("parsing {path}: {e}"))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "usage: {} <incoming.json> <local_cluster_id> <local_pchannels_csv> [current.json]",
            args.first().map(String::as_str).unwrap_or("validate_config")
        );
        return ExitCode::FAILURE;
    }

    let incoming = load(&args[1]);
    let local_cluster_id = &args[2];
    let local_pchannels: Vec<String> = args[3].split(',').map(str::to_owned).collect();
    let current = args.get(4).map(|path| load(path));

    match validate_configuration(
        Some(&incoming),
        current.as_ref(),
        local_cluster_id,
        &local_pchannels,
    ) {
        Ok(outcome) => {
            println!("OK (growth={})", outcome.growth_detected);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("rejected: {err}");
            ExitCode::FAILURE
        }
    }
}

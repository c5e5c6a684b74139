//! Inspect calls and drive one through a few commands
//!
//! Reads credentials from `TELEPHONY_USER_ID`, `TELEPHONY_API_TOKEN` and
//! `TELEPHONY_API_SECRET`.
//!
//! Usage:
//!   cargo run -p telephony-api --example call_status
//!   cargo run -p telephony-api --example call_status -- <call-id> [hangup|dtmf=<digits>|say=<sentence>]

use std::env;

use telephony_api::logging::{init_logging, LoggingMode};
use telephony_api::{Call, Resource, TelephonyClient};

fn print_call(call: &Call) {
    println!(
        "{:<28} {:<4} {:<14} -> {:<14} {}",
        call.id().unwrap_or_default(),
        call.direction().unwrap_or_default(),
        call.from().unwrap_or_default(),
        call.to().unwrap_or_default(),
        call.state().unwrap_or_else(|| "?".to_string()),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let args: Vec<String> = env::args().collect();
    let client = TelephonyClient::from_env()?;

    let Some(call_id) = args.get(1) else {
        for call in client.calls()? {
            print_call(&call);
        }
        return Ok(());
    };

    let call = client.call(call_id)?;
    print_call(&call);

    match args.get(2).map(String::as_str) {
        Some("hangup") => call.hang_up()?,
        Some(command) if command.starts_with("dtmf=") => call.send_dtmf(&command[5..])?,
        Some(command) if command.starts_with("say=") => {
            call.audio()?.sentence(&command[4..]).create()?
        }
        Some(other) => {
            eprintln!("Unknown command '{}'", other);
            std::process::exit(1);
        }
        None => {
            for event in call.events()? {
                println!(
                    "  {:?} {}",
                    event.time()?,
                    event.name().unwrap_or_default()
                );
            }
            return Ok(());
        }
    }

    print_call(&call);
    Ok(())
}

//! Startup helpers for the demo binary: CLI argument parsing.

use std::env;
use std::time::Duration;

use crate::config;

/// Simulation parameters resolved from the command line.
#[derive(Debug, Clone)]
pub struct SimArgs {
    /// Number of cabins in the fleet.
    pub num_elevators: u8,
    /// Number of floors in the building.
    pub num_floors: u8,
    /// Number of random requests the demo fires.
    pub requests: u16,
    /// Wall-clock pacing per cabin move.
    pub pacing: Duration,
    /// Dump the final fleet status as JSON.
    pub json: bool,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            num_elevators: config::DEFAULT_NUM_ELEVATORS,
            num_floors: config::DEFAULT_NUM_FLOORS,
            requests: config::DEFAULT_DEMO_REQUESTS,
            pacing: config::MOVE_PACING,
            json: false,
        }
    }
}

/// ### Reads arguments from `cargo run`
///
/// Arguments use the `key::value` format. Available options:
///
/// `elevators::N` &rarr; Number of cabins in the fleet
/// `floors::N` &rarr; Number of floors in the building
/// `requests::N` &rarr; Number of random demo requests
/// `pacing_ms::N` &rarr; Wall-clock milliseconds per cabin move (0 for batch runs)
/// `json::(true/false)` &rarr; Dump the final fleet status as JSON
/// `print_fleet::(true/false)` &rarr; Prints the fleet status table
/// `print_err::(true/false)` &rarr; Prints error messages
/// `print_warn::(true/false)` &rarr; Prints warning messages
/// `print_ok::(true/false)` &rarr; Prints OK messages
/// `print_info::(true/false)` &rarr; Prints informational messages
/// `print_else::(true/false)` &rarr; Prints other messages
/// `debug::` &rarr; Disables all prints except error messages
/// `help` &rarr; Displays all possible arguments without starting the program
///
/// If no arguments are provided, all prints are enabled and the defaults from
/// [config] apply.
pub fn parse_args() -> SimArgs {
    parse_arg_list(env::args().skip(1))
}

fn parse_arg_list<I: IntoIterator<Item = String>>(args: I) -> SimArgs {
    let mut sim_args = SimArgs::default();

    for arg in args {
        let parts: Vec<&str> = arg.split("::").collect();
        if parts.len() == 2 {
            let key = parts[0].to_lowercase();
            let value = parts[1].to_lowercase();
            let is_true = value == "true";

            match key.as_str() {
                "elevators" => match value.parse::<u8>() {
                    Ok(n) if n >= 1 => sim_args.num_elevators = n,
                    _ => println!("Ignoring invalid elevator count: {}", value),
                },
                "floors" => match value.parse::<u8>() {
                    Ok(n) if n >= config::MIN_NUM_FLOORS => sim_args.num_floors = n,
                    _ => println!("Ignoring invalid floor count: {}", value),
                },
                "requests" => match value.parse::<u16>() {
                    Ok(n) => sim_args.requests = n,
                    Err(_) => println!("Ignoring invalid request count: {}", value),
                },
                "pacing_ms" => match value.parse::<u64>() {
                    Ok(ms) => sim_args.pacing = Duration::from_millis(ms),
                    Err(_) => println!("Ignoring invalid pacing: {}", value),
                },
                "json" => sim_args.json = is_true,
                "print_fleet" => *config::PRINT_FLEET_ON.lock().unwrap() = is_true,
                "print_err" => *config::PRINT_ERR_ON.lock().unwrap() = is_true,
                "print_warn" => *config::PRINT_WARN_ON.lock().unwrap() = is_true,
                "print_ok" => *config::PRINT_OK_ON.lock().unwrap() = is_true,
                "print_info" => *config::PRINT_INFO_ON.lock().unwrap() = is_true,
                "print_else" => *config::PRINT_ELSE_ON.lock().unwrap() = is_true,
                "debug" => {
                    // Debug mode: errors only
                    *config::PRINT_FLEET_ON.lock().unwrap() = false;
                    *config::PRINT_WARN_ON.lock().unwrap() = false;
                    *config::PRINT_OK_ON.lock().unwrap() = false;
                    *config::PRINT_INFO_ON.lock().unwrap() = false;
                    *config::PRINT_ELSE_ON.lock().unwrap() = false;
                }
                _ => {}
            }
        } else if arg.to_lowercase() == "help" {
            println!("Available arguments:");
            println!("  elevators::N");
            println!("  floors::N");
            println!("  requests::N");
            println!("  pacing_ms::N (0 for batch runs)");
            println!("  json::true/false");
            println!("  print_fleet::true/false");
            println!("  print_err::true/false");
            println!("  print_warn::true/false");
            println!("  print_ok::true/false");
            println!("  print_info::true/false");
            println!("  print_else::true/false");
            println!("  debug (errors only)");
            std::process::exit(0);
        }
    }

    sim_args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_arguments() {
        let args = parse_arg_list(Vec::new());
        assert_eq!(args.num_elevators, config::DEFAULT_NUM_ELEVATORS);
        assert_eq!(args.num_floors, config::DEFAULT_NUM_FLOORS);
        assert_eq!(args.requests, config::DEFAULT_DEMO_REQUESTS);
        assert!(!args.json);
    }

    #[test]
    fn test_key_value_arguments_override_defaults() {
        let args = parse_arg_list(
            ["elevators::5", "floors::16", "requests::12", "pacing_ms::0", "json::true"]
                .map(String::from),
        );
        assert_eq!(args.num_elevators, 5);
        assert_eq!(args.num_floors, 16);
        assert_eq!(args.requests, 12);
        assert!(args.pacing.is_zero());
        assert!(args.json);
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let args = parse_arg_list(["elevators::0", "floors::1", "requests::lots"].map(String::from));
        assert_eq!(args.num_elevators, config::DEFAULT_NUM_ELEVATORS);
        assert_eq!(args.num_floors, config::DEFAULT_NUM_FLOORS);
        assert_eq!(args.requests, config::DEFAULT_DEMO_REQUESTS);
    }
}

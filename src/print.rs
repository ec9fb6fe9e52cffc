//! ## Printing Module
//!
//! This module is only here to make logging in the terminal easier to read.
//! It allows to print in appropriate colors depending on the situation.
//! It also provides a nice print-format for the fleet status.

use crate::config;
use crate::fleet::{ElevatorSnapshot, ElevatorStatus};
use ansi_term::Colour::{self, Green, Red, Yellow};
use prettytable::{row, Table};

/// Prints a message in a specified color to the terminal.
///
/// If `PRINT_ELSE_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The message to print.
/// - `color`: The color to use for the text output.
///
/// ## Example
/// ```
/// use ansi_term::Colour;
/// use liftsim::print;
///
/// print::color("Hello, World!".to_string(), Colour::Green);
/// ```
///
/// **Note:** This function does not return a value and prints directly to the terminal.
/// If color output is not supported, the text may not appear as expected.
pub fn color(msg: String, color: Colour) {
    let print_stat = config::PRINT_ELSE_ON.lock().unwrap().clone();

    if print_stat {
        println!("{}{}\n", color.paint("[CUSTOM]:  "), color.paint(msg));
    }
}

/// Prints an error message in red to the terminal.
///
/// If `PRINT_ERR_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The error message to print.
///
/// ## Terminal output
/// - "\[ERROR\]:   {}", msg
///
/// ## Example
/// ```
/// use liftsim::print;
///
/// print::err("Something went wrong!".to_string());
/// ```
pub fn err(msg: String) {
    let print_stat = config::PRINT_ERR_ON.lock().unwrap().clone();

    if print_stat {
        println!("{}{}\n", Red.paint("[ERROR]:   "), Red.paint(msg));
    }
}

/// Prints a warning message in yellow to the terminal.
///
/// If `PRINT_WARN_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The warning message to print.
///
/// ## Terminal output
/// - "\[WARNING\]: {}", msg
pub fn warn(msg: String) {
    let print_stat = config::PRINT_WARN_ON.lock().unwrap().clone();

    if print_stat {
        println!("{}{}\n", Yellow.paint("[WARNING]: "), Yellow.paint(msg));
    }
}

/// Prints a success message in green to the terminal.
///
/// If `PRINT_OK_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The success message to print.
///
/// ## Terminal output
/// - "\[OK\]:      {}", msg
pub fn ok(msg: String) {
    let print_stat = config::PRINT_OK_ON.lock().unwrap().clone();

    if print_stat {
        println!("{}{}\n", Green.paint("[OK]:      "), Green.paint(msg));
    }
}

/// Prints an informational message in light blue to the terminal.
///
/// If `PRINT_INFO_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The informational message to print.
///
/// ## Terminal output
/// - "\[INFO\]:    {}", msg
pub fn info(msg: String) {
    let print_stat = config::PRINT_INFO_ON.lock().unwrap().clone();

    if print_stat {
        println!("{}{}\n", Colour::Cyan.paint("[INFO]:    "), Colour::Cyan.paint(msg));
    }
}

/// Logs the current fleet status to the terminal in a table format.
///
/// Every elevator is listed with its ID, current floor and status. Idle cabins
/// are shown in green, moving cabins in yellow.
///
/// ## Parameters
/// - `snapshots`: The fleet snapshots as returned by
///   [crate::dispatch::ElevatorSystem::get_fleet_status].
///
/// ## Behavior
/// - If configured printing is disabled (`config::PRINT_FLEET_ON` is false), the function exits early.
///
/// **Note:** This is intended for human-readable monitoring; use the snapshots
/// themselves for anything programmatic.
pub fn fleet(snapshots: &[ElevatorSnapshot]) {
    let print_stat = config::PRINT_FLEET_ON.lock().unwrap().clone();
    if !print_stat {
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "Floor", "Status"]);

    for snapshot in snapshots {
        let status_text = match snapshot.status {
            ElevatorStatus::Idle => Green.paint("idle").to_string(),
            ElevatorStatus::MovingUp => Yellow.paint("moving_up").to_string(),
            ElevatorStatus::MovingDown => Yellow.paint("moving_down").to_string(),
        };
        table.add_row(row![snapshot.id, snapshot.floor, status_text]);
    }

    table.printstd();
}

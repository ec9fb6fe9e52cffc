use std::sync::Arc;

use anyhow::Context;
use futures::future::join_all;
use rand::Rng;

use liftsim::dispatch::ElevatorSystem;
use liftsim::sink::memory::MemoryEventSink;
use liftsim::{init, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = init::parse_args();

    print::info(format!(
        "Starting dispatch simulation: {} elevators, {} floors",
        args.num_elevators, args.num_floors
    ));

    let sink = Arc::new(MemoryEventSink::new());
    let system = Arc::new(
        ElevatorSystem::new(args.num_elevators, args.num_floors, args.pacing, sink.clone())
            .context("failed to initialize the fleet")?,
    );

    // Draw the request pairs up front, the RNG stays out of the async blocks
    let requests: Vec<(u8, u8)> = {
        let mut rng = rand::thread_rng();
        (0..args.requests)
            .map(|_| {
                let origin = rng.gen_range(0..args.num_floors);
                let mut destination = rng.gen_range(0..args.num_floors);
                while destination == origin {
                    destination = rng.gen_range(0..args.num_floors);
                }
                (origin, destination)
            })
            .collect()
    };

    print::info(format!("Firing {} concurrent requests", requests.len()));
    let results = join_all(requests.iter().map(|&(origin, destination)| {
        let system = system.clone();
        async move {
            (
                origin,
                destination,
                system.request_elevator(origin, destination).await,
            )
        }
    }))
    .await;

    for (origin, destination, result) in results {
        match result {
            Ok((elevator_id, total_time)) => print::ok(format!(
                "Request {} -> {} served by elevator {} ({:.1} simulated seconds)",
                origin, destination, elevator_id, total_time
            )),
            Err(e) => print::err(format!(
                "Request {} -> {} failed: {}",
                origin, destination, e
            )),
        }
    }

    print::fleet(&system.get_fleet_status());

    // Park the idle cabins somewhere else. The target floor is a plain
    // random placeholder, not a prediction.
    let parking: Vec<(u8, u8)> = {
        let mut rng = rand::thread_rng();
        system
            .get_fleet_status()
            .iter()
            .map(|snapshot| (snapshot.id, rng.gen_range(0..args.num_floors)))
            .collect()
    };
    for (elevator_id, target_floor) in parking {
        if system
            .reposition_idle_elevator(elevator_id, target_floor)
            .await?
        {
            print::info(format!(
                "Parked elevator {} at floor {}",
                elevator_id, target_floor
            ));
        }
    }

    print::fleet(&system.get_fleet_status());

    print::info(format!(
        "Recorded {} demands, {} journeys ({} still open), {} resting periods",
        sink.demands().len(),
        sink.journeys().len(),
        sink.open_journey_count(),
        sink.resting_periods().len()
    ));

    if args.json {
        let status = serde_json::to_string_pretty(&system.get_fleet_status())
            .context("failed to serialize fleet status")?;
        println!("{}", status);
        let demands = serde_json::to_string_pretty(&sink.demands())
            .context("failed to serialize demand records")?;
        println!("{}", demands);
    }

    Ok(())
}

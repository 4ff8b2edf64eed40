use anyhow::{ensure, Result};
use eca_lift::{LiftingTable, NiceInt, Row, Simulator, Transition, DEFAULT_MAX_STEPS};
use std::time::Instant;

fn main() -> Result<()> {
    const SIZE: usize = 20;
    const STEP: u64 = 987_654_321_234;
    const CHECK_WINDOW: u64 = 10_000;

    let transition = Transition::from_indices(110, None)?;
    let initial = Row::random(SIZE, Some(42));

    let timer = Instant::now();
    let table = LiftingTable::build(transition, SIZE, DEFAULT_MAX_STEPS)?;
    println!("Time on building table: {:?}", timer.elapsed());
    eprint!("{}", table.statistics());

    let timer = Instant::now();
    let simulator = Simulator::new(transition, SIZE)?;
    let mut row = initial.clone();
    for k in 0..CHECK_WINDOW {
        ensure!(table.query(&initial, k)? == row, "mismatch at step {}", k);
        row = simulator.advance(&row, 1)?;
    }
    println!(
        "Time on checking {} steps: {:?}",
        NiceInt::from(CHECK_WINDOW),
        timer.elapsed()
    );

    let timer = Instant::now();
    let result = table.query(&initial, STEP)?;
    println!("Time on big query: {:?}", timer.elapsed());
    println!("{} after {} steps: {}", initial, NiceInt::from(STEP), result);
    Ok(())
}

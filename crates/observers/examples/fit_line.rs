//! Fit a line to noiseless samples of `y = 2x + 3`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example fit_line
//! cargo run --example fit_line -- 0.05 2000
//! RUST_LOG=info cargo run --example fit_line -- --log
//! ```
//!
//! The optional positional arguments are the learning rate and the epoch
//! count. By default progress is printed to standard output every 100 epochs;
//! with `--log` it is emitted through `env_logger` instead, alongside a cost
//! summary recorded by [`CostHistory`].

use std::error::Error;

use linfit_core::{Line, Observer};
use linfit_observers::{CostHistory, LogProgress};
use linfit_solvers::optimization::gradient_descent::{
    Action, Config, DEFAULT_EPOCHS, DEFAULT_INTERVAL, DEFAULT_LEARNING_RATE, Event, Optimizer,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let use_log = args.iter().any(|arg| arg == "--log");
    args.retain(|arg| arg != "--log");

    let learning_rate = match args.first() {
        Some(arg) => arg.parse::<f64>()?,
        None => DEFAULT_LEARNING_RATE,
    };
    let epochs = match args.get(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_EPOCHS,
    };

    let inputs: Vec<f64> = (0..5).map(f64::from).collect();
    let targets: Vec<f64> = inputs.iter().map(|x| 2.0 * x + 3.0).collect();

    let optimizer = Optimizer::new(Config::new(learning_rate, epochs)?);
    let mut line = Line::default();

    let solution = if use_log {
        let mut progress = LogProgress::new();
        let mut history = CostHistory::every(DEFAULT_INTERVAL);

        let solution = optimizer.train_observed(&mut line, &inputs, &targets, |event: &Event| {
            let _: Option<Action> = history.observe(event);
            progress.observe(event)
        })?;

        for (epoch, cost) in history.points() {
            log::debug!(epoch = *epoch, cost = *cost; "recorded cost");
        }
        solution
    } else {
        optimizer.train(&mut line, &inputs, &targets)?
    };

    println!(
        "Fitted y = {:.4}x + {:.4} after {} epochs",
        solution.slope, solution.intercept, solution.epochs
    );

    Ok(())
}

//! Reads one line from stdin and publishes one event per character
//! (`'a'` is type 0, `'b'` type 1, ...), then drains the queue once.
//!
//! ```sh
//! echo "abcdef" | cargo run --example letters
//! ```
//!
//! Type 5 is subscribed twice by a handler that republishes type 5, so
//! every `f` fans out until the per-cycle publish limit is reached.

use std::{io::BufRead, process::ExitCode};

use tickbus::{Config, Context, Engine, Result};

fn type_zero(_: &Context<'_, i32>, _: Option<&i32>) {
    println!("This is a '0'-type subscriber!");
}

fn type_one(ctx: &Context<'_, i32>, _: Option<&i32>) {
    println!("This is a '1'-type subscriber, and it generates a '0'-type event!");
    report(ctx.publish(0u32, None));
}

fn type_two(_: &Context<'_, i32>, payload: Option<&i32>) {
    match payload {
        None => println!("This is a '2'-type subscriber with no data"),
        Some(datum) => println!("This is a '2'-type subscriber; here's the event's datum: {datum}"),
    }
}

fn type_three(ctx: &Context<'_, i32>, _: Option<&i32>) {
    println!("This is a '3'-type subscriber, and it generates '2'-type events with a datum of 32!");
    report(ctx.publish(2u32, 32));
}

fn type_four(ctx: &Context<'_, i32>, _: Option<&i32>) {
    println!("This is a '4'-type subscriber, and it generates '2'-type events with a datum of 64!");
    report(ctx.publish(2u32, 64));
}

fn recursion(ctx: &Context<'_, i32>, _: Option<&i32>) {
    println!("This is a '5'-type subscriber, and it generates another '5'-type event!");
    report(ctx.publish(5u32, None));
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Publish failed");
    }
}

fn run(line: &str) -> Result<()> {
    let mut engine = Engine::<i32>::new(Config::default());
    engine.subscribe(0u32, type_zero)?;
    engine.subscribe(1u32, type_one)?;
    engine.subscribe(2u32, type_two)?;
    engine.subscribe(3u32, type_three)?;
    engine.subscribe(4u32, type_four)?;
    engine.subscribe(5u32, recursion)?;
    engine.subscribe(5u32, recursion)?;

    for c in line.chars() {
        engine.publish((c as u32).wrapping_sub('a' as u32), None)?;
    }

    let report = engine.run_drain_cycle()?;
    tracing::info!(
        dispatched = report.dispatched,
        dropped = report.dropped,
        unknown_type = report.unknown_type,
        "Done"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut line = String::new();
    if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
        tracing::error!(error = %e, "Couldn't read stdin");
        return ExitCode::from(2);
    }

    match run(line.trim_end_matches(['\r', '\n'])) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Engine failure");
            ExitCode::from(2)
        }
    }
}

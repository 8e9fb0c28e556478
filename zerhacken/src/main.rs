use std::{error::Error, path::PathBuf, time::Instant};

use canvas::{save_png, Canvas, WriteError, HEIGHT, WIDTH};
use clap::Parser;

#[derive(Parser)]
#[clap(about = "Write a red and white checkerboard png")]
struct Opts {
    #[clap(short, long, default_value = "zerhacken.png", help = "output file")]
    output: PathBuf,
}

fn run(opts: &Opts) -> Result<(), WriteError> {
    let start = Instant::now();

    let canvas = Canvas::checkerboard(WIDTH, HEIGHT);
    save_png(&canvas, &opts.output)?;

    log::info!(
        "Wrote {}x{} to {} in {} [ms]",
        canvas.width(),
        canvas.height(),
        opts.output.display(),
        start.elapsed().as_millis()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Info)?;

    let opts: Opts = Opts::parse();

    if let Err(e) = run(&opts) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

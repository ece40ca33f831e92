use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;

use figures::App;

const DEFAULT_INPUT: &str = "input.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let path = args
        .opt_free_from_str::<PathBuf>()?
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    let file = File::open(&path)
        .with_context(|| format!("unable to open `{}`", path.display()))?;

    let stdout = io::stdout();
    let mut app = App::new();
    app.run(BufReader::new(file), stdout.lock())
}

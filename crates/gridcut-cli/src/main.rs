mod cli;
mod html_cmd;
mod overlay_cmd;
mod shared;
mod slices_cmd;
mod tree_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Tree {
            ref file,
            ref format,
        } => tree_cmd::run(file, format),
        cli::Commands::Html {
            ref file,
            ref output,
            ref slices_dir,
            ref title,
        } => html_cmd::run(
            file,
            output.as_deref(),
            slices_dir.as_deref(),
            title.as_deref(),
        ),
        cli::Commands::Slices {
            ref file,
            ref output_dir,
            blank,
        } => slices_cmd::run(file, output_dir, blank),
        cli::Commands::Overlay {
            ref file,
            ref output,
        } => overlay_cmd::run(file, output),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

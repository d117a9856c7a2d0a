use batch_upscale::logging::FileLog;
use batch_upscale::walk;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batch-upscale")]
#[command(about = "Upscale undersized images across a directory tree")]
#[command(long_about = "\
Upscale undersized images across a directory tree

Walks INPUT recursively; any image whose shorter edge is under 250px is
enlarged — 2x, or 4x when doubling would still fall short — with linear
interpolation. Results land under OUTPUT in a mirrored tree, named
<stem>_upscaled.<ext>. Images already large enough produce no output file.

Animated GIFs are upscaled frame by frame and reassembled as infinite-loop
animations with frame order and timing preserved. A failure on one file is
printed and logged, and the rest of the batch continues.

Handled extensions: .bmp .png .gif .jpg .jpeg (case-insensitive).")]
#[command(version)]
struct Cli {
    /// Directory tree to read images from
    input: PathBuf,

    /// Root of the mirrored output tree
    output: PathBuf,

    /// Run log destination (truncated at startup)
    #[arg(long, default_value = "upscale.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut sink = FileLog::create(&cli.log_file)?;
    let summary = walk::run(&cli.input, &cli.output, &mut sink)?;

    println!("==> Done: {summary}");
    Ok(())
}

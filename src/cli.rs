use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "files-to-bytes", version)]
#[command(
    about = "Convert files into C headers holding their bytes as a static array. \
                   Run without files to change the output settings."
)]
pub struct Cli {
    /// Files to convert (globs are expanded). No files starts the settings prompt.
    #[arg(num_args(0..))]
    pub paths: Vec<String>,

    /// Directory holding settings.ini and outputs/, defaults to the executable's directory.
    #[arg(long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Do not wait for Enter after converting files.
    #[arg(long = "no-wait")]
    pub no_wait: bool,
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "unpackall")]
#[command(version)]
#[command(about = "Extract every zip/rar/7z archive in the current directory", long_about = None)]
#[command(after_help = "Examples:\n  \
  unpackall        extract archives in the current directory only\n  \
  unpackall -r     also extract archives found in subdirectories\n\n\
Archives are removed only after the extraction tool reports success.\n\
Requires unzip, unrar and 7z on PATH for the formats you extract.")]
pub struct Cli {
    /// Search subdirectories recursively
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,
}

use clap::Parser;

pub const LOG_ENV: &str = "PAYROLL_LOG";

#[derive(Parser, Debug, Default)]
#[command(
    name = "payroll",
    version,
    about = "Interactive payroll register for full-time, part-time and contractual staff"
)]
pub struct Cli {
    #[arg(long, help = "Print the payroll report as machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        conflicts_with = "quiet",
        help = "Log debug events to stderr"
    )]
    pub verbose: bool,
    #[arg(short, long, help = "Only log errors to stderr")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

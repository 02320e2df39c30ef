use clap::Parser;

#[derive(Parser)]
#[command(name = "carton")]
#[command(about = "Pack item sizes into capacity-10 cartons", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Item sizes as a string of digits 1-9 (read from stdin when omitted)
    pub sizes: Option<String>,

    /// Force aggregated display (one group per combination, with a count)
    #[arg(long, conflicts_with = "per_carton")]
    pub aggregate: bool,

    /// Force one group per carton
    #[arg(long)]
    pub per_carton: bool,
}

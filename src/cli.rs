use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "greenboard", about = "Greenmovement waste dashboard", version)]
#[command(group(ArgGroup::new("mode").args(["plot", "map", "show_data"]).multiple(false)))]
#[command(group(ArgGroup::new("md_switch").args(["md", "no_md"]).multiple(false)))]
pub struct Cli {
    /// A question for the assistant, or a plot request such as
    /// "buat line plot TotalWaste dan Recycled".
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Model to use: versatile, instant or guard (full model ids also accepted).
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature in [0, 1].
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Dashboard password. Prompted on stderr when omitted.
    #[arg(long)]
    pub password: Option<String>,

    /// Path to the CSV dataset (overrides DATA_PATH).
    #[arg(long)]
    pub data: Option<String>,

    /// Path to the geo CSV with latitude/longitude columns (overrides GEO_DATA_PATH).
    #[arg(long = "geo-data")]
    pub geo_data: Option<String>,

    /// Treat PROMPT strictly as a plot request; fail if it does not parse.
    #[arg(long)]
    pub plot: bool,

    /// Open the dashboard on the map view.
    #[arg(long)]
    pub map: bool,

    /// Print the dataset and exit.
    #[arg(long = "show-data")]
    pub show_data: bool,

    /// Do not prefix questions with a serialized excerpt of the dataset.
    #[arg(long = "no-excerpt")]
    pub no_excerpt: bool,

    /// Prettify Markdown in one-shot answers.
    #[arg(long)]
    pub md: bool,
    /// Print one-shot answers as plain text.
    #[arg(long = "no-md")]
    pub no_md: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

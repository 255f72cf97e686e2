use clap::Subcommand;

/// Tag progress commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// Whether the tag is complete for a day.
    Status {
        id: String,
        /// Day to check (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Distinct active days in the week containing a day.
    Week {
        id: String,
        /// Any day in the week (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Raw habits under the tag.
    Descendants { id: String },
}

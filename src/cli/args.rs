use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::idea::Status;

#[derive(Parser)]
#[command(name = "clipnest")]
#[command(about = "Track video ideas from first spark to published", version, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Quick capture: title of a new idea
    pub(crate) title: Option<String>,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Record a new idea
    Add {
        title: String,
        #[command(flatten)]
        fields: IdeaFields,
    },
    /// List ideas, optionally only one status
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        status: Option<Status>,
    },
    /// Show every field of one idea
    Show { id: String },
    /// Change fields of an existing idea
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: IdeaFields,
    },
    /// Move an idea to the next stage
    Advance { id: String },
    /// Delete ideas by id, or by list position with --at
    #[command(alias = "delete")]
    Rm {
        #[arg(required_unless_present = "at")]
        ids: Vec<String>,
        #[arg(long, num_args = 1.., value_delimiter = ',', conflicts_with = "ids")]
        at: Vec<usize>,
    },
    /// Ideas grouped by stage
    Board,
    Version,
}

#[derive(Args, Default)]
pub(crate) struct IdeaFields {
    #[arg(short, long)]
    pub(crate) description: Option<String>,
    /// Comma-separated tags
    #[arg(short, long)]
    pub(crate) tags: Option<String>,
    #[arg(short, long)]
    pub(crate) status: Option<Status>,
}

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message to the model and print the reply
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Ask the model for a complexity review of a .py, .java, .cpp, .cc or .cxx file
    Analyze {
        file: Option<PathBuf>,

        /// Analyze the text of this file instead of the original content
        #[arg(long)]
        edited: Option<PathBuf>,

        /// Print the decoded file content before the analysis
        #[arg(long)]
        show_content: bool,
    },

    /// Chat and analyze files from a prompt, one action at a time
    Interactive,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Ask Junie a single question and print the reply
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Start an interactive chat session on the terminal
    Chat,

    /// Print the welcome message
    Welcome,
}

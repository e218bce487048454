use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version)]
#[command(about = "A plain-language todo list for the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:\n    todoz add \"Buy milk\"\n    todoz done 1\n    todoz \"add Walk dog; list active\"\n    todoz            (interactive session)")]
pub struct Cli {
    /// Todo file to use instead of the configured one
    #[arg(short, long, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Command to run; words are joined with spaces and ';' separates several commands.
    /// Without one, commands are read from stdin line by line.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The one-shot command line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_words_means_interactive() {
        let cli = Cli::try_parse_from(["todoz"]).unwrap();
        assert_eq!(cli.command_line(), None);
        assert!(!cli.verbose);
    }

    #[test]
    fn words_are_joined() {
        let cli = Cli::try_parse_from(["todoz", "add", "Buy", "milk"]).unwrap();
        assert_eq!(cli.command_line().as_deref(), Some("add Buy milk"));
    }

    #[test]
    fn options_before_the_command() {
        let cli =
            Cli::try_parse_from(["todoz", "--no-color", "-f", "/tmp/t.json", "list"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.json")));
        assert_eq!(cli.command_line().as_deref(), Some("list"));
    }

    #[test]
    fn hyphens_inside_the_command_are_kept() {
        let cli = Cli::try_parse_from(["todoz", "add", "-v", "is", "a", "title"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.command_line().as_deref(), Some("add -v is a title"));
    }
}

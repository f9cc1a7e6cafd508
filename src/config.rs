use std::path::PathBuf;

use clap::Parser;

/// Command-line options for the viewer.
#[derive(Debug, Parser)]
#[command(name = "panel-scores")]
#[command(about = "Browse interview-panel evaluation scores", long_about = None)]
pub struct Cli {
    /// Evaluation export to open at startup
    #[arg(env = "PANEL_SCORES_DATA", default_value = "data.csv")]
    pub data: PathBuf,

    /// Initial window width in points
    #[arg(long, default_value_t = 1100.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 850.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_and_size() {
        let cli = Cli::parse_from(["panel-scores", "scores.csv", "--width", "800"]);
        assert_eq!(cli.data, PathBuf::from("scores.csv"));
        assert_eq!(cli.width, 800.0);
        assert_eq!(cli.height, 850.0);
    }

    #[test]
    fn verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

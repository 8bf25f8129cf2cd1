use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const ROLLER_AUTHOR: &str = crate_authors!();
const ROLLER_VERSION: &str = crate_version!();
const ROLLER_ABOUT: &str = crate_description!();
const ROLLER_FLAG_D_SHORT: char = 'd';
const ROLLER_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLER_BASE_URL_HELP: &str = "Server the roll route is requested from";
const ROLLER_SHEETS_HELP: &str = "Roll against character sheets in this RON file instead of a server";
const ROLLER_CONFIG_HELP: &str = "RON file overriding the route prefix";
const ROLLER_HISTORY_HELP: &str = "Line history file";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_HISTORY: &str = "history";

#[derive(Parser, Debug)]
#[command(author = ROLLER_AUTHOR, version = ROLLER_VERSION, about = ROLLER_ABOUT)]
pub struct Args {
    #[arg(short = ROLLER_FLAG_D_SHORT, long, help = ROLLER_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(short, long, env = "ROLLER_BASE_URL", default_value = DEFAULT_BASE_URL, help = ROLLER_BASE_URL_HELP)]
    pub base_url: String,

    #[arg(short, long, help = ROLLER_SHEETS_HELP)]
    pub sheets: Option<PathBuf>,

    #[arg(short, long, help = ROLLER_CONFIG_HELP)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_HISTORY, help = ROLLER_HISTORY_HELP)]
    pub history: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["roller-repl"]).unwrap();
        assert!(!args.debug);
        assert!(args.sheets.is_none());
        assert_eq!(PathBuf::from(DEFAULT_HISTORY), args.history);
    }

    #[test]
    fn offline_with_sheets() {
        let args =
            Args::try_parse_from(["roller-repl", "-d", "--sheets", "party.ron", "-b", "http://dm:9000"])
                .unwrap();
        assert!(args.debug);
        assert_eq!(Some(PathBuf::from("party.ron")), args.sheets);
        assert_eq!("http://dm:9000", args.base_url);
    }
}

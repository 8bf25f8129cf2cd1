mod cli;
mod helper;
mod http;
mod term;

use cli::Parser;
use colored::Colorize;
use helper::NameCompleter;
use helper::ReplHelper;
use http::HttpFetch;
use roller_lib::fetch::Fetch;
use roller_lib::sheet::local::LocalFetch;
use roller_lib::sheet::Sheets;
use roller_lib::Config;
use roller_lib::Invoker;
use roller_lib::Request;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use std::path::Path;
use term::TermOutput;
use tracing::info;
use tracing::Level;
use tracing_unwrap::ResultExt;

#[tokio::main(flavor = "current_thread")]
#[tracing::instrument]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path).expect_or_log("Could not read config");
            Config::from_ron(&content).expect_or_log("Invalid config")
        }
        None => Config::default(),
    };

    match &args.sheets {
        Some(path) => {
            let sheets = Sheets::load(path).expect_or_log("Could not load sheets");
            info!("Rolling offline against {} sheets", sheets.len());
            let names = sheets.names();
            let fetch = LocalFetch::new(sheets).route_prefix(config.route_prefix.clone());
            run(Invoker::with_config(fetch, &config), names, &args.history).await
        }
        None => {
            info!("Rolling against `{}`", args.base_url);
            let fetch = HttpFetch::new(&args.base_url);
            run(Invoker::with_config(fetch, &config), Vec::new(), &args.history).await
        }
    }
}

async fn run<F: Fetch>(invoker: Invoker<F>, names: Vec<String>, history: &Path) -> Result<()> {
    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        completer: NameCompleter::new(names),
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(history).is_err() {
        eprintln!("{}", "roller: warn: no previous history".bold().yellow());
    }
    let mut count = 1u64;
    loop {
        let prompt = format!("roll: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        match rline.readline(&prompt) {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                let line = line.trim();
                if !line.is_empty() {
                    match line.parse::<Request>() {
                        Ok(request) => {
                            invoker.roll(&request, Some(&TermOutput)).await;
                        }
                        Err(error) => eprintln!("{}", format!("{}", error).bold().red()),
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "roller: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "roller: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("roller: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(history)
}

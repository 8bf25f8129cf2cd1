use colored::ColoredString;
use colored::Colorize;
use roller_lib::outcome::FAILED_MARKER;
use roller_lib::output::Output;

/// Print each marker on its own line
pub(crate) struct TermOutput;

fn paint(text: &str) -> ColoredString {
    if text == FAILED_MARKER {
        text.bold().red()
    } else {
        text.bold().magenta()
    }
}

impl Output for TermOutput {
    fn write(&self, text: &str) {
        println!("{}", paint(text));
    }
}

use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Context;
use rustyline::Result;
use rustyline_derive::Helper;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

const QUOTE: char = '"';

/// Complete attribute and skill names known from the loaded sheets
pub(crate) struct NameCompleter {
    names: Vec<String>,
}

impl NameCompleter {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Start of the word under the cursor and the names it can become
    pub(crate) fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let head = &line[..pos];
        let in_quote = head.matches(QUOTE).count() % 2 == 1;
        let start = head
            .char_indices()
            .rev()
            .find(|&(_, c)| c == QUOTE || (!in_quote && c.is_whitespace()))
            .map(|(index, c)| index + c.len_utf8())
            .unwrap_or(0);
        let prefix = &head[start..];
        let candidates = self
            .names
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: if in_quote {
                    format!("{name}{QUOTE}")
                } else if name.contains(char::is_whitespace) {
                    format!("{QUOTE}{name}{QUOTE}")
                } else {
                    name.clone()
                },
            })
            .collect();
        (start, candidates)
    }
}

/// Color quoted fields, the rest of the line is left as typed
fn paint_quoted(line: &str) -> Cow<'_, str> {
    if !line.contains(QUOTE) {
        return Borrowed(line);
    }
    let mut painted = String::with_capacity(line.len());
    for (index, part) in line.split(QUOTE).enumerate() {
        if index > 0 {
            painted.push(QUOTE);
        }
        if index % 2 == 1 {
            painted.push_str(&part.cyan().to_string());
        } else {
            painted.push_str(part);
        }
    }
    Owned(painted)
}

#[derive(Helper)]
pub(crate) struct ReplHelper {
    pub(crate) completer: NameCompleter,
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Self::Candidate>)> {
        Ok(self.completer.candidates(line, pos))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        paint_quoted(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        match default {
            true => Borrowed(self.colored.as_str()),
            false => Borrowed(prompt),
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.italic().dimmed().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize) -> bool {
        line.contains(QUOTE)
    }
}

impl Validator for ReplHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        if ctx.input().matches(QUOTE).count() % 2 == 1 {
            Ok(ValidationResult::Invalid(Some(
                " <- unclosed quote".to_owned(),
            )))
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}

// Copyright (C) 2020-2021 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

static KEYWORDS: &[&str] = &["PLACE", "EXCHANGE", "PASS", "help", "source", "quit"];

#[derive(rustyline_derive::Helper)]
pub struct MyHelper {
    hinter: rustyline::hint::HistoryHinter,
}

// keywords matching what has been typed of the first word.
fn keyword_candidates(prefix: &str) -> Vec<rustyline::completion::Pair> {
    KEYWORDS
        .iter()
        .filter(|keyword| {
            keyword
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .map(|&keyword| rustyline::completion::Pair {
            display: keyword.to_owned(),
            replacement: format!("{} ", keyword),
        })
        .collect()
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<rustyline::completion::Pair>), rustyline::error::ReadlineError> {
        let typed = &line[..pos];
        if typed.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        Ok((0, keyword_candidates(typed)))
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

impl rustyline::validate::Validator for MyHelper {}

pub type MyEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<MyEditor> {
    let mut rl = MyEditor::new()?;
    rl.set_helper(Some(MyHelper {
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}

use std::borrow::Cow;

use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

use crate::{
    error::{ProgramError, RuntimeError},
    interpreter::value::environment::{Env, Environment},
};

/// The text that shows on the console before every line.
pub const PROMPT: &str = "mk>> ";

const MONKEY_SMILE: &str = r#"         __,__
   .--. .-" "-. .--.
/ .. \/ .-. .-. \/ .. \
| | | '| / Y \ |' | | |
|| \ \ \ 0 | 0 / / / ||
 \ '- ,\.-"""-./, -' /
  ''-' /_ ^ ^ _\ '-''
      | \._ _./ |
      \ \ '~' / /
      '._'-=-'_.'
        '-----'
"#;

const MONKEY_FROWN: &str = r#"         __,__
   .--. .-" "-. .--.
/ .. \/ .-. .-. \/ .. \
| | | '| / Y \ |' | | |
|| \ \ \ * | * / / / ||
 \ '- ,\.-"""-./, -' /
  ''-' /_ ^ ^ _\ '-''
      \ \.~~~./ /
      | \.~~~./ |
      '._'-=-'_.'
        '-----'
"#;

struct ReplPrompt;

impl Prompt for ReplPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(PROMPT)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("::: ")
    }

    fn render_prompt_history_search_indicator(&self,
                                              history_search: PromptHistorySearch)
                                              -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

/// Starts the interactive loop.
///
/// One line is read per iteration with line editing and in-session history.
/// Parser errors pretty-print and skip evaluation; evaluated values print
/// their `Inspect` form; statements that produce nothing print nothing.
/// `quit`, `exit`, `quit()` and `exit()` end the session — unless the user
/// has bound those names, in which case the bindings win — and so do
/// Ctrl-D and Ctrl-C.
pub fn start() {
    let username = std::env::var("USER").unwrap_or_else(|_| "friend".to_string());

    println!("{MONKEY_SMILE}");
    println!("Hello {username}! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let mut line_editor = Reedline::create();
    let env = Environment::new();

    loop {
        let signal = match line_editor.read_line(&ReplPrompt) {
            Ok(signal) => signal,
            Err(error) => {
                eprintln!("{error}");
                return;
            },
        };

        match signal {
            Signal::Success(line) => {
                if !run_line(line.trim(), &env, &username) {
                    return;
                }
            },
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye {username}");
                return;
            },
        }
    }
}

/// Runs one line against the persistent environment.
///
/// Returns `false` when the session should end.
fn run_line(line: &str, env: &Env, username: &str) -> bool {
    match crate::eval_source(line, env) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(ProgramError::Parse(errors)) => {
            print!("{MONKEY_FROWN}");
            println!("Woops! We ran into some monkey business here!");
            println!(" parser errors:");
            for error in &errors {
                println!("\t{error}");
            }
        },
        Err(ProgramError::Runtime(error)) => {
            // `quit` only quits while it is an unbound name; a user binding
            // called quit keeps working as a variable.
            if let RuntimeError::IdentifierNotFound { name } = &error
               && matches!(line, "quit" | "exit" | "quit()" | "exit()")
               && (name == "quit" || name == "exit")
            {
                if line.ends_with("()") {
                    println!("Goodbye {username}");
                    return false;
                }
                println!("use {line}() or Ctrl-D (i.e. EOF) to exit");
                return true;
            }
            println!("ERROR: {error}");
        },
    }
    true
}

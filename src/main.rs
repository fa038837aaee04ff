//! Wordle Lexicon CLI
//!
//! Checks guesses against a word list, interactively or one word at a time.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use clap::{Parser, Subcommand};
use unicode_segmentation::UnicodeSegmentation;
use wordle_lexicon::logging::init_logger;
use wordle_lexicon::{
    load_word_list, LexiconError, Locale, RowHistory, RowModel, WordModel, WordTree, WordValidator,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Parser)]
#[command(name = "wordle-lexicon", version, about = "Check five-letter guesses against a word list")]
struct Cli {
    /// Directory holding the `<locale>_G.txt` and `<locale>_A.txt` word lists
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Newline-delimited list of accepted guesses (overrides `--dir`)
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Newline-delimited list of answers (defaults to the guess list)
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Locale of the word lists (en, en_GB, fr, lv, ee)
    #[arg(short, long, default_value = "en")]
    locale: Locale,

    /// Start in hard mode
    #[arg(long)]
    hard: bool,

    /// Let plain letters also match their diacritic forms (S matches Š)
    #[arg(long)]
    simplified: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check words against the list and exit
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

const SPINNER_FRAMES: &[char] = &['◐', '◓', '◑', '◒'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(120);

/// Progress indicator on stdout while the guess tree is built.
struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: String) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let width = message.chars().count() + 2;
            for frame in SPINNER_FRAMES.iter().cycle() {
                if !running_clone.load(Ordering::Relaxed) {
                    break;
                }
                print!("\r{} {}", frame, message);
                let _ = io::stdout().flush();
                thread::sleep(SPINNER_INTERVAL);
            }
            print!("\r{}\r", " ".repeat(width));
            let _ = io::stdout().flush();
        });
        Self { running, handle: Some(handle) }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Read the word lists, then build the guess tree off the main thread.
fn load_validator(cli: &Cli) -> Result<WordValidator, LexiconError> {
    let locale = cli.locale;
    let words_path = match &cli.words {
        Some(path) => path.clone(),
        None => cli.dir.join(locale.guess_list_file()),
    };
    let answers_path = match &cli.answers {
        Some(path) => Some(path.clone()),
        None if cli.words.is_none() => Some(cli.dir.join(locale.answer_list_file())).filter(|p| p.exists()),
        None => None,
    };

    let guesses = load_word_list(&words_path, locale)?;
    let answers = match answers_path {
        Some(path) => load_word_list(&path, locale)?,
        None => guesses.clone(),
    };

    let spinner = Spinner::new(format!(
        "Building {} word tree ({} words)...",
        locale.display_name(),
        guesses.len()
    ));
    let builder = thread::spawn(move || WordTree::from_words(guesses, locale));
    let tree = builder.join().unwrap_or_else(|e| std::panic::resume_unwind(e));
    spinner.stop();

    let mut validator = WordValidator::new(locale);
    validator.initialize(answers, Arc::new(tree));
    Ok(validator)
}

struct Session {
    validator: WordValidator,
    expected: Option<WordModel>,
    /// Row being typed; keeps its rejected attempts until it is submitted.
    current: Option<RowModel>,
    rows: Vec<RowModel>,
    hard_mode: bool,
    simplified: bool,
}

impl Session {
    fn word(&self, text: &str) -> WordModel {
        let locale = self.validator.locale();
        if self.simplified {
            WordModel::simplified(text, locale)
        } else {
            WordModel::new(text, locale)
        }
    }

    /// The first letter of `text` that cannot be typed in this locale.
    fn foreign_letter<'a>(&self, text: &'a str) -> Option<&'a str> {
        let locale = self.validator.locale();
        text.graphemes(true).find(|g| !locale.accepts_letter(g))
    }

    fn check(&self, text: &str) -> bool {
        if let Some(letter) = self.foreign_letter(text) {
            println!(
                "✗ {}: {} is not a {} letter",
                text.to_uppercase(),
                letter,
                self.validator.locale().display_name()
            );
            return false;
        }
        let word = self.word(text);
        match self.validator.validate(&word) {
            Ok(found) => {
                println!("✓ {}", found.display_value().to_uppercase());
                true
            }
            Err(reason) => {
                println!("✗ {}: {}", text.to_uppercase(), reason);
                false
            }
        }
    }

    fn guess(&mut self, text: &str) {
        let Some(expected) = self.expected.clone() else {
            println!("Set an answer first: answer <word>");
            return;
        };

        if self.rows.is_finished(&expected) {
            println!("This board is finished. Use 'reset' or 'answer <word>'.");
            return;
        }

        if let Some(letter) = self.foreign_letter(text) {
            println!("{} is not a {} letter", letter, self.validator.locale().display_name());
            return;
        }

        let word = self.word(text);
        let current = self.current.get_or_insert_with(|| RowModel::new(expected.clone()));
        current.word = word;
        match self.validator.submit(current, &self.rows, self.hard_mode) {
            Ok(()) => {
                let row = std::mem::replace(current, RowModel::new(expected.clone()));
                println!(
                    "{} {}",
                    row.word.display_value().to_uppercase(),
                    row.to_emoji_string()
                );
                self.rows.push(row);

                if self.rows.is_won(&expected) {
                    println!();
                    println!("🎉 Solved in {} guesses!", self.rows.submitted_count());
                    println!();
                } else if self.rows.is_finished(&expected) {
                    println!();
                    println!("Out of guesses. The answer was {}.", expected.display_value().to_uppercase());
                    println!();
                }
            }
            Err(reason) if current.attempt_count > 1 => {
                println!("{} (attempt {})", reason, current.attempt_count)
            }
            Err(reason) => println!("{}", reason),
        }
    }

    fn print_rows(&self) {
        if self.rows.is_empty() {
            println!("No guesses yet.");
            return;
        }
        for (i, row) in self.rows.iter().enumerate() {
            println!(
                "{:>2}. {} {}",
                i + 1,
                row.word.display_value().to_uppercase(),
                row.to_emoji_string()
            );
        }
    }
}

fn run_interactive(validator: WordValidator, hard_mode: bool, simplified: bool) {
    for line in BANNER_TEXT.lines().take(7) {
        println!("{}", line);
    }
    println!(
        "Locale: {} ({}), {} answers loaded.",
        validator.locale().display_name(),
        validator.locale(),
        validator.answers().len()
    );
    println!("Type 'help' for commands.");
    println!();

    let mut session = Session {
        validator,
        expected: None,
        current: None,
        rows: Vec::new(),
        hard_mode,
        simplified,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", BANNER_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "check" | "c" => match parts.get(1) {
                Some(word) => {
                    session.check(word);
                }
                None => println!("Usage: check <word>"),
            },
            "answer" | "a" => match parts.get(1) {
                Some(word) => {
                    let expected = WordModel::new(word, session.validator.locale());
                    if expected.len() != wordle_lexicon::WORD_LENGTH {
                        println!("Word must be {} letters.", wordle_lexicon::WORD_LENGTH);
                        continue;
                    }
                    session.expected = Some(expected);
                    session.current = None;
                    session.rows.clear();
                    println!("Answer set. Start guessing!");
                }
                None => println!("Usage: answer <word>"),
            },
            "guess" | "g" => match parts.get(1) {
                Some(word) => session.guess(word),
                None => println!("Usage: guess <word>"),
            },
            "rows" | "r" => session.print_rows(),
            "hard" | "hardmode" => {
                session.hard_mode = !session.hard_mode;
                if session.hard_mode {
                    println!("Hard mode: ON");
                    println!("Guesses must use all revealed hints.");
                } else {
                    println!("Hard mode: OFF");
                }
            }
            "simple" | "simplified" => {
                session.simplified = !session.simplified;
                println!(
                    "Diacritic-insensitive input: {}",
                    if session.simplified { "ON" } else { "OFF" }
                );
            }
            "reset" => {
                session.current = None;
                session.rows.clear();
                println!("Board cleared.");
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let validator = match load_validator(&cli) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match &cli.command {
        Some(Command::Check { words }) => {
            let session = Session {
                validator,
                expected: None,
                current: None,
                rows: Vec::new(),
                hard_mode: false,
                simplified: cli.simplified,
            };
            let mut all_found = true;
            for word in words {
                all_found &= session.check(word);
            }
            if !all_found {
                std::process::exit(1);
            }
        }
        None => run_interactive(validator, cli.hard, cli.simplified),
    }
}

//! Codex CLI
//!
//! Runs the text toolkit over a file, an inline string or stdin and prints
//! the result to stdout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use codex_common::config::TextConfig;
use codex_common::warning::{clear_warnings, warn_once, warning_count};
use codex_html::{HTMLTokenizer, ParseIssue, Token, TokenSink};
use codex_text::content::{
    extract_image_urls, generate_slug, optimize_html, sanitize_title, seo_summary,
};
use codex_text::{clean_filename, extract_text_with_issues, sanitize, truncate};
use owo_colors::OwoColorize;

/// Codex - HTML sanitization, text extraction and post formatting
#[derive(Parser, Debug)]
#[command(name = "codex")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Strip scripts, styles and event handlers
    codex sanitize post.html

    # Plain text of a page, without script/style contents
    codex extract --no-raw-text page.html

    # Inline input, with tokenizer diagnostics
    codex -v extract --html '<p>Fish &amp chips</p>'

    # Shorten text from stdin
    echo 'a long sentence' | codex truncate --max-length 10

    # SEO metadata as JSON
    codex seo --title 'My Post' --json post.html
"#)]
struct Cli {
    /// JSON config file (defaults are used for anything it omits)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report recoverable HTML parse errors on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where the document comes from.
#[derive(Args, Debug)]
struct Input {
    /// Path to the input file (stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Use this string as the input instead of a file
    #[arg(long, visible_alias = "text", value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,
}

impl Input {
    fn read(&self) -> Result<String> {
        if let Some(ref html) = self.html {
            return Ok(html.clone());
        }
        match self.path {
            Some(ref path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => io::read_to_string(io::stdin()).context("failed to read stdin"),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove script/style blocks, event handlers and javascript: URIs
    Sanitize {
        #[command(flatten)]
        input: Input,
    },
    /// Print the visible text with entities decoded and whitespace collapsed
    Extract {
        #[command(flatten)]
        input: Input,
        /// Drop the contents of script and style elements
        #[arg(long)]
        no_raw_text: bool,
    },
    /// Dump the tokenizer's token stream
    Tokens {
        #[command(flatten)]
        input: Input,
    },
    /// Shorten text at a word boundary
    Truncate {
        #[command(flatten)]
        input: Input,
        /// Maximum length in characters
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,
        /// Appended when the text is cut
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Make a string safe to use as a filename
    CleanFilename {
        /// The name to clean
        name: String,
    },
    /// Normalize a post title
    Title {
        /// The title to normalize
        title: String,
    },
    /// Build a URL slug from a title
    Slug {
        /// The title to slugify
        title: String,
    },
    /// SEO title and excerpt for a post
    Seo {
        #[command(flatten)]
        input: Input,
        /// Post title
        #[arg(long)]
        title: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List absolute image URLs referenced by src attributes
    Images {
        #[command(flatten)]
        input: Input,
    },
    /// Wrap paragraphs, demote h1 headings and fill missing alt text
    Optimize {
        #[command(flatten)]
        input: Input,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    clear_warnings();

    match cli.command {
        Command::Sanitize { input } => println!("{}", sanitize(input.read()?.as_str())),
        Command::Extract { input, no_raw_text } => {
            let mut extract = config.extract.clone();
            if no_raw_text {
                extract.include_raw_text = false;
            }
            let (text, issues) = extract_text_with_issues(input.read()?.as_str(), &extract);
            if cli.verbose {
                report_issues(&issues);
            }
            println!("{text}");
        }
        Command::Tokens { input } => {
            let html = input.read()?;
            println!("{}", "=== Tokens ===".bold());
            let mut tokenizer = HTMLTokenizer::new(&html);
            tokenizer.run(&mut TokenPrinter::default());
            if cli.verbose {
                report_issues(tokenizer.issues());
            }
        }
        Command::Truncate {
            input,
            max_length,
            suffix,
        } => {
            let text = input.read()?;
            let max_length = max_length.unwrap_or(config.truncate.max_length);
            let suffix = suffix.as_deref().unwrap_or(&config.truncate.suffix);
            println!("{}", truncate(text.trim_end_matches('\n'), max_length, suffix));
        }
        Command::CleanFilename { name } => println!("{}", clean_filename(&name)),
        Command::Title { title } => {
            println!("{}", sanitize_title(&title, config.content.title_max_length));
        }
        Command::Slug { title } => {
            println!("{}", generate_slug(&title, config.content.slug_max_length));
        }
        Command::Seo { input, title, json } => {
            let summary = seo_summary(&title, &input.read()?, &config.content);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} {}", "Title:".bold(), summary.seo_title);
                println!("{} {}", "Excerpt:".bold(), summary.excerpt);
            }
        }
        Command::Images { input } => {
            for url in extract_image_urls(&input.read()?) {
                println!("{url}");
            }
        }
        Command::Optimize { input } => {
            let html = input.read()?;
            println!(
                "{}",
                optimize_html(&html, &config.content.image_alt_placeholder)
            );
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<TextConfig> {
    path.map_or_else(
        || Ok(TextConfig::default()),
        |path| {
            TextConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        },
    )
}

fn report_issues(issues: &[ParseIssue]) {
    for issue in issues {
        warn_once(
            "Tokenizer",
            &format!(
                "{} at byte {} ({} state)",
                issue.message, issue.position, issue.state
            ),
        );
    }
    let distinct = warning_count();
    if distinct > 0 {
        eprintln!(
            "{}",
            format!("{} parse issues, {distinct} distinct", issues.len()).dimmed()
        );
    }
}

/// Prints tokens as they arrive, folding runs of characters into one line.
#[derive(Default)]
struct TokenPrinter {
    text: String,
}

impl TokenPrinter {
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            println!("  {} {:?}", "Text".green(), self.text);
            self.text.clear();
        }
    }
}

impl TokenSink for TokenPrinter {
    fn process_token(&mut self, token: Token) {
        if let Token::Character { data } = token {
            self.text.push(data);
            return;
        }
        self.flush_text();
        match token {
            Token::StartTag { .. } | Token::EndTag { .. } => println!("  {}", token.cyan()),
            Token::Comment { .. } | Token::Doctype { .. } => println!("  {}", token.dimmed()),
            Token::EndOfFile | Token::Character { .. } => println!("  {token}"),
        }
    }

    fn end(&mut self) {
        self.flush_text();
    }
}

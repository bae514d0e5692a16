extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate fuzzymatch;
extern crate shlex;

use std::env;
use std::io::{BufRead, BufWriter, Write};

use clap::Parser;
use fuzzymatch::prelude::*;
use rayon::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed, exit silently
            if err.kind() == std::io::ErrorKind::BrokenPipe {
                std::process::exit(0)
            }
            error!("{err}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> MatcherOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("fzm")));
    args.extend(
        env::var("FZM_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    MatcherOptions::parse_from(args)
}

fn real_main() -> Result<i32, std::io::Error> {
    let opts = parse_args();
    let matcher = Matcher::from_options(&opts);

    let stdin = std::io::stdin();
    let lines = read_lines(stdin.lock())?;
    debug!("read {} candidates", lines.len());

    let ranked = rank(&matcher, &lines, &opts.query, opts.pinyin);
    let limit = opts.limit.unwrap_or(usize::MAX);
    let output_ending = if opts.print0 { "\0" } else { "\n" };

    let mut stdout = BufWriter::new(std::io::stdout().lock());
    for (line, score) in ranked.iter().take(limit) {
        if opts.print_score {
            write!(stdout, "{score}\t")?;
        }
        write!(stdout, "{line}{output_ending}")?;
    }
    stdout.flush()?;

    Ok(if ranked.is_empty() { 1 } else { 0 })
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>, std::io::Error> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}

/// Matching candidates, best first. Equal scores keep input order.
fn rank<'a>(matcher: &Matcher, lines: &'a [String], query: &str, pinyin: bool) -> Vec<(&'a str, ScoreType)> {
    let mut ranked: Vec<(&str, ScoreType)> = lines
        .par_iter()
        .filter_map(|line| {
            let outcome = matcher.fuzzy_match(line, query, pinyin);
            outcome.is_match.then_some((line.as_str(), outcome.score))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

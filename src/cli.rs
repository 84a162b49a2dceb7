// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::{ExtractOptions, ScoreRequest, Seat};
use crate::error::{Error, Result};
use crate::scrape::{self, Source};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub source: Option<Source>,
    pub match_id: Option<String>,
    pub player_id: Option<String>,
    pub side: Option<Seat>,
    pub options: ExtractOptions,
    pub pretty: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Params {
    pub fn request(&self) -> ScoreRequest {
        ScoreRequest::new(self.match_id.clone(), self.player_id.clone()).with_side(self.side)
    }
}

pub fn run() -> Result<()> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }
    crate::log::init(params.verbose);

    let source = params.source.clone().ok_or(Error::MissingParam("--url, --tournament or --file"))?;
    let report = scrape::run(&source, &params.request(), &params.options)?;

    let json = if params.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(|e| Error::Parse(e.to_string()))?;
    println!("{json}");
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    fn value(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String> {
        args.next().ok_or(Error::MissingParam(flag))
    }

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => params.source = Some(Source::Url(value(&mut args, "--url")?)),
            "-t" | "--tournament" => {
                params.source = Some(Source::Tournament(value(&mut args, "--tournament")?)); }
            "-f" | "--file" => {
                params.source = Some(Source::File(PathBuf::from(value(&mut args, "--file")?))); }
            "-m" | "--match" => params.match_id = Some(value(&mut args, "--match")?),
            "-p" | "--player" => params.player_id = Some(value(&mut args, "--player")?),
            "-s" | "--side" => params.side = Some(value(&mut args, "--side")?.parse()?),
            "--schema" => params.options.column_schema = value(&mut args, "--schema")?.parse()?,
            "--match-mode" => params.options.match_mode = value(&mut args, "--match-mode")?.parse()?,
            "--history" => params.options.history_format = value(&mut args, "--history")?.parse()?,
            "--flags" => params.options.flag_mode = value(&mut args, "--flags")?.parse()?,
            "--pretty" => params.pretty = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(Error::Config(format!("Unknown arg: {a}"))),
        }
    }

    Ok(params)
}

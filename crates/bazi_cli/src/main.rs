use std::fmt::Display;
use std::path::PathBuf;

use bazi_base::{ALL_ELEMENTS, Element, FourPillars, Pillar, SEXAGENARY_CYCLE};
use bazi_config::BaziConfig;
use bazi_search::{
    BaziChart, JieqiEngine, JieqiEvent, bazi_chart_for_date, current_jieqi, four_pillars_for_date,
    term_instant, year_terms,
};
use bazi_time::CivilTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bazi", about = "Four Pillars (BaZi) charts and solar terms")]
struct Cli {
    /// TOML configuration file ([jieqi] and [balance] tables)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Year, month, day and hour pillars for a timestamp
    Pillars {
        /// Civil timestamp (YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD hh:mm[:ss])
        #[arg(long, value_parser = parse_time)]
        date: CivilTime,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Pillars plus element tally, strength and useful element
    Analyze {
        /// Civil timestamp (YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD hh:mm[:ss])
        #[arg(long, value_parser = parse_time)]
        date: CivilTime,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solar-term instants of a term year
    Jieqi {
        /// Term year (立春 of this year through 大寒 in January of the next)
        #[arg(long)]
        year: i32,
        /// Single term index (0 = 立春 .. 23 = 大寒)
        #[arg(long)]
        index: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Solar term in effect at a timestamp
    CurrentJieqi {
        /// Civil timestamp (YYYY-MM-DDThh:mm[:ss] or YYYY-MM-DD hh:mm[:ss])
        #[arg(long, value_parser = parse_time)]
        date: CivilTime,
    },
    /// List the 60 stem-branch pairs
    Cycle,
}

fn parse_time(s: &str) -> Result<CivilTime, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn exit_with(context: &str, e: impl Display) -> ! {
    eprintln!("{context}: {e}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> BaziConfig {
    tracing::debug!(?path, "loading configuration");
    BaziConfig::load_or_default(path.map(PathBuf::as_path))
        .unwrap_or_else(|e| exit_with("Failed to load config", e))
}

fn build_engine(config: &BaziConfig) -> JieqiEngine {
    config
        .engine()
        .unwrap_or_else(|e| exit_with("Invalid solver config", e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => exit_with("Failed to encode JSON", e),
    }
}

fn pillar_line(label: &str, p: &Pillar) -> String {
    format!(
        "{label:<6} {}  ({}/{}, {} {})",
        p.full(),
        p.stem_element().name(),
        p.branch_element().name(),
        p.stem().pinyin(),
        p.branch().pinyin(),
    )
}

fn print_pillars(fp: &FourPillars) {
    println!("Birth:  {}", fp.birth);
    println!("{}", pillar_line("Year", &fp.year));
    println!("{}", pillar_line("Month", &fp.month));
    println!("{}", pillar_line("Day", &fp.day));
    println!("{}", pillar_line("Hour", &fp.hour));
    println!(
        "Term:   {} ({}), month {}",
        fp.solar_term.name(),
        fp.solar_term.english_name(),
        fp.month_number()
    );
    println!(
        "Day master: {} ({})",
        fp.day_master().glyph(),
        fp.day_master_element().name()
    );
}

fn print_event(e: &JieqiEvent) {
    println!(
        "{:>2}  {}  {:<20} {}  JD {:.6}",
        e.term.index(),
        e.term.name(),
        e.term.english_name(),
        e.time,
        e.jd
    );
}

fn element_list(list: &[Element]) -> String {
    list.iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_chart(chart: &BaziChart) {
    print_pillars(&chart.pillars);
    let b = &chart.balance;

    println!();
    println!("Element tally:");
    for e in ALL_ELEMENTS {
        println!("  {:<6} {}  {}", e.name(), e.glyph(), b.tally.count(e));
    }

    let s = &b.score;
    println!();
    println!(
        "Strength: {} ({}), supportive {:.1} vs draining {:.1}",
        s.strength.as_str(),
        s.strength.label(),
        s.supportive(),
        s.draining()
    );
    println!(
        "  self {:.1}  companion {:.1}  resource {:.1}  output {:.1}  wealth {:.1}  officer {:.1}",
        s.day_master, s.companion, s.resource, s.output, s.wealth, s.officer
    );

    let y = &b.yongshen;
    println!();
    println!("Useful element:      {}", y.useful.name());
    println!("Supportive element:  {}", y.supportive.name());
    println!("Unfavorable:         {}", element_list(&y.unfavorable));
    if !b.missing.is_empty() {
        println!("Missing:             {}", element_list(&b.missing));
    }
    if !b.excessive.is_empty() {
        println!("Excessive:           {}", element_list(&b.excessive));
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pillars { date, json } => {
            let engine = build_engine(&load_config(cli.config.as_ref()));
            let fp = four_pillars_for_date(&engine, &date)
                .unwrap_or_else(|e| exit_with("Pillar assembly failed", e));
            if json {
                print_json(&fp);
            } else {
                print_pillars(&fp);
            }
        }

        Commands::Analyze { date, json } => {
            let config = load_config(cli.config.as_ref());
            let engine = build_engine(&config);
            let chart = bazi_chart_for_date(&engine, &date, &config.balance)
                .unwrap_or_else(|e| exit_with("Analysis failed", e));
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Jieqi { year, index, json } => {
            let engine = build_engine(&load_config(cli.config.as_ref()));
            let events: Vec<JieqiEvent> = match index {
                Some(i) => vec![
                    term_instant(&engine, year, i)
                        .unwrap_or_else(|e| exit_with("Term search failed", e)),
                ],
                None => year_terms(&engine, year)
                    .unwrap_or_else(|e| exit_with("Term search failed", e))
                    .to_vec(),
            };
            if json {
                print_json(&events);
            } else {
                for e in &events {
                    print_event(e);
                }
            }
        }

        Commands::CurrentJieqi { date } => {
            let engine = build_engine(&load_config(cli.config.as_ref()));
            let cur = current_jieqi(&engine, &date)
                .unwrap_or_else(|e| exit_with("Term search failed", e));
            println!(
                "{} ({}), term year {}",
                cur.term.name(),
                cur.term.english_name(),
                cur.start.term_year
            );
            println!("  started {}", cur.start.time);
            println!("  next    {} at {}", cur.next.term.name(), cur.next.time);
        }

        Commands::Cycle => {
            for (i, gz) in SEXAGENARY_CYCLE.iter().enumerate() {
                println!(
                    "{:>2}  {}  {} {}  {}/{}",
                    i,
                    gz,
                    gz.stem.pinyin(),
                    gz.branch.pinyin(),
                    gz.stem.element().name(),
                    gz.branch.element().name()
                );
            }
        }
    }
}

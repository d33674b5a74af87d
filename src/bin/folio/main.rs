use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use folio::build_mode::BuildMode;
use folio::config::Config;
use folio::content::Collection;
use folio::loader::load_collection;
use folio::logger::{configure_logger, use_stderr_logger};
use folio::site_plan::{plan_site, PlanOptions};
use folio::tag_filter::{published, records_for_tag};
use folio::tag_index::{enumerate_tags_with, tag_frequencies};
use folio::text_utils::format_date_time;

use crate::config::{default_config_path, open_config};
use crate::config_data::write_sample_cfg;

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Build mode, overrides FOLIO_ENV and the config file
    #[arg(short, long, global = true, value_enum)]
    mode: Option<BuildMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tags that get a page
    Tags {
        /// Print how many posts use each tag
        #[arg(long)]
        counts: bool,
    },
    /// Print posts newest first
    List {
        /// Only posts matching this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Write the site plan as JSON
    Plan {
        /// Output file, stdout when absent
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write a sample configuration file
    Init {
        /// Where to write it, ./folio.toml when absent
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

struct Build {
    config: Config,
    mode: BuildMode,
    collection: Collection,
}

fn prepare(cli: &Cli) -> Result<Build> {
    let (config_path, config) = open_config(cli.config.clone())?;

    if let Err(err) = configure_logger(config.log.as_ref()) {
        use_stderr_logger();
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }
    info!("Using config {}", config_path.display());

    let mode = BuildMode::resolve(cli.mode, config.build.mode);
    info!("Build mode: {}", mode);

    let collection = load_collection(&config.paths.content_dir, &config.defaults.index_base_name)
        .context("Loading content")?;

    Ok(Build { config, mode, collection })
}

fn print_tags(build: &Build, counts: bool) {
    let records = build.collection.records();
    let scope = build.config.tag_scope(build.mode);

    if counts {
        for tag_count in tag_frequencies(records, scope) {
            println!("{}\t{}", tag_count.tag, tag_count.count);
        }
    } else {
        for tag in enumerate_tags_with(records, scope) {
            println!("{}", tag);
        }
    }
}

fn print_list(build: &Build, tag: Option<&str>) {
    let records = build.collection.records();
    let listed = match tag {
        Some(tag) => records_for_tag(records, &tag.to_lowercase(), build.mode, build.config.defaults.tag_match),
        None => published(records, build.mode),
    };

    for record in listed {
        let (date, _) = format_date_time(&record.published_at);
        let draft = if record.draft { " (draft)" } else { "" };
        println!("{}\t{}\t{}{}", date, record.slug, record.title, draft);
    }
}

fn write_plan(build: &Build, out: Option<&PathBuf>) -> Result<()> {
    let options = PlanOptions {
        mode: build.mode,
        tag_match: build.config.defaults.tag_match,
        tag_scope: build.config.tag_scope(build.mode),
        page_size: build.config.defaults.page_size,
    };
    let json = plan_site(build.collection.records(), &options).to_json()?;

    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Writing plan to {}", path.display()))?;
            info!("Site plan written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn init(out: Option<&PathBuf>) -> Result<()> {
    let path = match out {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    write_sample_cfg(&path)?;
    println!("Sample config written to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Init { out } => init(out.as_ref())?,
        Command::Tags { counts } => print_tags(&prepare(&cli)?, *counts),
        Command::List { tag } => print_list(&prepare(&cli)?, tag.as_deref()),
        Command::Plan { out } => write_plan(&prepare(&cli)?, out.as_ref())?,
    }

    Ok(())
}

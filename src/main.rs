use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::ArgMatches;
use index_merge::{cli, merge_files, MergeConfig, MergeError, MergePaths};

fn path_arg(matches: &ArgMatches, name: &str) -> anyhow::Result<PathBuf>{
    matches.get_one::<String>(name)
        .map(PathBuf::from)
        .with_context(|| format!("missing argument --{}", name))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()>{
    let paths = MergePaths{
        r1_in: path_arg(matches, "input-r1")?,
        r2_in: path_arg(matches, "input-r2")?,
        i1_in: path_arg(matches, "input-i1")?,
        r1_out: path_arg(matches, "output-r1")?,
        r2_out: path_arg(matches, "output-r2")?,
    };
    let seq_tag = matches.get_one::<String>("index-tag").cloned().unwrap_or_else(|| cli::DEFAULT_INDEX_TAG.to_owned());
    let qual_tag = if matches.get_flag("no-index-quality"){
        None
    } else {
        Some(matches.get_one::<String>("quality-tag").cloned().unwrap_or_else(|| cli::DEFAULT_QUALITY_TAG.to_owned()))
    };
    let config = MergeConfig{seq_tag, qual_tag, show_progress: matches.get_flag("progress")};

    log::info!("Running add-index-to-fastq");
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    log::info!("### SETTINGS ###");
    log::info!("R1 input filepath: {}", paths.r1_in.display());
    log::info!("R2 input filepath: {}", paths.r2_in.display());
    log::info!("I1 input filepath: {}", paths.i1_in.display());
    log::info!("R1 output filepath: {}", paths.r1_out.display());
    log::info!("R2 output filepath: {}", paths.r2_out.display());
    log::info!("Index tag: {}", config.seq_tag);
    log::info!("Quality tag: {}", config.qual_tag.as_deref().unwrap_or("(none)"));
    log::info!("Verbose logging: {}", matches.get_flag("verbose"));
    log::info!("################");

    let start_time = Instant::now();
    let summary = match merge_files(&paths, &config){
        Ok(summary) => summary,
        Err(e) => {
            if !matches!(e, MergeError::Config(_)){
                log::warn!("Output files {} and {} may be incomplete and should be discarded",
                           paths.r1_out.display(), paths.r2_out.display());
            }
            return Err(e).context("could not add index reads to the R1/R2 files");
        }
    };

    if summary.records_with_existing_tag > 0{
        log::warn!("{} read pairs already had a {} tag in their header; the new tag was appended after it",
                   summary.records_with_existing_tag, config.seq_tag);
    }
    log::info!("Wrote {} read pairs", summary.records);
    log::info!("add-index-to-fastq: finished after {:.3} seconds.", start_time.elapsed().as_secs_f64());
    Ok(())
}

fn main(){
    let matches = cli::build_cli().get_matches();

    let log_level = if matches.get_flag("verbose"){
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env() // RUST_LOG overrides the level above
        .format_target(false)
        .init();

    if let Err(e) = run(&matches){
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

use clap::{Arg, ArgAction, Command};

pub const DEFAULT_INDEX_TAG: &str = "BC:Z";
pub const DEFAULT_QUALITY_TAG: &str = "QT:Z";

pub fn build_cli() -> Command {
    Command::new("add-index-to-fastq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts TELL-Read pipeline output into a format usable by read cloud assemblers \
                (e.g. cloudSPAdes, Athena): the index (I1) sequence and quality of every read are \
                appended as tags to the header comments of the R1 and R2 FASTQ files. \
                Inputs may be gzipped; outputs ending in .gz are gzipped.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input-r1")
                .short('i')
                .long("input-r1")
                .required(true)
                .value_name("FASTQ")
                .help("Input Read 1 (R1) FastQ file"),
        )
        .arg(
            Arg::new("input-r2")
                .short('j')
                .long("input-r2")
                .required(true)
                .value_name("FASTQ")
                .help("Input Read 2 (R2) FastQ file"),
        )
        .arg(
            Arg::new("input-i1")
                .short('k')
                .long("input-i1")
                .required(true)
                .value_name("FASTQ")
                .help("Input Index (I1) FastQ file"),
        )
        .arg(
            Arg::new("output-r1")
                .short('o')
                .long("output-r1")
                .required(true)
                .value_name("FASTQ")
                .help("Output Read 1 (R1) FastQ file"),
        )
        .arg(
            Arg::new("output-r2")
                .short('p')
                .long("output-r2")
                .required(true)
                .value_name("FASTQ")
                .help("Output Read 2 (R2) FastQ file"),
        )
        .arg(
            Arg::new("index-tag")
                .short('x')
                .long("index-tag")
                .default_value(DEFAULT_INDEX_TAG)
                .help("Tag for the index sequence"),
        )
        .arg(
            Arg::new("quality-tag")
                .short('q')
                .long("quality-tag")
                .default_value(DEFAULT_QUALITY_TAG)
                .help("Tag for the index quality string"),
        )
        .arg(
            Arg::new("no-index-quality")
                .long("no-index-quality")
                .action(ArgAction::SetTrue)
                .help("Append only the index sequence, not its quality string"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress spinner on stderr"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose logging"),
        )
}

use std::fs;
use std::path::{Path, PathBuf};

use fastq_io::reader::DynamicFastqReader;
use fastq_io::writer::{DynamicFastqWriter, SeqRecordWriter};
use fastq_io::record::{Record, SeqRecord};
use indicatif::{ProgressBar, ProgressStyle};

pub mod cli;
pub mod error;
pub mod header;

pub use error::{MergeError, Stream};

pub struct MergeConfig{
    pub seq_tag: String,
    pub qual_tag: Option<String>, // None -> only the index sequence is appended
    pub show_progress: bool,
}

impl Default for MergeConfig{
    fn default() -> Self{
        MergeConfig{
            seq_tag: cli::DEFAULT_INDEX_TAG.to_owned(),
            qual_tag: Some(cli::DEFAULT_QUALITY_TAG.to_owned()),
            show_progress: false,
        }
    }
}

fn check_tag(tag: &str) -> Result<(), MergeError>{
    if tag.is_empty() || tag.bytes().any(|c| c.is_ascii_whitespace()){
        return Err(MergeError::Config(format!("tag '{}' must be non-empty and contain no whitespace", tag)));
    }
    Ok(())
}

impl MergeConfig{
    pub fn validate(&self) -> Result<(), MergeError>{
        check_tag(&self.seq_tag)?;
        if let Some(qual_tag) = &self.qual_tag{
            check_tag(qual_tag)?;
            if qual_tag == &self.seq_tag{
                return Err(MergeError::Config(format!("index and quality tags are both '{}'", qual_tag)));
            }
        }
        Ok(())
    }
}

pub struct MergePaths{
    pub r1_in: PathBuf,
    pub r2_in: PathBuf,
    pub i1_in: PathBuf,
    pub r1_out: PathBuf,
    pub r2_out: PathBuf,
}

// Paths are the same if they are equal as given, or if both exist and
// resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool{
    if a == b{
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)){
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl MergePaths{
    // An output must never overwrite an input or the other output.
    pub fn validate(&self) -> Result<(), MergeError>{
        let inputs = [&self.r1_in, &self.r2_in, &self.i1_in];
        for out in [&self.r1_out, &self.r2_out]{
            if let Some(input) = inputs.iter().find(|input| same_file(input, out)){
                return Err(MergeError::Config(format!(
                    "output file {} is the same as input file {}", out.display(), input.display())));
            }
        }
        if same_file(&self.r1_out, &self.r2_out){
            return Err(MergeError::Config(format!(
                "R1 and R2 outputs are the same file {}", self.r1_out.display())));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeSummary{
    pub records: u64,
    // Triples whose R1 or R2 header already carried the index tag
    pub records_with_existing_tag: u64,
}

pub struct InputStream{
    stream: Stream,
    path: PathBuf,
    reader: DynamicFastqReader,
}

impl InputStream{
    pub fn open(stream: Stream, path: &Path) -> Result<Self, MergeError>{
        let reader = DynamicFastqReader::from_file(path)
            .map_err(|e| MergeError::from_fastq(e, stream, path))?;
        log::debug!("Opened {} {} ({:?})", stream, path.display(), reader.compression());
        Ok(InputStream{stream, path: path.to_path_buf(), reader})
    }

    // The path is only used as a label in error messages.
    pub fn from_reader(stream: Stream, path: impl Into<PathBuf>, reader: DynamicFastqReader) -> Self{
        InputStream{stream, path: path.into(), reader}
    }

    pub fn read_next(&mut self) -> Result<Option<SeqRecord<'_>>, MergeError>{
        let stream = self.stream;
        let path = &self.path;
        self.reader.read_next().map_err(|e| MergeError::from_fastq(e, stream, path))
    }
}

pub struct OutputStream<W: SeqRecordWriter>{
    stream: Stream,
    path: PathBuf,
    writer: W,
}

impl<W: SeqRecordWriter> OutputStream<W>{
    pub fn new(stream: Stream, path: impl Into<PathBuf>, writer: W) -> Self{
        OutputStream{stream, path: path.into(), writer}
    }

    fn write(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> Result<(), MergeError>{
        self.writer.write(head, seq, qual).map_err(|e| MergeError::io(self.stream, &self.path, e))
    }

    pub fn into_writer(self) -> W{
        self.writer
    }
}

impl OutputStream<DynamicFastqWriter>{
    pub fn create(stream: Stream, path: &Path) -> Result<Self, MergeError>{
        let writer = DynamicFastqWriter::new_to_file(path).map_err(|e| MergeError::io(stream, path, e))?;
        log::debug!("Created {} {} ({:?})", stream, path.display(), writer.compression());
        Ok(OutputStream::new(stream, path, writer))
    }

    pub fn finish(self) -> Result<(), MergeError>{
        let OutputStream{stream, path, writer} = self;
        writer.finish().map_err(|e| MergeError::io(stream, &path, e))
    }
}

fn progress_bar(show: bool) -> ProgressBar{
    if !show{
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{elapsed_precise}] {human_pos} read triples ({per_sec})"){
        pb.set_style(style);
    }
    pb
}

fn lossy(bytes: &[u8]) -> String{
    String::from_utf8_lossy(bytes).into_owned()
}

// Reads the three inputs in lock-step and writes the R1 and R2 records with
// the index read appended to their headers. The outputs are not finished here.
pub fn merge_streams<W: SeqRecordWriter>(r1: &mut InputStream, r2: &mut InputStream, i1: &mut InputStream,
                                         out1: &mut OutputStream<W>, out2: &mut OutputStream<W>,
                                         config: &MergeConfig) -> Result<MergeSummary, MergeError>{
    let mut summary = MergeSummary::default();
    let mut head_buf: Vec<u8> = Vec::new();
    let qual_tag = config.qual_tag.as_deref();
    let pb = progress_bar(config.show_progress);

    loop{
        let fwd = r1.read_next()?;
        let rev = r2.read_next()?;
        let idx = i1.read_next()?;

        let (fwd, rev, idx) = match (fwd, rev, idx){
            (Some(fwd), Some(rev), Some(idx)) => (fwd, rev, idx),
            (None, None, None) => break,
            (fwd, rev, idx) => {
                let states = [(Stream::ForwardIn, fwd.is_some()), (Stream::ReverseIn, rev.is_some()), (Stream::IndexIn, idx.is_some())];
                return Err(MergeError::LengthMismatch{
                    records: summary.records,
                    exhausted: states.iter().filter(|(_, more)| !more).map(|(s, _)| *s).collect(),
                    remaining: states.iter().filter(|(_, more)| *more).map(|(s, _)| *s).collect(),
                });
            }
        };

        let id = header::normalize_id(fwd.id());
        if id != header::normalize_id(rev.id()) || id != header::normalize_id(idx.id()){
            return Err(MergeError::IdentifierMismatch{
                record: summary.records,
                forward: lossy(fwd.id()),
                reverse: lossy(rev.id()),
                index: lossy(idx.id()),
            });
        }

        if header::has_tag(fwd.head, &config.seq_tag) || header::has_tag(rev.head, &config.seq_tag){
            summary.records_with_existing_tag += 1;
        }

        header::append_index(fwd.head, idx.seq, idx.qual, &config.seq_tag, qual_tag, &mut head_buf);
        out1.write(&head_buf, fwd.seq, fwd.qual)?;
        header::append_index(rev.head, idx.seq, idx.qual, &config.seq_tag, qual_tag, &mut head_buf);
        out2.write(&head_buf, rev.seq, rev.qual)?;

        summary.records += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(summary)
}

// Opens the files, merges, and finishes the outputs. Inputs are opened
// before the outputs are created so that a missing input leaves no output.
pub fn merge_files(paths: &MergePaths, config: &MergeConfig) -> Result<MergeSummary, MergeError>{
    config.validate()?;
    paths.validate()?;

    let mut r1 = InputStream::open(Stream::ForwardIn, &paths.r1_in)?;
    let mut r2 = InputStream::open(Stream::ReverseIn, &paths.r2_in)?;
    let mut i1 = InputStream::open(Stream::IndexIn, &paths.i1_in)?;

    let mut out1 = OutputStream::create(Stream::ForwardOut, &paths.r1_out)?;
    let mut out2 = OutputStream::create(Stream::ReverseOut, &paths.r2_out)?;

    let summary = merge_streams(&mut r1, &mut r2, &mut i1, &mut out1, &mut out2, config)?;

    out1.finish()?;
    out2.finish()?;
    Ok(summary)
}

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use fastq_io::FastqError;

// The five files a run touches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stream{
    ForwardIn,
    ReverseIn,
    IndexIn,
    ForwardOut,
    ReverseOut,
}

impl fmt::Display for Stream{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        let name = match self{
            Stream::ForwardIn => "R1 input",
            Stream::ReverseIn => "R2 input",
            Stream::IndexIn => "I1 input",
            Stream::ForwardOut => "R1 output",
            Stream::ReverseOut => "R2 output",
        };
        f.write_str(name)
    }
}

fn join(streams: &[Stream]) -> String{
    streams.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ")
}

#[derive(thiserror::Error, Debug)]
pub enum MergeError{
    #[error("input record counts differ: {} ended after {records} records while {} did not", join(.exhausted), join(.remaining))]
    LengthMismatch{
        records: u64,
        exhausted: Vec<Stream>,
        remaining: Vec<Stream>,
    },

    #[error("read identifiers do not match at record {record}: R1 '{forward}', R2 '{reverse}', I1 '{index}'")]
    IdentifierMismatch{
        record: u64,
        forward: String,
        reverse: String,
        index: String,
    },

    #[error("malformed {stream} file {}: record {record} (line {line}): {reason}", .path.display())]
    MalformedRecord{
        stream: Stream,
        path: PathBuf,
        record: u64,
        line: u64,
        reason: String,
    },

    #[error("I/O error on {stream} file {}", .path.display())]
    Io{
        stream: Stream,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{stream} file {} is {format} compressed, only gzip is supported", .path.display())]
    UnsupportedCompression{
        stream: Stream,
        path: PathBuf,
        format: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MergeError{
    pub fn io(stream: Stream, path: &Path, source: io::Error) -> Self{
        MergeError::Io{stream, path: path.to_path_buf(), source}
    }

    // Attaches the file role and path to an error from the record reader.
    pub fn from_fastq(err: FastqError, stream: Stream, path: &Path) -> Self{
        match err{
            FastqError::Io(source) => MergeError::io(stream, path, source),
            FastqError::Malformed{record, line, reason} =>
                MergeError::MalformedRecord{stream, path: path.to_path_buf(), record, line, reason},
            FastqError::UnsupportedCompression(format) =>
                MergeError::UnsupportedCompression{stream, path: path.to_path_buf(), format},
        }
    }
}

use std::io;

pub mod reader;
pub mod writer;
pub mod record;

pub use reader::{DynamicFastqReader, FastqReader};
pub use record::{OwnedSeqRecord, Record, SeqRecord};
pub use writer::{DynamicFastqWriter, FastqWriter, SeqRecordWriter};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Compression{
    None,
    Gzip,
}

#[derive(thiserror::Error, Debug)]
pub enum FastqError{
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("record {record} (line {line}): {reason}")]
    Malformed{
        record: u64,
        line: u64,
        reason: String,
    },

    #[error("{0} compressed input is not supported (only gzip)")]
    UnsupportedCompression(&'static str),
}

// Output compression is chosen by the file name.
pub fn figure_out_compression(filename: &str) -> Compression{
    if filename.ends_with(".gz"){
        Compression::Gzip
    } else {
        Compression::None
    }
}

// Input compression is chosen by the leading magic bytes.
pub fn sniff_compression(head: &[u8]) -> Result<Compression, FastqError>{
    if head.starts_with(&[0x1f, 0x8b]){
        Ok(Compression::Gzip)
    } else if head.starts_with(b"BZh"){
        Err(FastqError::UnsupportedCompression("bzip2"))
    } else if head.starts_with(&[0xfd, b'7', b'z', b'X', b'Z', 0x00]){
        Err(FastqError::UnsupportedCompression("xz"))
    } else if head.starts_with(&[0x28, 0xb5, 0x2f, 0xfd]){
        Err(FastqError::UnsupportedCompression("zstd"))
    } else {
        Ok(Compression::None)
    }
}

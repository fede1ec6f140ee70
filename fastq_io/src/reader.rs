use std::io;
use std::io::{BufRead, BufReader};
use std::fs::File;
use std::path::Path;
use flate2::read::MultiGzDecoder;

use crate::Compression;
use crate::FastqError;
use crate::record::SeqRecord;
use crate::sniff_compression;

// Reads one line into buf without the line terminator. Returns the number of
// bytes consumed from the stream, so 0 means end of stream.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<usize>{
    buf.clear();
    let bytes_read = input.read_until(b'\n', buf)?;
    if buf.last() == Some(&b'\n'){
        buf.pop();
        if buf.last() == Some(&b'\r'){
            buf.pop();
        }
    }
    Ok(bytes_read)
}

pub struct FastqReader<R: BufRead>{
    input: R,
    head_buf: Vec<u8>,
    seq_buf: Vec<u8>,
    plus_buf: Vec<u8>, // For the fastq plus-line
    qual_buf: Vec<u8>,
    records_read: u64,
    lines_read: u64,
}

impl<R: BufRead> FastqReader<R>{

    pub fn new(input: R) -> Self{
        FastqReader{input,
                    head_buf: Vec::new(),
                    seq_buf: Vec::new(),
                    plus_buf: Vec::new(),
                    qual_buf: Vec::new(),
                    records_read: 0,
                    lines_read: 0}
    }

    // Number of complete records returned so far.
    pub fn records_read(&self) -> u64{
        self.records_read
    }

    fn malformed(&self, reason: impl Into<String>) -> FastqError{
        FastqError::Malformed{record: self.records_read, line: self.lines_read, reason: reason.into()}
    }

    pub fn read_next(&mut self) -> Result<Option<SeqRecord<'_>>, FastqError>{
        // Header line. Blank lines are only allowed at the very end of the stream.
        let mut first_blank_line: Option<u64> = None;
        loop{
            if read_line(&mut self.input, &mut self.head_buf)? == 0 {
                return Ok(None); // End of stream
            }
            self.lines_read += 1;
            if !self.head_buf.is_empty(){
                break;
            }
            if first_blank_line.is_none(){
                first_blank_line = Some(self.lines_read);
            }
        }
        if let Some(line) = first_blank_line{
            return Err(FastqError::Malformed{record: self.records_read, line, reason: "unexpected blank line".to_owned()});
        }
        if self.head_buf[0] != b'@'{
            return Err(self.malformed("header line does not start with '@'"));
        }

        if read_line(&mut self.input, &mut self.seq_buf)? == 0 {
            return Err(self.malformed("stream ends before the sequence line"));
        }
        self.lines_read += 1;

        if read_line(&mut self.input, &mut self.plus_buf)? == 0 {
            return Err(self.malformed("stream ends before the '+' line"));
        }
        self.lines_read += 1;
        if self.plus_buf.first() != Some(&b'+'){
            return Err(self.malformed("separator line does not start with '+'"));
        }

        if read_line(&mut self.input, &mut self.qual_buf)? == 0 {
            return Err(self.malformed("stream ends before the quality line"));
        }
        self.lines_read += 1;
        if self.qual_buf.len() != self.seq_buf.len(){
            return Err(self.malformed(format!(
                "quality line has different length than sequence line ({} vs {})",
                self.qual_buf.len(), self.seq_buf.len())));
        }

        self.records_read += 1;
        Ok(Some(SeqRecord{head: &self.head_buf[1..],
                          seq: self.seq_buf.as_slice(),
                          qual: self.qual_buf.as_slice()}))
    }
}

// A reader over a file or stream that may or may not be gzipped. The
// compression is figured out from the first bytes of the data.
pub struct DynamicFastqReader{
    reader: FastqReader<Box<dyn BufRead>>,
    compression: Compression,
}

impl DynamicFastqReader{

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FastqError>{
        let file = File::open(path)?;
        Self::from_stream(file)
    }

    // No need to give a buffered reader. Buffering is handled internally.
    pub fn from_stream<S: io::Read + 'static>(stream: S) -> Result<Self, FastqError>{
        let mut buffered = BufReader::new(stream);
        let compression = sniff_compression(buffered.fill_buf()?)?;
        let input: Box<dyn BufRead> = match compression{
            Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(buffered))),
            Compression::None => Box::new(buffered),
        };
        Ok(DynamicFastqReader{reader: FastqReader::new(input), compression})
    }

    pub fn read_next(&mut self) -> Result<Option<SeqRecord<'_>>, FastqError>{
        self.reader.read_next()
    }

    pub fn records_read(&self) -> u64{
        self.reader.records_read()
    }

    pub fn compression(&self) -> Compression{
        self.compression
    }
}

use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::fs::File;
use std::path::Path;
use flate2::write::GzEncoder;

use crate::Compression;
use crate::record::Record;
use crate::figure_out_compression;

// A raw output stream that may need more than a flush to be complete,
// e.g. a gzip stream needs its trailer.
pub trait FinishStream: Write{
    fn finish_stream(self) -> io::Result<()>;
}

impl FinishStream for File{
    fn finish_stream(mut self) -> io::Result<()>{
        self.flush()
    }
}

impl<W: Write> FinishStream for GzEncoder<W>{
    fn finish_stream(self) -> io::Result<()>{
        let mut inner = self.finish()?;
        inner.flush()
    }
}

impl FinishStream for Vec<u8>{
    fn finish_stream(self) -> io::Result<()>{
        Ok(())
    }
}

pub trait SeqRecordWriter{
    // Takes the parts as slices so that the writer can be boxed.
    fn write(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> io::Result<()>;
    fn finish(self: Box<Self>) -> io::Result<()>;
}

// Non-dynamic writer, i.e. a writer that takes the internal stream as a generic parameter
pub struct FastqWriter<W: Write>{
    output: BufWriter<W>,
}

impl<W: Write> FastqWriter<W>{

    // No need to give a buffered writer. Buffering is handled internally.
    pub fn new(output: W) -> Self{
        Self{output: BufWriter::<W>::new(output)}
    }

    pub fn write_parts(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> io::Result<()>{
        self.output.write_all(b"@")?;
        self.output.write_all(head)?;
        self.output.write_all(b"\n")?;
        self.output.write_all(seq)?;
        self.output.write_all(b"\n+\n")?;
        self.output.write_all(qual)?;
        self.output.write_all(b"\n")
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> io::Result<()>{
        self.write_parts(rec.head(), rec.seq(), rec.qual())
    }

    pub fn flush(&mut self) -> io::Result<()>{
        self.output.flush()
    }

    // Flushes the buffer and gives back the raw stream.
    pub fn into_inner(self) -> io::Result<W>{
        self.output.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: FinishStream> SeqRecordWriter for FastqWriter<W>{
    fn write(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> io::Result<()>{
        self.write_parts(head, seq, qual)
    }

    fn finish(self: Box<Self>) -> io::Result<()>{
        (*self).into_inner()?.finish_stream()
    }
}

// A dynamic writer, i.e. one that takes no generics and uses dyn instead
pub struct DynamicFastqWriter{
    stream: Box<dyn SeqRecordWriter>,
    compression: Compression,
}

impl DynamicFastqWriter{

    pub fn new_to_stream<W: FinishStream + 'static>(stream: W, compression: Compression) -> Self{
        let stream: Box<dyn SeqRecordWriter> = match compression{
            Compression::Gzip => Box::new(FastqWriter::new(GzEncoder::new(stream, flate2::Compression::fast()))),
            Compression::None => Box::new(FastqWriter::new(stream)),
        };
        DynamicFastqWriter{stream, compression}
    }

    // Write to a file. A .gz suffix gives gzipped output.
    pub fn new_to_file<P: AsRef<Path>>(path: P) -> io::Result<Self>{
        let path = path.as_ref();
        let compression = figure_out_compression(&path.to_string_lossy());
        let output = File::create(path)?;
        Ok(Self::new_to_stream(output, compression))
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> io::Result<()>{
        self.stream.write(rec.head(), rec.seq(), rec.qual())
    }

    pub fn write_parts(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> io::Result<()>{
        self.stream.write(head, seq, qual)
    }

    pub fn compression(&self) -> Compression{
        self.compression
    }

    // Must be called to see errors from the final flush. Dropping the writer
    // without finishing still closes the stream.
    pub fn finish(self) -> io::Result<()>{
        self.stream.finish()
    }
}

impl SeqRecordWriter for DynamicFastqWriter{
    fn write(&mut self, head: &[u8], seq: &[u8], qual: &[u8]) -> io::Result<()>{
        self.stream.write(head, seq, qual)
    }

    fn finish(self: Box<Self>) -> io::Result<()>{
        self.stream.finish()
    }
}

use fastq_io::reader::{DynamicFastqReader, FastqReader};
use fastq_io::writer::{DynamicFastqWriter, FastqWriter};
use fastq_io::record::{OwnedSeqRecord, Record};
use fastq_io::Compression;
use std::io::{BufReader, Read};
use std::fs::File;
use flate2::read::GzDecoder;

fn headers() -> Vec<&'static str>{
    vec!(
        "SRR403017.1 HWUSI-EAS108E_0007:3:1:3797:973/1",
        "SRR403017.2 HWUSI-EAS108E_0007:3:1:10327:976/1",
        "SRR403017.3 HWUSI-EAS108E_0007:3:1:13569:972/1")
}

fn seqs() -> Vec<&'static str>{
    vec!(
        "TTGGACCGGCGCAAGACGGACCAGNGCGAAAGCATTTGCCAAGAANNNN",
        "CAACTTTCTATCTGGCATTCCCTGNGGAGGAAATAGAATGCGCGCNNNN",
        "GATCGGAAGAGCACACGTCTGAACNCCAGTCACTTAGGCATCTCGNNNN",
    )
}

fn quals() -> Vec<&'static str>{
    vec!(
        "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQ",
        "RSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~####",
        "@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@@"
    )
}

fn fastq_data() -> String{
    let mut fastq_data = String::new();
    for i in 0..headers().len(){
        fastq_data.push_str(format!("@{}\n", headers()[i]).as_str());
        fastq_data.push_str(format!("{}\n", seqs()[i]).as_str());
        fastq_data.push_str("+\n");
        fastq_data.push_str(format!("{}\n", quals()[i]).as_str());
    }
    fastq_data
}

#[test]
fn fastq() {
    let fastq_data = fastq_data();
    let input = BufReader::new(fastq_data.as_bytes());
    let mut reader = FastqReader::new(input);

    let mut owned_records: Vec<OwnedSeqRecord> = vec![];
    let mut seqs_read = 0;
    while let Some(record) = reader.read_next().unwrap(){
        assert_eq!(record.head, headers()[seqs_read].as_bytes());
        assert_eq!(record.seq, seqs()[seqs_read].as_bytes());
        assert_eq!(record.qual, quals()[seqs_read].as_bytes());
        owned_records.push(record.to_owned());
        seqs_read += 1;
    }
    assert_eq!(seqs_read, headers().len());
    assert_eq!(owned_records[1].id(), b"SRR403017.2");

    // Writing the records back must reproduce the input byte for byte,
    // since the input already uses a bare '+' separator line.
    let mut writer = FastqWriter::<Vec<u8>>::new(vec![]);
    for rec in owned_records.iter() {
        writer.write(rec).unwrap();
    }
    let written_data = writer.into_inner().unwrap();
    assert_eq!(written_data, fastq_data.as_bytes());
}

#[test]
fn plus_line_text_is_dropped_on_write() {
    let mut reader = FastqReader::new("@r1 x\nAC\n+r1 x\nII\n".as_bytes());
    let rec = reader.read_next().unwrap().unwrap().to_owned();

    let mut writer = FastqWriter::new(Vec::<u8>::new());
    writer.write(&rec).unwrap();
    assert_eq!(writer.into_inner().unwrap(), b"@r1 x\nAC\n+\nII\n");
}

#[test]
fn gzip_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("reads.fastq.gz");

    let data = fastq_data();
    let mut reader = FastqReader::new(data.as_bytes());
    let mut writer = DynamicFastqWriter::new_to_file(&gz_path).unwrap();
    assert_eq!(writer.compression(), Compression::Gzip);
    while let Some(rec) = reader.read_next().unwrap(){
        writer.write(&rec).unwrap();
    }
    writer.finish().unwrap();

    // The file really is gzip
    let mut decompressed = String::new();
    GzDecoder::new(File::open(&gz_path).unwrap()).read_to_string(&mut decompressed).unwrap();
    assert_eq!(decompressed, fastq_data());

    // And is detected as such without looking at the file name
    let renamed = dir.path().join("reads.fastq");
    std::fs::rename(&gz_path, &renamed).unwrap();
    let mut reader = DynamicFastqReader::from_file(&renamed).unwrap();
    assert_eq!(reader.compression(), Compression::Gzip);
    let mut n = 0;
    while let Some(rec) = reader.read_next().unwrap(){
        assert_eq!(rec.seq, seqs()[n].as_bytes());
        n += 1;
    }
    assert_eq!(n, 3);
    assert_eq!(reader.records_read(), 3);
}

#[test]
fn plain_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reads.fq");

    let mut writer = DynamicFastqWriter::new_to_file(&path).unwrap();
    assert_eq!(writer.compression(), Compression::None);
    writer.write_parts(b"r1", b"ACGT", b"IIII").unwrap();
    writer.finish().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"@r1\nACGT\n+\nIIII\n");
}

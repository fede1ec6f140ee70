use std::fmt;

pub trait Record{
    fn head(&self) -> &[u8];
    fn seq(&self) -> &[u8];
    fn qual(&self) -> &[u8];

    // Read name: the header up to the first space or tab.
    fn id(&self) -> &[u8]{
        let head = self.head();
        match head.iter().position(|&c| c == b' ' || c == b'\t'){
            Some(i) => &head[..i],
            None => head,
        }
    }

    // Everything after the first space or tab, if anything.
    fn comment(&self) -> Option<&[u8]>{
        let head = self.head();
        head.iter()
            .position(|&c| c == b' ' || c == b'\t')
            .map(|i| &head[i + 1..])
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SeqRecord<'a>{
    pub head: &'a [u8],
    pub seq: &'a [u8],
    pub qual: &'a [u8],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedSeqRecord{
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl<'a> Record for SeqRecord<'a>{
    fn head(&self) -> &[u8]{self.head}
    fn seq(&self) -> &[u8]{self.seq}
    fn qual(&self) -> &[u8]{self.qual}
}

impl Record for OwnedSeqRecord{
    fn head(&self) -> &[u8]{self.head.as_slice()}
    fn seq(&self) -> &[u8]{self.seq.as_slice()}
    fn qual(&self) -> &[u8]{self.qual.as_slice()}
}

impl<'a> SeqRecord<'a>{
    pub fn to_owned(&self) -> OwnedSeqRecord{
        OwnedSeqRecord{
            head: self.head.to_vec(),
            seq: self.seq.to_vec(),
            qual: self.qual.to_vec(),
        }
    }
}

impl<'a> fmt::Display for SeqRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "@{}\n{}\n+\n{}",
               String::from_utf8_lossy(self.head),
               String::from_utf8_lossy(self.seq),
               String::from_utf8_lossy(self.qual),
        )
    }
}

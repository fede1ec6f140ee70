// Header line handling: read name normalization and index tag appending.
//
// A merged header has the form
//   <original header> SP <seq_tag>:<index sequence> SP <qual_tag>:<index quality>
// e.g. "A00123:8:H7:1:1101:1000:1000 1:N:0 BC:Z:ACGTACGT QT:Z:FFFFF:FF".
// The original header is never modified, only extended.

fn is_space(c: &u8) -> bool{
    *c == b' ' || *c == b'\t'
}

// Strips a single trailing mate suffix such as "/1" or "/2".
pub fn normalize_id(id: &[u8]) -> &[u8]{
    if let Some(slash) = id.iter().rposition(|&c| c == b'/'){
        let suffix = &id[slash + 1..];
        if !suffix.is_empty() && suffix.iter().all(u8::is_ascii_digit){
            return &id[..slash];
        }
    }
    id
}

// True if some comment field of the header already starts with "<tag>:".
pub fn has_tag(head: &[u8], tag: &str) -> bool{
    let tag = tag.as_bytes();
    head.split(is_space)
        .skip(1) // Read name
        .any(|field| field.len() > tag.len() && field.starts_with(tag) && field[tag.len()] == b':')
}

pub fn append_index(head: &[u8], index_seq: &[u8], index_qual: &[u8],
                    seq_tag: &str, qual_tag: Option<&str>, out: &mut Vec<u8>){
    out.clear();
    out.extend_from_slice(head);
    out.push(b' ');
    out.extend_from_slice(seq_tag.as_bytes());
    out.push(b':');
    out.extend_from_slice(index_seq);
    if let Some(qual_tag) = qual_tag{
        out.push(b' ');
        out.extend_from_slice(qual_tag.as_bytes());
        out.push(b':');
        out.extend_from_slice(index_qual);
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn test_normalize_id(){
        assert_eq!(normalize_id(b"SRR403017.1/1"), b"SRR403017.1");
        assert_eq!(normalize_id(b"SRR403017.1/2"), b"SRR403017.1");
        assert_eq!(normalize_id(b"SRR403017.1/3"), b"SRR403017.1");
        assert_eq!(normalize_id(b"A00123:8:H7:1:1101:1000:1000"), b"A00123:8:H7:1:1101:1000:1000");
        assert_eq!(normalize_id(b"read/"), b"read/");
        assert_eq!(normalize_id(b"read/a1"), b"read/a1");
        // Only one suffix is stripped
        assert_eq!(normalize_id(b"read/1/2"), b"read/1");
    }

    #[test]
    fn test_append_index(){
        let mut out = Vec::new();
        append_index(b"read1 1:N:0:1", b"ACGT", b"FF:F", "BC:Z", Some("QT:Z"), &mut out);
        assert_eq!(out, b"read1 1:N:0:1 BC:Z:ACGT QT:Z:FF:F");

        // Buffer is reused
        append_index(b"read2", b"TTTT", b"####", "BC:Z", None, &mut out);
        assert_eq!(out, b"read2 BC:Z:TTTT");
    }

    #[test]
    fn test_append_index_empty_index_read(){
        let mut out = Vec::new();
        append_index(b"read1", b"", b"", "BC:Z", Some("QT:Z"), &mut out);
        assert_eq!(out, b"read1 BC:Z: QT:Z:");
    }

    #[test]
    fn test_has_tag(){
        assert!(has_tag(b"read1 BC:Z:ACGT", "BC:Z"));
        assert!(has_tag(b"read1\t1:N:0\tBC:Z:ACGT", "BC:Z"));
        assert!(!has_tag(b"BC:Z:ACGT", "BC:Z")); // The read name is not a comment field
        assert!(!has_tag(b"read1 BC:ZZ:ACGT", "BC:Z"));
        assert!(!has_tag(b"read1 1:N:0:ACGT+TTGA", "BC:Z"));
    }
}

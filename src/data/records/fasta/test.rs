use super::*;
use std::io::Cursor;

#[test]
fn sequence_whitespace() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\nATG C   \n>seq2\r\n\n  AC G\r\n T"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1");
    assert_eq!(record1.sequence, b"ATGC");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "seq2");
    assert_eq!(record2.sequence, b"ACGT");

    assert!(reader.next().is_none());
}

#[test]
fn id_and_description() {
    let mut reader = FastaReader::new(Cursor::new(">gene_17 putative kinase  \nATGAAATAA\n"));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.id(), "gene_17");
    assert_eq!(record.annotation(), Some("putative kinase"));
    assert_eq!(record.description(), "gene_17 putative kinase");
}

#[test]
fn empty_file() {
    let mut reader = FastaReader::new(Cursor::new(""));
    assert!(reader.next().is_none());
}

#[test]
fn whitespace_only() {
    let mut reader = FastaReader::new(Cursor::new("   \r\n \r\t\n   \t"));
    assert!(reader.next().is_none());
}

#[test]
fn leading_blank_lines() {
    let mut reader = FastaReader::new(Cursor::new("\n\r\n>seq1\nATG\n"));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.name, "seq1");
    assert_eq!(record.sequence, b"ATG");
    assert!(reader.next().is_none());
}

#[test]
fn missing_header() {
    let mut reader = FastaReader::new(Cursor::new("ATGC"));

    let err = reader.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(err.to_string(), "The FASTA file must start with a '>' symbol!");

    // Ensure iterator terminates
    assert!(reader.next().is_none());
}

#[test]
fn empty_header_first_record() {
    let mut reader = FastaReader::new(Cursor::new(">\nATGC"));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.name, "");
    assert_eq!(record.id(), "");
    assert_eq!(record.sequence, b"ATGC");
    assert!(reader.next().is_none());
}

#[test]
fn empty_header_second_record() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\r\nGADGSDHS\r\n\r\nFDSHJF\n>  \r\nGATY"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1");
    assert_eq!(record1.sequence, b"GADGSDHSFDSHJF");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "");
    assert_eq!(record2.sequence, b"GATY");
    assert!(reader.next().is_none());
}

#[test]
fn leading_space_in_header() {
    let mut reader = FastaReader::new(Cursor::new("> gene1 kinase\nATGAAATAA\n>\tgene2\nATG\n"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, " gene1 kinase");
    assert_eq!(record1.id(), "gene1");
    assert_eq!(record1.annotation(), Some("kinase"));

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.id(), "gene2");
    assert_eq!(record2.annotation(), None);
}

#[test]
fn empty_sequences_are_records() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\n>seq2\nGCAT\n>seq3\n"));

    let names_and_lengths = reader
        .by_ref()
        .map(|r| r.map(|r| (r.name, r.sequence.len())))
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();

    assert_eq!(
        names_and_lengths,
        vec![("seq1".to_string(), 0), ("seq2".to_string(), 4), ("seq3".to_string(), 0)]
    );
    assert!(reader.next().is_none());
}

#[test]
fn inner_angle_bracket_in_header() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\r\nGADGSDHS\n>seq2 a>b\nGAT"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "seq2 a>b");
    assert_eq!(record2.id(), "seq2");
    assert_eq!(record2.sequence, b"GAT");
    assert!(reader.next().is_none());
}

#[test]
fn inner_angle_bracket_in_sequence() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\r\nGADGSDHS\n>seq2\nGAT>CAT\n TT>\n"));

    let Some(Ok(FastaSeq { name, sequence })) = reader.next() else {
        panic!("The first record should process without error.");
    };
    assert_eq!(name, "seq1");
    assert_eq!(sequence, b"GADGSDHS");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "seq2");
    assert_eq!(record2.sequence, b"GAT>CATTT>");
    assert!(reader.next().is_none());
}

#[test]
fn invalid_utf8_header_is_replaced() {
    let mut reader = FastaReader::new(Cursor::new(b">seq\xFF1\nATG\n".to_vec()));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.name, "seq\u{FFFD}1");
    assert_eq!(record.sequence, b"ATG");
}

#[test]
fn limit_stops_at_header() {
    let reader = FastaReader::new(Cursor::new(">seq1\nATG\n>seq2\nATG\n>seq3\nATG\n"));

    let records = RecordLimit::new(1)
        .apply(reader)
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "seq1");
}

#[test]
fn record_limit_from_signed() {
    assert_eq!(RecordLimit::from(-1), RecordLimit::UNLIMITED);
    assert_eq!(RecordLimit::from(i64::MIN), RecordLimit::UNLIMITED);
    assert_eq!(RecordLimit::from(0), RecordLimit::new(0));
    assert_eq!(RecordLimit::from(3).get(), Some(3));
    assert_eq!(RecordLimit::default(), RecordLimit::UNLIMITED);
}

#[test]
fn record_limit_truncates() {
    let data = ">s1\nA\n>s2\nC\n>s3\nG\n>s4\nT\n>s5\nA\n";

    let limited = RecordLimit::from(3).apply(FastaReader::new(Cursor::new(data))).count();
    assert_eq!(limited, 3);

    let zero = RecordLimit::from(0).apply(FastaReader::new(Cursor::new(data))).count();
    assert_eq!(zero, 0);

    let unlimited = RecordLimit::from(-1).apply(FastaReader::new(Cursor::new(data))).count();
    assert_eq!(unlimited, 5);
}

#[test]
fn writer_wraps_lines() {
    let mut writer = FastaWriter::new(Vec::new()).with_line_width(4);
    writer
        .write_record(&FastaSeq::new("s1", "first", b"ATGAAATAA".to_vec()))
        .unwrap();
    writer.write_record(&FastaSeq::new("s2", "", b"ATGC".to_vec())).unwrap();
    assert_eq!(writer.count(), 2);

    let out = writer.into_inner().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ">s1 first\nATGA\nAATA\nA\n>s2\nATGC\n");
}

#[test]
fn writer_unwrapped_and_empty() {
    let mut writer = FastaWriter::new(Vec::new()).with_line_width(0);
    let records = [
        FastaSeq::new("s1", "", b"ATGAAATAA".to_vec()),
        FastaSeq::new("s2", "empty", Vec::new()),
    ];
    assert_eq!(writer.write_all(&records).unwrap(), 2);

    let out = writer.into_inner().unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ">s1\nATGAAATAA\n>s2 empty\n");
}

#[test]
fn written_records_read_back() {
    let records = vec![
        FastaSeq::new("a", "one", b"ATGAAACCCGGGTTTTAA".to_vec()),
        FastaSeq::new("b", "", Vec::new()),
        FastaSeq::new("c", "three", b"TTGTGA".to_vec()),
    ];

    let mut writer = FastaWriter::new(Vec::new()).with_line_width(5);
    writer.write_all(&records).unwrap();
    let out = writer.into_inner().unwrap();

    let read_back = FastaReader::new(Cursor::new(out))
        .collect::<std::io::Result<Vec<_>>>()
        .unwrap();
    assert_eq!(read_back, records);
}

#[test]
fn display() {
    let record = FastaSeq::new("s1", "desc", b"ATG".to_vec());
    assert_eq!(record.to_string(), ">s1 desc\nATG\n");
}

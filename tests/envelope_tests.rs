// tests/envelope_tests.rs
use isf_rs::*;

fn isf_buffer(header: &str, payload: &[u8]) -> Vec<u8> {
    let len = payload.len().to_string();
    let mut buffer = format!("{}:CURVE #{}{}", header, len.len(), len).into_bytes();
    buffer.extend_from_slice(payload);
    buffer
}

fn header(pt_fmt: &str, nr_pt: usize, ymult: f64) -> String {
    format!(
        ":WFMPRE:BYT_NR 1;BN_FMT RI;BYT_OR LSB;NR_PT {};PT_FMT {};PT_OFF 0;\
         XINCR 1.0;XZERO 0.0;YOFF 0.0;YMULT {:E};YZERO 0.0;",
        nr_pt, pt_fmt, ymult
    )
}

#[test]
fn test_envelope_returns_second_block() {
    let mut buffer = isf_buffer(&header("ENV", 2, 100.0), &[50, 60]);
    buffer.extend(isf_buffer(&header("Y", 4, 0.5), &[2, 4, 6, 8]));

    let (samples, header) = parse_with_header(&buffer).unwrap();
    assert_eq!(header.text(HeaderField::PointFormat), Some("Y"));
    assert_eq!(header.integer(HeaderField::NumPoints).unwrap(), 4);
    assert_eq!(samples.ys(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_envelope_split_returns_nested_payload() {
    let mut buffer = isf_buffer(&header("ENV", 2, 1.0), &[50, 60]);
    buffer.extend(isf_buffer(&header("Y", 3, 1.0), &[1, 2, 3]));

    let (header, payload) = split_header_and_payload(buffer).unwrap();
    assert_eq!(header.integer(HeaderField::NumPoints).unwrap(), 3);
    assert_eq!(&payload[..], &[1, 2, 3]);
}

#[test]
fn test_envelope_outer_payload_may_contain_anything() {
    // The outer payload is skipped by length, never scanned
    let mut buffer = isf_buffer(&header("ENV", 7, 1.0), b":CURV #");
    buffer.extend(isf_buffer(&header("Y", 1, 1.0), &[9]));

    let samples = parse(&buffer).unwrap();
    assert_eq!(samples.ys(), vec![9.0]);
}

#[test]
fn test_envelope_without_nested_block() {
    let buffer = isf_buffer(&header("ENV", 2, 1.0), &[50, 60]);

    let err = parse(&buffer).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFile);
    match err {
        IsfError::IncompleteEnvelope(cause) => {
            assert!(matches!(*cause, IsfError::HeaderSeparatorNotFound));
        }
        other => panic!("Expected IncompleteEnvelope, got {:?}", other),
    }
}

#[test]
fn test_envelope_with_truncated_nested_block() {
    let mut buffer = isf_buffer(&header("ENV", 2, 1.0), &[50, 60]);
    buffer.extend_from_slice(header("Y", 4, 1.0).as_bytes());
    buffer.extend_from_slice(b":CURVE #14\x01\x02");

    let err = parse(&buffer).unwrap_err();
    match err {
        IsfError::IncompleteEnvelope(cause) => {
            assert!(matches!(*cause, IsfError::TruncatedPayload { declared: 4, available: 2 }));
        }
        other => panic!("Expected IncompleteEnvelope, got {:?}", other),
    }
}

#[test]
fn test_doubly_nested_envelope_is_rejected() {
    let mut buffer = isf_buffer(&header("ENV", 1, 1.0), &[1]);
    buffer.extend(isf_buffer(&header("ENV", 1, 1.0), &[2]));
    buffer.extend(isf_buffer(&header("Y", 1, 1.0), &[3]));

    let err = parse(&buffer).unwrap_err();
    assert!(matches!(err, IsfError::NestingTooDeep { max_depth: 1 }));

    let options = ParseOptions::new().with_max_env_depth(2);
    let waveform = parse_with_options(&buffer, &options).unwrap();
    assert_eq!(waveform.samples.ys(), vec![3.0]);
}

#[test]
fn test_depth_zero_rejects_envelope() {
    let mut buffer = isf_buffer(&header("ENV", 1, 1.0), &[1]);
    buffer.extend(isf_buffer(&header("Y", 1, 1.0), &[2]));

    let options = ParseOptions::new().with_max_env_depth(0);
    let err = parse_with_options(&buffer, &options).unwrap_err();
    assert!(matches!(err, IsfError::NestingTooDeep { max_depth: 0 }));
}

#[test]
fn test_nested_coercion_error_is_not_wrapped() {
    let mut buffer = isf_buffer(&header("ENV", 1, 1.0), &[1]);
    buffer.extend(isf_buffer(":WFMPRE:NR_PT lots;", &[2]));

    let err = parse(&buffer).unwrap_err();
    assert!(matches!(err, IsfError::Coercion { field: HeaderField::NumPoints, .. }));
}

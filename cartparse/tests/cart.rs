use cartparse::{
    parse_cart_file, CartParser, ErrorKind, ParseError, ParseResult, ReadError, RecordParser,
    SequenceIds,
};
use std::io::Write;
use std::path::PathBuf;

const SAMPLE_IDS: [&str; 5] = [
    "3e6def17-5e87-4f27-b6b8-ae78948523a9",
    "90cd22aa-8bcf-4510-a18d-ec14656d1f6a",
    "33c14844-8cae-4acd-91ed-6209a6c0bc31",
    "f089a251-a563-46ef-b27b-5c9f6dd0afd3",
    "0d1cbe5e-3de6-4f6a-9c53-bab32c168fbf",
];

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples").join(name)
}

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn sample_cart_matches_expected_json() {
    let parser = CartParser::new().with_line_parser(RecordParser::new(SequenceIds::new(SAMPLE_IDS)));

    let received = parser.parse(sample("cart.csv")).unwrap();
    let expected: ParseResult =
        serde_json::from_str(&std::fs::read_to_string(sample("cart.json")).unwrap()).unwrap();

    assert_eq!(received.items, expected.items);
    assert!((received.total - expected.total).abs() < 1e-9);
}

#[test]
fn single_row_file() {
    let file = write_csv("Product name,Price,Quantity\nMollis consequat,9.00,2");

    let result = parse_cart_file(file.path()).unwrap();

    assert_eq!(result.items.len(), 1);
    let item = &result.items[0];
    assert_eq!(item.name, "Mollis consequat");
    assert_eq!(item.price, 9.0);
    assert_eq!(item.quantity, 2.0);
    assert!(!item.id.is_empty());
    assert_eq!(result.total, 18.0);
}

#[test]
fn misnamed_header_fails_validation() {
    let file = write_csv("Product title,Price,Quantity\nMollis consequat,9.00,2");

    let err = parse_cart_file(file.path()).unwrap_err();

    assert_eq!(err.to_string(), "Validation failed!");
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::Header);
    assert_eq!(errors[0].row, 0);
    assert_eq!(errors[0].column, 0);
}

#[test]
fn every_problem_is_reported() {
    let file = write_csv("Product name,Price,Quantity\r\n ,9.00,2\r\nMollis consequat,9.00\r\nTvoluptatem,-1,2\r\n");

    let err = parse_cart_file(file.path()).unwrap_err();

    let summary: Vec<(ErrorKind, usize, i64)> = err
        .validation_errors()
        .iter()
        .map(|e| (e.kind, e.row, e.column))
        .collect();
    assert_eq!(
        summary,
        vec![(ErrorKind::Cell, 1, 0), (ErrorKind::Row, 2, -1), (ErrorKind::Cell, 3, 1)]
    );
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = parse_cart_file(dir.path().join("nope.csv")).unwrap_err();

    assert!(matches!(err, ParseError::Read(ReadError::Io { .. })));
}

#[test]
fn json_output_shape() {
    let file = write_csv("Product name,Price,Quantity\nMollis consequat,9.00,2\n");
    let parser = CartParser::new().with_line_parser(RecordParser::new(SequenceIds::new(["1"])));

    let result = parser.parse(file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&cartparse::result_to_json(&result).unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "items": [{ "id": "1", "name": "Mollis consequat", "price": 9.0, "quantity": 2 }],
            "total": 18.0
        })
    );
}

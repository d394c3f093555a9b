use song_catalog::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use song_catalog::types::Song;

#[test]
fn ingest_csv_from_path_happy_path() {
    let songs = ingest_csv_from_path("tests/fixtures/songs.csv").unwrap();

    assert_eq!(songs.len(), 3);
    assert_eq!(
        songs[0],
        Song::new("Morning Dew", "Saib", "Around the World", 165)
    );
    assert_eq!(songs[2].runtime_in_seconds, 305);
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let input = "artist,title,runtime_in_seconds,album\nSaib,Morning Dew,165,Around the World\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let songs = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(
        songs,
        vec![Song::new("Morning Dew", "Saib", "Around the World", 165)]
    );
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let input = "title,artist,album\nMorning Dew,Saib,Around the World\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'runtime_in_seconds'"));
}

#[test]
fn ingest_csv_errors_on_unparseable_runtime() {
    let input = "title,artist,album,runtime_in_seconds\nMorning Dew,Saib,Around the World,not_a_number\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("row 2"));
    assert!(msg.contains("column 'runtime_in_seconds'"));
}

#[test]
fn ingest_csv_rejects_negative_runtime() {
    let input = "title,artist,album,runtime_in_seconds\nMorning Dew,Saib,Around the World,-30\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    assert!(err.to_string().contains("failed to parse value"));
}

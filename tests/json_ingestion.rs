use song_catalog::ingestion::json::{ingest_json_from_path, ingest_json_from_str};
use song_catalog::types::Song;

#[test]
fn ingest_json_array_from_path_happy_path() {
    let songs = ingest_json_from_path("tests/fixtures/songs.json").unwrap();

    assert_eq!(songs.len(), 3);
    assert_eq!(
        songs[0],
        Song::new("Morning Dew", "Saib", "Around the World", 165)
    );
    assert_eq!(songs[2].artist, "Evelyn Hart");
}

#[test]
fn ingest_json_ndjson_happy_path() {
    let input = r#"
{"title":"Morning Dew","artist":"Saib","album":"Around the World","runtime_in_seconds":165}
{"title":"Pathways","artist":"Saib","album":"Around the World","runtime_in_seconds":210}
"#;
    let songs = ingest_json_from_str(input).unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[1].title, "Pathways");
}

#[test]
fn ingest_json_single_object_is_one_song() {
    let input = r#"{"title":"Morning Dew","artist":"Saib","album":"Around the World","runtime_in_seconds":165}"#;
    let songs = ingest_json_from_str(input).unwrap();
    assert_eq!(songs.len(), 1);
}

#[test]
fn ingest_json_errors_on_missing_field() {
    let input = r#"[{"title":"Morning Dew","artist":"Saib","album":"Around the World"}]"#;
    let err = ingest_json_from_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required field 'runtime_in_seconds'"));
}

#[test]
fn ingest_json_errors_on_type_mismatch() {
    let input = r#"[{"title":"Morning Dew","artist":"Saib","album":"Around the World","runtime_in_seconds":"nope"}]"#;
    let err = ingest_json_from_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'runtime_in_seconds'"));
}

#[test]
fn ingest_json_rejects_negative_runtime() {
    let input = r#"[{"title":"Morning Dew","artist":"Saib","album":"Around the World","runtime_in_seconds":-30}]"#;
    let err = ingest_json_from_str(input).unwrap_err();
    assert!(err.to_string().contains("failed to parse value"));
}

#[test]
fn ingest_json_rejects_non_object_rows() {
    let err = ingest_json_from_str(r#"[1, 2, 3]"#).unwrap_err();
    assert!(err.to_string().contains("is not a json object"));
}

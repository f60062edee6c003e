//! Reading and writing manual files.
//!
//! Manuals are stored as UTF-8 JSON. Writes use two-space indentation with a trailing newline.

use std::{fs, path::Path};

use crate::{Document, DocumentError};

/// Reads and parses the manual at `path`.
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&contents, path)
}

/// Parses a manual from a JSON string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_document(contents: &str, path: &Path) -> Result<Document, DocumentError> {
    serde_json::from_str(contents).map_err(|source| DocumentError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes a manual to pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String, DocumentError> {
    let mut json = serde_json::to_string_pretty(document).map_err(DocumentError::SerializeJson)?;
    json.push('\n');
    Ok(json)
}

/// Writes a manual to `path`, replacing any existing file.
pub fn save_document(path: &Path, document: &Document) -> Result<(), DocumentError> {
    let json = to_json(document)?;
    fs::write(path, json).map_err(|source| DocumentError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"{
        "id": "git",
        "name": "Git",
        "description": "Version control",
        "theme": {"primary": "#4CAF50", "accent": "#2196F3"},
        "categories": [
            {"id": "basics", "name": "Basics", "entries": [
                {"id": "status", "name": "git status", "description": "Show the working tree status"}
            ]}
        ]
    }"##;

    #[test]
    fn parses_minimal_manual() {
        let doc = parse_document(MINIMAL, Path::new("git.json")).unwrap();
        assert_eq!(doc.id, "git");
        assert_eq!(doc.categories[0].entries[0].name, "git status");
        assert_eq!(doc.theme.unwrap().accent.as_deref(), Some("#2196F3"));
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let err = parse_document(r#"{"id": "x", "name": "X"}"#, Path::new("x.json")).unwrap_err();
        assert!(matches!(err, DocumentError::ParseJson { .. }));
        assert!(err.to_string().contains("x.json"));
    }

    #[test]
    fn example_of_wrong_shape_is_rejected() {
        let json = r#"{"id": "x", "name": "X", "description": "", "categories": [
            {"id": "c", "name": "C", "entries": [
                {"id": "e", "name": "E", "description": "", "examples": [42]}
            ]}
        ]}"#;
        assert!(parse_document(json, Path::new("x.json")).is_err());
    }

    #[test]
    fn save_then_load_preserves_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("git.json");
        let doc = parse_document(MINIMAL, &path).unwrap();

        save_document(&path, &doc).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("}\n"));
        assert!(contents.contains("\n  \"id\": \"git\""));

        assert_eq!(load_document(&path).unwrap(), doc);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_document(Path::new("/nonexistent/manual.json")).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
    }
}

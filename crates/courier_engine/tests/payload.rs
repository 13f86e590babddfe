use courier_engine::{load_file, SubmissionDraft, SubmissionRequest, SubmitFailureKind};

#[test]
fn load_file_captures_bytes_name_and_mime() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("abstract.txt");
    std::fs::write(&path, b"tide tables for berth 3").expect("write fixture");

    let payload = load_file(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(payload.file_name, "abstract.txt");
    assert_eq!(payload.mime, "text/plain");
    assert_eq!(payload.bytes, b"tide tables for berth 3");
}

#[test]
fn unknown_extensions_fall_back_to_octet_stream() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("survey.hwpx9");
    std::fs::write(&path, b"\x00\x01").expect("write fixture");

    let payload = load_file(path.to_str().expect("utf8 path")).expect("load");
    assert_eq!(payload.mime, "application/octet-stream");
}

#[test]
fn a_missing_file_is_unreadable() {
    let err = load_file("/definitely/not/here.pdf").unwrap_err();
    match err.kind {
        SubmitFailureKind::FileUnreadable { path } => {
            assert_eq!(path, "/definitely/not/here.pdf");
        }
        other => panic!("unexpected kind: {other}"),
    }
}

#[test]
fn draft_resolution_keeps_fields_and_omits_an_absent_file() {
    let draft = SubmissionDraft {
        title: "Untitled".to_string(),
        author: String::new(),
        file_path: None,
    };

    let request = SubmissionRequest::from_draft(&draft).expect("resolve");
    assert_eq!(request.title, "Untitled");
    assert_eq!(request.author, "");
    assert!(request.file.is_none());
}

#[test]
fn draft_resolution_reads_the_chosen_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("paper.pdf");
    std::fs::write(&path, b"%PDF-1.7").expect("write fixture");

    let draft = SubmissionDraft {
        title: "Crane maintenance".to_string(),
        author: "Kim".to_string(),
        file_path: Some(path.to_str().expect("utf8 path").to_string()),
    };

    let request = SubmissionRequest::from_draft(&draft).expect("resolve");
    let file = request.file.expect("file payload");
    assert_eq!(file.file_name, "paper.pdf");
    assert_eq!(file.mime, "application/pdf");
    assert_eq!(file.bytes, b"%PDF-1.7");
}

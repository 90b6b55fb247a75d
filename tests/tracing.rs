//! File logging smoke test (kept in its own binary: the global
//! subscriber can only be installed once per process)

#[test]
fn file_layer_writes_into_the_given_directory() {
    let dir = tempfile::tempdir().unwrap();
    offslide::tracing::init_with_file(dir.path());

    tracing::debug!("panel controller smoke entry");

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        names.iter().any(|n| n.starts_with("offslide.log")),
        "expected a rotated log file, found {names:?}"
    );
}

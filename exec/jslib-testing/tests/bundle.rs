use golem_exec_jslib_testing::{bundle, Bundle, BUNDLE};
use std::fs;
use std::path::Path;
use std::thread;

fn read_artifact(relative: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative);
    fs::read(&path).unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()))
}

#[test]
fn test_embedded_bytes_match_artifact() {
    let artifact = read_artifact("bundle/index.iife.js");
    assert!(!artifact.is_empty());
    assert_eq!(bundle().as_bytes(), artifact.as_slice());
}

#[test]
fn test_written_back_bundle_matches_artifact() {
    let out_dir = std::env::temp_dir().join(format!(
        "golem-exec-jslib-testing-{}",
        std::process::id()
    ));
    fs::create_dir_all(&out_dir).unwrap();
    let out_path = out_dir.join("index.iife.js");

    fs::write(&out_path, bundle()).unwrap();
    let written = fs::read(&out_path).unwrap();
    fs::remove_dir_all(&out_dir).unwrap();

    assert_eq!(written, read_artifact("bundle/index.iife.js"));
}

#[test]
fn test_sequential_calls_are_identical() {
    let first = bundle().to_vec();
    for _ in 0..100 {
        assert_eq!(bundle().as_bytes(), first.as_slice());
    }
}

#[test]
fn test_concurrent_calls_are_identical() {
    let expected = BUNDLE.as_bytes();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..50).map(|_| bundle()).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            for seen in handle.join().unwrap() {
                assert_eq!(seen.as_bytes(), expected);
            }
        }
    });
}

#[test]
fn test_mutating_a_copy_does_not_leak() {
    let before = bundle();
    let mut copy = before.to_vec();
    copy.truncate(1);
    copy[0] = b'!';

    let after = bundle();
    assert_eq!(before, after);
    assert_eq!(after.len(), read_artifact("bundle/index.iife.js").len());
    assert_ne!(after.first(), Some(&b'!'));
}

#[test]
fn test_small_fixture_round_trips() {
    const RETURN_ONE: Bundle = Bundle::from_static(include_bytes!("fixtures/return_one.js"));

    let artifact = read_artifact("tests/fixtures/return_one.js");
    assert_eq!(RETURN_ONE.len(), artifact.len());
    assert_eq!(RETURN_ONE.as_bytes(), artifact.as_slice());
    assert_eq!(RETURN_ONE.as_str().unwrap(), "(function(){return 1;})();");
}

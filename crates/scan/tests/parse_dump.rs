//! Integration tests for dump parsing and replay.

use locus_scan::{ReplayScanner, ScanError, SignalScanner, parse_dump};

/// A realistic capture: firmware chatter between records, encryption
/// markers, repeated scans of a quiet room.
#[test]
fn realistic_capture() {
    let dump = "\
scan done
3 networks found
1: HomeNet (-45)*
2: HomeNet_5G (-52)*
3: Neighbor (-78)

scan done
3 networks found
1: HomeNet (-44)*
2: HomeNet_5G (-52)*
3: Neighbor (-80)

scan done
3 networks found
1: HomeNet (-44)*
2: HomeNet_5G (-52)*
3: Neighbor (-80)
";
    let observations = parse_dump(dump).unwrap();
    // Third scan duplicates the second and is dropped.
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].strength("HomeNet"), Some(-45.0));
    assert_eq!(observations[1].strength("Neighbor"), Some(-80.0));
}

#[test]
fn malformed_line_is_reported_with_position() {
    let dump = "1: A (-40)\n\n2: B (broken)\n";
    match parse_dump(dump) {
        Err(ScanError::MalformedLine { line, text }) => {
            assert_eq!(line, 3);
            assert!(text.contains("broken"));
        }
        other => panic!("expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn replay_round() {
    let dump = "1: A (-40)\n\n1: A (-41)\n";
    let mut scanner = ReplayScanner::from_dump(dump).unwrap();
    assert_eq!(scanner.remaining(), 2);

    let mut strengths = Vec::new();
    while scanner.remaining() > 0 {
        strengths.push(scanner.scan().unwrap().strength("A").unwrap());
    }
    assert_eq!(strengths, vec![-40.0, -41.0]);
    assert!(matches!(
        scanner.scan(),
        Err(ScanError::Exhausted { yielded: 2 })
    ));
}

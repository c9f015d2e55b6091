use super::*;

#[test]
fn appended_data_keeps_order() {
    let mut m = Map::new();
    m.append_data("files", "a.jpg");
    m.append_data("files", "b.jpg");
    assert_eq!(m.num_elements("files"), Some(2));
    assert_eq!(m.get_data("files", 0).unwrap(), b"a.jpg");
    assert_eq!(m.get_data("files", 1).unwrap(), b"b.jpg");
    assert_eq!(m.kind("files"), Some(ValueKind::Data));
}

#[test]
fn lookups_report_why_they_failed() {
    let mut m = Map::new();
    m.set_int("fpsnum", 30);

    assert_eq!(m.get_int("fpsnum", 0).unwrap(), 30);
    assert_eq!(
        m.get_int("fpsden", 0).unwrap_err(),
        PropError::Unset("fpsden".to_string())
    );
    assert_eq!(
        m.get_int("fpsnum", 1).unwrap_err(),
        PropError::Index {
            key: "fpsnum".to_string(),
            index: 1
        }
    );
    assert!(matches!(
        m.get_data("fpsnum", 0).unwrap_err(),
        PropError::Type {
            expected: ValueKind::Data,
            found: ValueKind::Int,
            ..
        }
    ));
}

#[test]
fn set_replaces_and_append_resets_on_type_change() {
    let mut m = Map::new();
    m.append_int("k", 1);
    m.append_int("k", 2);
    m.set_int("k", 3);
    assert_eq!(m.num_elements("k"), Some(1));

    m.append_data("k", "x");
    assert_eq!(m.num_elements("k"), Some(1));
    assert_eq!(m.kind("k"), Some(ValueKind::Data));
}

#[test]
fn set_error_clears_results() {
    let mut m = Map::new();
    m.set_int("x", 1);
    m.set_error("boom");
    assert_eq!(m.error(), Some("boom"));
    assert!(m.is_empty());
    assert_eq!(m.num_elements("x"), None);
}

#[test]
fn floats_and_removal() {
    let mut m = Map::new();
    m.set_float("gamma", 2.2);
    assert_eq!(m.get_float("gamma", 0).unwrap(), 2.2);
    assert_eq!(m.kind("gamma"), Some(ValueKind::Float));
    assert!(m.get_int("gamma", 0).is_err());

    assert!(m.remove("gamma"));
    assert!(!m.remove("gamma"));
    assert_eq!(
        m.get_float("gamma", 0).unwrap_err(),
        PropError::Unset("gamma".to_string())
    );
}

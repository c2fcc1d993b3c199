use super::*;

#[test]
fn status_label_unknown_renders_dash() {
    assert_eq!(status_label(None), "—");
}

#[test]
fn status_label_maps_probe_outcomes() {
    assert_eq!(status_label(Some(true)), "UP");
    assert_eq!(status_label(Some(false)), "DOWN");
}

#[test]
fn status_class_variants_are_distinct() {
    let classes = [
        status_class(None),
        status_class(Some(true)),
        status_class(Some(false)),
    ];
    assert_eq!(
        classes.len(),
        classes.iter().collect::<std::collections::HashSet<_>>().len()
    );
}

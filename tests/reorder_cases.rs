use ruledeck::{relocate, swap_down, swap_up, Rule};

fn list(names: &[&str]) -> Vec<Rule> {
    names
        .iter()
        .map(|name| {
            if *name == "FINAL" {
                Rule::final_default("fallback")
            } else {
                Rule::normal(name, "DIRECT")
            }
        })
        .collect()
}

fn names(rules: &[Rule]) -> Vec<String> {
    rules
        .iter()
        .map(|r| {
            if r.is_final() {
                "FINAL".to_owned()
            } else {
                r.match_value.clone()
            }
        })
        .collect()
}

#[test]
fn drag_first_after_third() {
    let rules = list(&["A", "B", "C", "FINAL"]);
    let moved = relocate(&rules, 0, 2, true, true).unwrap();
    assert_eq!(names(&moved), ["B", "C", "A", "FINAL"]);
}

#[test]
fn drag_third_before_first() {
    let rules = list(&["A", "B", "C", "FINAL"]);
    let moved = relocate(&rules, 2, 0, false, true).unwrap();
    assert_eq!(names(&moved), ["C", "A", "B", "FINAL"]);
}

#[test]
fn adjacent_swaps_in_both_directions() {
    let rules = list(&["A", "B", "C", "FINAL"]);

    // Dragging a row just past its neighbour swaps them.
    let moved = relocate(&rules, 0, 1, true, true).unwrap();
    assert_eq!(names(&moved), ["B", "A", "C", "FINAL"]);
    let moved = relocate(&rules, 1, 0, false, true).unwrap();
    assert_eq!(names(&moved), ["B", "A", "C", "FINAL"]);

    // Dropping on the near side of the neighbour is a no-move.
    let moved = relocate(&rules, 0, 1, false, true).unwrap();
    assert_eq!(names(&moved), ["A", "B", "C", "FINAL"]);
    let moved = relocate(&rules, 1, 0, true, true).unwrap();
    assert_eq!(names(&moved), ["A", "B", "C", "FINAL"]);
}

#[test]
fn every_drop_keeps_sentinel_last() {
    let rules = list(&["A", "B", "C", "D", "FINAL"]);
    for source in 0..rules.len() {
        for target in 0..rules.len() {
            for drop_after in [false, true] {
                if let Some(moved) = relocate(&rules, source, target, drop_after, true) {
                    assert!(
                        moved.last().unwrap().is_final(),
                        "sentinel displaced by relocate({source}, {target}, {drop_after})"
                    );
                    assert_eq!(moved.len(), rules.len());
                }
            }
        }
    }
}

#[test]
fn rejects_source_target_and_sentinel_cases() {
    let rules = list(&["A", "B", "FINAL"]);
    assert!(relocate(&rules, 0, 0, true, true).is_none());
    assert!(relocate(&rules, 2, 0, true, true).is_none()); // source is FINAL
    assert!(relocate(&rules, 0, 2, true, true).is_none()); // target is FINAL
    assert!(relocate(&rules, 3, 0, true, true).is_none());
    assert!(relocate(&rules, 0, 3, true, true).is_none());
}

#[test]
fn two_movable_rows_clamp() {
    let rules = list(&["A", "B", "FINAL"]);
    let moved = relocate(&rules, 0, 1, true, true).unwrap();
    assert_eq!(names(&moved), ["B", "A", "FINAL"]);
}

#[test]
fn sentinel_free_list_can_drop_to_tail() {
    let rules = list(&["A", "B", "C"]);
    let moved = relocate(&rules, 0, 2, true, false).unwrap();
    assert_eq!(names(&moved), ["B", "C", "A"]);
}

#[test]
fn relocate_does_not_mutate_input() {
    let rules = list(&["A", "B", "C", "FINAL"]);
    let before = rules.clone();
    let _ = relocate(&rules, 0, 2, true, true);
    assert_eq!(rules, before);
}

#[test]
fn swap_pairs_match_button_semantics() {
    let rules = list(&["A", "B", "C", "FINAL"]);
    assert_eq!(swap_up(&rules, 0), None);
    assert_eq!(swap_up(&rules, 2), Some((1, 2)));
    assert_eq!(swap_down(&rules, 2, true), None);
    assert_eq!(swap_down(&rules, 1, true), Some((1, 2)));
    assert_eq!(swap_up(&rules, 3), None);
    assert_eq!(swap_down(&rules, 3, true), None);
}

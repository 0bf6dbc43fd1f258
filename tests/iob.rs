use webanno_corpus::tsv::iob::convert_iob_tags;

#[test]
fn untagged_tokens_stay_outside() {
    assert_eq!(convert_iob_tags(&["_", "_", "_"]), vec!["O", "O", "O"]);
}

#[test]
fn outside_labels_are_idempotent() {
    assert_eq!(convert_iob_tags(&["O", "O"]), vec!["O", "O"]);
}

#[test]
fn span_opens_after_outside_and_continues() {
    assert_eq!(
        convert_iob_tags(&["_", "PERSON", "PERSON", "_"]),
        vec!["O", "B-PERSON", "I-PERSON", "O"]
    );
}

#[test]
fn adjacent_spans_with_different_labels_both_open() {
    assert_eq!(
        convert_iob_tags(&["PERSON", "LOCATION"]),
        vec!["B-PERSON", "B-LOCATION"]
    );
}

#[test]
fn first_position_always_opens_a_span() {
    assert_eq!(convert_iob_tags(&["LOCATION"]), vec!["B-LOCATION"]);
}

#[test]
fn first_position_ignores_the_sentence_tail() {
    // A tagged last token must not make the first token look like a
    // continuation.
    assert_eq!(
        convert_iob_tags(&["PERSON", "_", "_", "PERSON"]),
        vec!["B-PERSON", "O", "O", "B-PERSON"]
    );
}

#[test]
fn bracket_suffixes_are_stripped_and_join_spans() {
    assert_eq!(
        convert_iob_tags(&["DATE[3]", "DATE[3]", "_"]),
        vec!["B-DATE", "I-DATE", "O"]
    );
}

#[test]
fn suffixed_and_bare_tags_continue_the_same_span() {
    assert_eq!(
        convert_iob_tags(&["DATE[1]", "DATE"]),
        vec!["B-DATE", "I-DATE"]
    );
}

#[test]
fn every_inside_label_follows_the_same_label() {
    let tags = [
        "_", "PERSON", "PERSON", "LOCATION", "_", "DATE[2]", "DATE[2]", "DATE[2]", "PERSON", "_",
    ];
    let converted = convert_iob_tags(&tags);

    assert_eq!(converted.len(), tags.len());
    for (i, tag) in converted.iter().enumerate() {
        if let Some(label) = tag.strip_prefix("I-") {
            let previous = &converted[i - 1];
            assert!(
                previous == &format!("B-{}", label) || previous == &format!("I-{}", label),
                "{:?} preceded by {:?}",
                tag,
                previous
            );
        }
    }
}

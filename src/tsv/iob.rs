use once_cell::sync::Lazy;
use regex::Regex;

// WebAnno ties the tokens of a multi-token span together with a bracket
// suffix ("DATE[3]"). Only the bare tag matters for IOB labels.
static SPAN_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*$").unwrap());

const NO_TAG: &str = "_";
const OUTSIDE: &str = "O";

fn normalize_tag(tag: &str) -> &str {
    match SPAN_SUFFIX.find(tag) {
        Some(m) => &tag[..m.start()],
        None => tag,
    }
}

// Rewrites one column of raw span tags (one sentence) into IOB notation.
//
// The decision at each position compares the stripped tag against the
// stripped label derived for the previous position: a tag opens a span
// (B-) after "O" or after a different label, and continues one (I-) after
// the same label. The first position never has a predecessor.
pub fn convert_iob_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut converted = Vec::with_capacity(tags.len());
    let mut previous = OUTSIDE.to_string();

    for tag in tags {
        let tag = tag.as_ref();
        let label = if tag == NO_TAG {
            OUTSIDE
        } else {
            normalize_tag(tag)
        };

        let current = if label == OUTSIDE {
            OUTSIDE.to_string()
        } else if previous == label {
            format!("I-{}", label)
        } else {
            format!("B-{}", label)
        };

        previous = label.to_string();
        converted.push(current);
    }

    converted
}

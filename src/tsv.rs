// WebAnno TSV 3 / CoNLL-style column corpora
//
// - sentences are blank-line-delimited blocks of token-per-line rows
// - lines whose first character is '#' are comments, never token rows
// - a "-DOCSTART-" row in the words column marks a document boundary,
//   not token data
// - span columns use "_" for untagged tokens and bracket suffixes
//   ("DATE[3]") to join the tokens of a multi-token span

pub mod block_parser;
pub mod column;
pub mod iob;
pub mod reader;

use webanno_corpus::error::CorpusError;
use webanno_corpus::tokenizer::ExternalTokenizer;

#[test]
fn splits_subprocess_output_into_lines() {
    let tokenizer = ExternalTokenizer::with_command("cat");
    let tokens = tokenizer.tokenize("one\ntwo\nthree").unwrap();
    assert_eq!(tokens, vec!["one", "two", "three"]);
}

#[test]
fn missing_binary_is_a_tokenizer_error() {
    let tokenizer = ExternalTokenizer::with_command("no-such-tokenizer-binary");
    let err = tokenizer.tokenize("text").unwrap_err();
    assert!(matches!(err, CorpusError::TokenizerExecution { .. }));
}

#[test]
fn nonzero_exit_is_a_tokenizer_error() {
    let tokenizer = ExternalTokenizer::with_command("false");
    let err = tokenizer.tokenize("text").unwrap_err();
    assert!(matches!(err, CorpusError::TokenizerExecution { .. }));
}

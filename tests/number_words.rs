use vitals_voice::numbers::{parse_number_words, NumberParser};

#[test]
fn digit_sequences_concatenate_in_either_language() {
    assert_eq!(parse_number_words("moja mbili sifuri"), Some(120));
    assert_eq!(parse_number_words("one two zero"), Some(120));
    assert_eq!(parse_number_words("nine eight"), Some(98));
    assert_eq!(parse_number_words("tisa nane"), Some(98));
}

#[test]
fn tens_and_units() {
    assert_eq!(parse_number_words("themanini"), Some(80));
    assert_eq!(parse_number_words("sabini na mbili"), Some(72));
    assert_eq!(parse_number_words("seventy two"), Some(72));
}

#[test]
fn hundreds() {
    assert_eq!(parse_number_words("mia moja ishirini"), Some(120));
    assert_eq!(parse_number_words("two hundred"), Some(200));
    assert_eq!(parse_number_words("mia mbili"), Some(200));
    assert_eq!(parse_number_words("three hundred and forty five"), Some(345));
}

#[test]
fn nothing_recognized_is_none() {
    assert_eq!(parse_number_words(""), None);
    assert_eq!(parse_number_words("   "), None);
    assert_eq!(parse_number_words("banana"), None);
}

#[test]
fn repeated_parses_agree() {
    let parser = NumberParser::default();
    for input in ["mia tatu", "one two zero", "banana", "SEVENTY TWO"] {
        assert_eq!(parser.parse(input), parser.parse(input));
    }
}

#[test]
fn case_and_connectors_do_not_matter() {
    assert_eq!(
        parse_number_words("SEVENTY TWO"),
        parse_number_words("seventy two")
    );
    assert_eq!(parse_number_words("seventy and two"), Some(72));
    assert_eq!(parse_number_words("Seventy AND two"), Some(72));
}

#[test]
fn parser_is_shareable_across_threads() {
    let handles: Vec<_> = ["mia moja", "ninety", "sita"]
        .into_iter()
        .map(|input| std::thread::spawn(move || parse_number_words(input)))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![Some(100), Some(90), Some(6)]);
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use sxi::model::SubstringIndex;

// Build an index over arbitrary small records, then check the structural
// invariants and one search against a scan.
fuzz_target!(|data: &[u8]| {
    let records: Vec<String> = data
        .chunks(5)
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| (b'a' + b % 4) as char)
                .collect::<String>()
        })
        .take(64)
        .collect();
    let query: String = data
        .iter()
        .take(3)
        .map(|b| (b'a' + b % 4) as char)
        .collect();

    let Ok(index) = SubstringIndex::construct(records.clone(), |r: &String| Ok(r.clone())) else {
        return;
    };

    let text = index.text();
    let suffix_array = index.suffix_array();
    assert_eq!(suffix_array.len(), text.len());

    let mut positions: Vec<u32> = suffix_array.to_vec();
    positions.sort_unstable();
    for (i, pos) in positions.iter().enumerate() {
        assert_eq!(*pos as usize, i);
    }

    for pair in suffix_array.windows(2) {
        let a = &text[pair[0] as usize..];
        let b = &text[pair[1] as usize..];
        assert!(a <= b);
    }

    let mut found: Vec<&String> = index.search(&query);
    found.sort_unstable();
    let mut expected: Vec<&String> = records.iter().filter(|r| r.contains(&query)).collect();
    expected.sort_unstable();
    assert_eq!(found, expected);
});

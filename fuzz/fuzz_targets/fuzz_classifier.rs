#![no_main]
use libfuzzer_sys::fuzz_target;
use libpreview::classifier;

fuzz_target!(|data: &[u8]| {
    classifier::looks_like_svg(data);
    let text = String::from_utf8_lossy(data);
    let first = classifier::classify(&text);
    let second = classifier::classify(&text);
    assert_eq!(first, second);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use der_ascii::{ascii_to_der, render};

fuzz_target!(|data: &[u8]| {
    let text = render(data);
    match ascii_to_der(text.as_bytes()) {
        Ok(back) => assert_eq!(back.as_ref(), data, "{}", text),
        Err(err) => panic!("rendered text fails to parse: {}\n{}", err, text),
    }
});

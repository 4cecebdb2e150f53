#![no_main]

use libfuzzer_sys::fuzz_target;
use der_ascii::encode::{Context, Scanner, exec};

fuzz_target!(|data: &[u8]| {
    let mut context = Context::default();
    context.vars.insert("fuzz", &b"\x05\x00"[..]);
    let _ = exec(Scanner::new(data).with_max_depth(64), &mut context);
});

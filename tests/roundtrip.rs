//! Checks that translating to text and back reproduces the input.

use der_ascii::{ascii_to_der, render};
use der_ascii::print::Printer;

fn check(data: &[u8]) {
    let text = render(data);
    let back = ascii_to_der(text.as_bytes()).unwrap_or_else(|err| {
        panic!("{:02x?} rendered as {:?} fails: {}", data, text, err)
    });
    assert_eq!(back.as_ref(), data, "rendered as {:?}", text);
}

const CORPUS: &[&[u8]] = &[
    b"",
    b"\x30\x03\x02\x01\x01",
    b"\x30\x80\x02\x01\x01\x00\x00",
    b"\x30\x80\x02\x01\x01",
    b"\x30\x81\x00",
    b"\x04\x81\x0bhello world",
    b"\x1f\x04\x0bhello world",
    b"\x1f\x80\x04\x0bhello world",
    b"\x03\x03\x00\x30\x00",
    b"\x03\x02\x07\xc0",
    b"\x03\x06\x01\x30\x80\xaa\x55\xaa",
    b"\x03\x01\x07",
    b"\x06\x09\x60\x86\x48\x01\x65\x03\x04\x02\x01",
    b"\x06\x02\x80\x00",
    b"\x0d\x03\x01\x02\x03",
    b"\x01\x01\xff",
    b"\x01\x01\x42",
    b"\x02\x09\x00\xff\xff\xff\xff\xff\xff\xff\xff",
    b"\x02\x08\x80\x00\x00\x00\x00\x00\x00\x00",
    b"\x1e\x1a\x00h\x00e\x00l\x00l\x00o\x00 \xd8\x34\x00 \x00w\x00o\x00r\
      \x00l\x00d",
    b"\x1e\x0b\x00h\x00e\x00l\x00l\x00o ",
    b"\x1c\x04\xff\xff\xff\xff",
    b"\x1c\x07\x00\x00\x00z\x01\x02\x03",
    b"\x0c\x05caf\xc3\xa9",
    b"\x13\x0aquote\"back\\",
    b"\x04\x06# not\n",
    b"\x20\x80\x00\x02\x00\x00\x20\x02\x00\x00\x00\x00\x00\x00\x00",
    b"\xbf\x87\x68\x03\x02\x01\x01",
    b"\x9f\x87\x68\x00",
    b"\xdf\x80\x80\x80\x80\x80\x01\x00",
    b"\x84\x80",
    b"\x30\x84\x00\x00\x00\x00",
    b"\x30\x88\x00\x00\x00\x00\x00\x00\x00\x03",
    b"garbage",
    b"\xff\xff\xff",
];

#[test]
fn corpus() {
    for data in CORPUS {
        check(data);
    }
}

#[test]
fn short_inputs() {
    for first in 0..=255u8 {
        check(&[first]);
        for second in 0..=255u8 {
            check(&[first, second]);
        }
    }
}

#[test]
fn generated_inputs() {
    // Octets that tend to produce structure.
    const INTERESTING: &[u8] = &[
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x0d, 0x1c, 0x1e, 0x1f,
        0x30, 0x31, 0x80, 0x81, 0xa0, 0xff, b'"', b'\\', b'\n', b'a',
    ];

    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    for _ in 0..3000 {
        let len = (next() % 24) as usize;
        let data: Vec<u8> = (0..len).map(|_| {
            let value = next();
            if value % 3 == 0 {
                (value >> 8) as u8
            }
            else {
                INTERESTING[(value >> 8) as usize % INTERESTING.len()]
            }
        }).collect();
        check(&data);
    }
}

#[test]
fn printer_settings() {
    let data = b"\x30\x08\x30\x06\x30\x04\x04\x02hi";
    for depth in 0..5 {
        let text = Printer::new().with_max_depth(depth).render(data);
        assert_eq!(ascii_to_der(text.as_bytes()).unwrap().as_ref(), data);
    }
    let text = Printer::new().with_indent("\t").render(data);
    assert_eq!(ascii_to_der(text.as_bytes()).unwrap().as_ref(), data);
}

#[test]
fn text_is_stable() {
    let text = "\
        SEQUENCE {\n\
          [0] { INTEGER { 2 } }\n\
          INTEGER { -100000 }\n\
          OBJECT_IDENTIFIER { 1.2.840.113549.1.1.11 }\n\
          BIT_STRING { b`1|1000000` }\n\
          OCTET_STRING indefinite { \"a\" }\n\
          UTF8String { \"x\\xff\" }\n\
        }\n";
    let der = ascii_to_der(text.as_bytes()).unwrap();
    let rendered = render(&der);
    let again = ascii_to_der(rendered.as_bytes()).unwrap();
    assert_eq!(again, der);
    assert_eq!(render(&again), rendered);
}

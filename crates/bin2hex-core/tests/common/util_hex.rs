#[allow(dead_code)]
pub fn is_hex16(s: &str) -> bool {
    s.len() == 16 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Run the in-memory converter and return its output.
#[allow(dead_code)]
pub fn convert_to_string(input: &[u8]) -> String {
    let mut out = Vec::new();
    bin2hex_core::convert(input, &mut out).expect("in-memory conversion cannot fail");
    String::from_utf8(out).expect("output is ASCII")
}

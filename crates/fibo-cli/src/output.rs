//! CLI output formatting.

use std::io::{self, Write};

use num_bigint::BigUint;

/// Render F(n) as a decimal string.
#[must_use]
pub fn format_result(value: &BigUint) -> String {
    value.to_str_radix(10)
}

/// Write one result line to `out` and flush it.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_result_small() {
        assert_eq!(format_result(&BigUint::from(55u32)), "55");
    }

    #[test]
    fn format_result_large() {
        let value = BigUint::parse_bytes(b"354224848179261915075", 10).unwrap();
        assert_eq!(format_result(&value), "354224848179261915075");
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buf = Vec::new();
        write_line(&mut buf, "8").unwrap();
        assert_eq!(buf, b"8\n");
    }
}

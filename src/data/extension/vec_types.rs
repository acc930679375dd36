pub(crate) trait StripLineBreak {
    /// Returns a new slice without a trailing `\n` or `\r\n`
    fn strip_line_break(&self) -> Self;
}

impl<'a> StripLineBreak for &'a [u8] {
    #[inline]
    fn strip_line_break(&self) -> &'a [u8] {
        let mut out = *self;
        if out.ends_with(b"\n") {
            out = &out[..out.len() - 1];

            if out.ends_with(b"\r") {
                out = &out[..out.len() - 1];
            }
        }
        out
    }
}

pub(crate) trait ExtendSymbols {
    /// Appends every byte of `line` that is not ASCII whitespace.
    fn extend_symbols(&mut self, line: &[u8]);
}

impl ExtendSymbols for Vec<u8> {
    #[inline]
    fn extend_symbols(&mut self, line: &[u8]) {
        self.extend(line.iter().copied().filter(|b| !b.is_ascii_whitespace()));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strip_line_breaks() {
        assert_eq!(b"ATG\r\n".as_slice().strip_line_break(), b"ATG");
        assert_eq!(b"ATG\n".as_slice().strip_line_break(), b"ATG");
        assert_eq!(b"ATG".as_slice().strip_line_break(), b"ATG");
        assert_eq!(b"ATG\r".as_slice().strip_line_break(), b"ATG\r");
    }

    #[test]
    fn extend_without_whitespace() {
        let mut sequence = b"ATG".to_vec();
        sequence.extend_symbols(b" AA A\t\r\n");
        assert_eq!(sequence, b"ATGAAA");
    }
}

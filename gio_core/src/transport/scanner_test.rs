#[cfg(test)]
mod test {
    use crate::transport::scanner::{self, Granularity};
    use crate::transport::{self, ByteTransport, MemTransport};
    use anyhow::Result;
    use std::cmp;

    /// Hands out at most `step` bytes per read, like a slow serial line.
    struct Trickle {
        inner: MemTransport,
        step: usize,
    }
    impl ByteTransport for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            let hi = cmp::min(self.step, buf.len());
            self.inner.read(&mut buf[..hi])
        }
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            self.inner.write(buf)
        }
        fn name(&self) -> &str {
            "Trickle"
        }
    }

    fn scan(input: &[u8], term: &[u8], max_len: usize, step: usize) -> Result<(Vec<u8>, usize)> {
        let mut t = MemTransport::from(input.to_vec());
        let mut buf = vec![0u8; max_len];
        let r_len = scanner::read_until(&mut t, &mut buf, term, Granularity::new(step)?)?;
        buf.truncate(r_len);
        Ok((buf, t.remaining()))
    }

    #[test]
    fn stops_inclusive_of_single_byte_terminator() -> Result<()> {
        let (got, remaining) = scan(b"string!", b"r", 64, 1)?;
        assert_eq!(b"str", &got[..]);
        assert_eq!(4, remaining);
        Ok(())
    }

    #[test]
    fn first_occurrence_wins() -> Result<()> {
        let (got, _) = scan(b"a,b,c", b",", 64, 1)?;
        assert_eq!(b"a,", &got[..]);
        Ok(())
    }

    #[test]
    fn overlapping_prefix_still_matches() -> Result<()> {
        let (got, remaining) = scan(b"xaaabyy", b"aab", 64, 1)?;
        assert_eq!(b"xaaab", &got[..]);
        assert_eq!(2, remaining);

        let (got, _) = scan(b"abababc!", b"ababc", 64, 1)?;
        assert_eq!(b"abababc", &got[..]);
        Ok(())
    }

    #[test]
    fn terminator_at_the_very_start() -> Result<()> {
        let (got, remaining) = scan(b"\r\nrest", b"\r\n", 64, 1)?;
        assert_eq!(b"\r\n", &got[..]);
        assert_eq!(4, remaining);
        Ok(())
    }

    #[test]
    fn never_exceeds_max_len() -> Result<()> {
        let (got, remaining) = scan(b"0123456789", b"#", 4, 1)?;
        assert_eq!(b"0123", &got[..]);
        assert_eq!(6, remaining);

        let (got, _) = scan(b"0123456789", b"#", 4, 3)?;
        assert_eq!(b"0123", &got[..]);

        let (got, _) = scan(b"0123456789", b"56789", 2, 1)?;
        assert_eq!(b"01", &got[..]);
        Ok(())
    }

    #[test]
    fn end_of_data_without_match() -> Result<()> {
        let (got, remaining) = scan(b"no terminator here", b"|", 64, 1)?;
        assert_eq!(b"no terminator here", &got[..]);
        assert_eq!(0, remaining);

        let (got, _) = scan(b"", b"|", 64, 1)?;
        assert!(got.is_empty());
        Ok(())
    }

    #[test]
    fn empty_terminator_reads_to_capacity() -> Result<()> {
        let (got, remaining) = scan(b"abcdef", b"", 4, 1)?;
        assert_eq!(b"abcd", &got[..]);
        assert_eq!(2, remaining);
        Ok(())
    }

    #[test]
    fn coarse_granularity_stops_right_after_match() -> Result<()> {
        let (got, remaining) = scan(b"string!", b"r", 64, 4)?;
        assert_eq!(b"str", &got[..]);
        assert_eq!(4, remaining);

        let (got, remaining) = scan(b"xaaabyy", b"aab", 64, 8)?;
        assert_eq!(b"xaaab", &got[..]);
        assert_eq!(2, remaining);

        // One step of 12 ends in "--boundar", a partial terminator. Then a step of 3.
        let (got, remaining) = scan(b"abc--boundary--rest", b"--boundary--", 64, 64)?;
        assert_eq!(b"abc--boundary--", &got[..]);
        assert_eq!(4, remaining);
        Ok(())
    }

    #[test]
    fn partial_match_lengths() {
        assert_eq!(0, scanner::partial_match_len(b"abc", b""));
        assert_eq!(0, scanner::partial_match_len(b"", b"ab"));
        assert_eq!(0, scanner::partial_match_len(b"xyz", b"ab"));
        assert_eq!(1, scanner::partial_match_len(b"xya", b"ab"));
        assert_eq!(2, scanner::partial_match_len(b"xaa", b"aab"));
        // A full match is not partial.
        assert_eq!(0, scanner::partial_match_len(b"ab", b"ab"));
    }

    #[test]
    fn short_reads_are_not_end_of_data() -> Result<()> {
        let mut t = Trickle {
            inner: MemTransport::from(b"key=value;next".to_vec()),
            step: 1,
        };
        let mut buf = [0u8; 32];
        let r_len = t.read_until(&mut buf, b";")?;
        assert_eq!(b"key=value;", &buf[..r_len]);

        let mut rest = [0u8; 8];
        let r_len = transport::fill(&mut t, &mut rest)?;
        assert_eq!(b"next", &rest[..r_len]);
        Ok(())
    }

    #[test]
    fn match_end_positions() {
        assert_eq!(None, scanner::match_end(b"abc", b""));
        assert_eq!(None, scanner::match_end(b"abc", b"d"));
        assert_eq!(Some(1), scanner::match_end(b"abc", b"a"));
        assert_eq!(Some(3), scanner::match_end(b"abcbc", b"bc"));
        assert_eq!(None, scanner::match_end(b"ab", b"abc"));
    }

    #[test]
    fn zero_granularity_is_rejected() {
        assert!(Granularity::new(0).is_err());
        assert_eq!(1, *Granularity::default());
    }
}

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

const TERMINATOR: &[u8] = b"\r\n";

/// Strict `\r\n`-delimited line codec.
///
/// Unlike [`tokio_util::codec::LinesCodec`], a lone `\n` does not terminate
/// a line: only the full two-byte `\r\n` sequence does, and it is not part
/// of the decoded line. Anything after the last terminator stays in the
/// buffer until a later `decode` call completes it.
#[derive(Debug, Default)]
pub struct CrlfLinesCodec {
    // Buffer offset already scanned for a terminator, so repeated decode
    // calls over a growing partial line stay linear.
    next_index: usize,
}

impl CrlfLinesCodec {
    pub fn new() -> Self {
        Self { next_index: 0 }
    }
}

impl Decoder for CrlfLinesCodec {
    type Item = String;
    type Error = std::io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        // A buffer shorter than the terminator can never hold one; the loop
        // bound also keeps the two-byte window in range.
        while self.next_index + TERMINATOR.len() <= src.len() {
            if &src[self.next_index..self.next_index + TERMINATOR.len()] == TERMINATOR {
                let line = src.split_to(self.next_index);
                src.advance(TERMINATOR.len());
                self.next_index = 0;

                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            self.next_index += 1;
        }

        Ok(None)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let line = self.decode(src)?;

        if line.is_none() {
            // An unterminated trailing fragment is dropped at end of stream.
            src.clear();
            self.next_index = 0;
        }

        Ok(line)
    }
}

impl<T> Encoder<T> for CrlfLinesCodec
where
    T: AsRef<str>,
{
    type Error = std::io::Error;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let line = item.as_ref();

        dst.reserve(line.len() + TERMINATOR.len());
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(TERMINATOR);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(codec: &mut CrlfLinesCodec, src: &mut BytesMut) -> Vec<String> {
        let mut lines = Vec::new();

        while let Some(line) = codec.decode(src).unwrap() {
            lines.push(line);
        }

        lines
    }

    #[test]
    fn test_complete_line() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"17\r\n"[..]);

        assert_eq!(codec.decode(&mut src).unwrap(), Some("17".to_owned()));
        assert_eq!(codec.decode(&mut src).unwrap(), None);
        assert!(src.is_empty());
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"3\r\n5\r\nadmin password power\r\n"[..]);

        assert_eq!(
            decode_all(&mut codec, &mut src),
            vec!["3", "5", "admin password power"]
        );
        assert!(src.is_empty());
    }

    #[test]
    fn test_partial_line_retained() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"17\r\n42"[..]);

        assert_eq!(decode_all(&mut codec, &mut src), vec!["17"]);
        assert_eq!(&src[..], b"42");

        src.extend_from_slice(b"1\r\n");
        assert_eq!(decode_all(&mut codec, &mut src), vec!["421"]);
        assert!(src.is_empty());
    }

    #[test]
    fn test_short_buffer_never_inspected() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"7"[..]);

        assert_eq!(codec.decode(&mut src).unwrap(), None);
        assert_eq!(&src[..], b"7");
    }

    #[test]
    fn test_lone_newline_is_not_a_terminator() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"17\n18"[..]);

        assert_eq!(codec.decode(&mut src).unwrap(), None);

        src.extend_from_slice(b"\r\n");
        assert_eq!(decode_all(&mut codec, &mut src), vec!["17\n18"]);
    }

    #[test]
    fn test_terminator_split_across_feeds() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"17\r"[..]);

        assert_eq!(codec.decode(&mut src).unwrap(), None);

        src.extend_from_slice(b"\n");
        assert_eq!(decode_all(&mut codec, &mut src), vec!["17"]);
    }

    #[test]
    fn test_empty_line() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"\r\n"[..]);

        assert_eq!(codec.decode(&mut src).unwrap(), Some(String::new()));
    }

    #[test]
    fn test_any_split_matches_single_feed() {
        let bytes = b"admin password prime\r\n17\r\n\r\nnot a number\r\ntail";

        let mut reference = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&bytes[..]);
        let expected = decode_all(&mut reference, &mut src);

        for split in 0..bytes.len() {
            let mut codec = CrlfLinesCodec::new();
            let mut src = BytesMut::from(&bytes[..split]);
            let mut lines = decode_all(&mut codec, &mut src);

            src.extend_from_slice(&bytes[split..]);
            lines.extend(decode_all(&mut codec, &mut src));

            assert_eq!(lines, expected, "split at {split}");
        }
    }

    #[test]
    fn test_decode_eof_drops_fragment() {
        let mut codec = CrlfLinesCodec::new();
        let mut src = BytesMut::from(&b"17\r\n42"[..]);

        assert_eq!(codec.decode_eof(&mut src).unwrap(), Some("17".to_owned()));
        assert_eq!(codec.decode_eof(&mut src).unwrap(), None);
        assert!(src.is_empty());
    }

    #[test]
    fn test_encode_appends_terminator() {
        let mut codec = CrlfLinesCodec::new();
        let mut dst = BytesMut::new();

        codec.encode("Prime", &mut dst).unwrap();
        codec.encode("Not prime", &mut dst).unwrap();

        assert_eq!(&dst[..], b"Prime\r\nNot prime\r\n");
    }
}

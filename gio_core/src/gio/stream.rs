use crate::serde::Element;
use crate::transport::ByteTransport;
use crate::GenericIO;
use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use num_traits::Num;
use std::any;
use std::fmt::{self, Display};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read, StdinLock};

/// A line-oriented text source that tokens are extracted from.
pub trait TextSource: BufRead {
    /// An interactive source (e.g. a terminal) never reports exhaustion on its own,
    /// so it is read one line per call.
    fn is_interactive(&self) -> bool {
        false
    }
}

impl TextSource for StdinLock<'_> {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}
impl<R: Read> TextSource for BufReader<R> {}
impl<B: AsRef<[u8]>> TextSource for Cursor<B> {}
impl TextSource for &[u8] {}

/// Parses a base-10 token as a number.
pub fn parse_token<N: Num>(token: &str) -> Result<N> {
    N::from_str_radix(token, 10)
        .map_err(|_| anyhow!("Token {token:?} is not a {}", any::type_name::<N>()))
}

/// Options for [`GenericIO::read_tokens`].
#[derive(Clone, Copy, Debug)]
pub struct TokenRead<'a> {
    /// Stop right after a token equal to this one.
    pub terminator: Option<&'a str>,
    pub max_count: Option<usize>,
    /// Written into the sink between tokens.
    pub separator: &'a str,
}

impl Default for TokenRead<'_> {
    fn default() -> Self {
        Self {
            terminator: None,
            max_count: None,
            separator: " ",
        }
    }
}

impl<'a> TokenRead<'a> {
    pub fn until(mut self, terminator: &'a str) -> Self {
        self.terminator = Some(terminator);
        self
    }
    pub fn at_most(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }
    pub fn separated_by(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }
}

/// Calls `f` on each whitespace-delimited token, until the source is exhausted.
/// An interactive source yields at most one line.
fn scan_tokens<S, F>(src: &mut S, mut f: F) -> Result<usize>
where
    S: TextSource + ?Sized,
    F: FnMut(&str) -> Result<()>,
{
    let interactive = src.is_interactive();
    let mut token_ct = 0;
    let mut line = String::new();
    loop {
        line.clear();
        if src.read_line(&mut line).context("read text source")? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            f(token)?;
            token_ct += 1;
        }
        if interactive {
            warn!("Text source is interactive. Stopped after one line.");
            break;
        }
    }
    Ok(token_ct)
}

impl<T: ByteTransport> GenericIO<T> {
    /// Writes each token's bytes, with `sep` between tokens but not after the last.
    /// Returns the count of tokens written.
    pub fn write_tokens<S>(&mut self, src: &mut S, sep: Option<&str>) -> Result<usize>
    where
        S: TextSource + ?Sized,
    {
        let mut is_first = true;
        let token_ct = scan_tokens(src, |token| {
            if let (false, Some(sep)) = (is_first, sep) {
                self.put(sep.as_bytes())?;
            }
            is_first = false;
            self.put(token.as_bytes())
        })?;
        debug!("Wrote {token_ct} tokens to {}.", self.t.name());
        Ok(token_ct)
    }

    /// Converts each token with `f` and writes the resulting element.
    /// Elements are written back to back in their binary encoding, with nothing between them.
    pub fn write_tokens_with<S, E, F>(&mut self, src: &mut S, mut f: F) -> Result<usize>
    where
        S: TextSource + ?Sized,
        E: Element,
        F: FnMut(&str) -> Result<E>,
    {
        let token_ct = scan_tokens(src, |token| {
            let elem = f(token)?;
            self.write(&elem).map(|_| ())
        })?;
        debug!("Wrote {token_ct} parsed tokens to {}.", self.t.name());
        Ok(token_ct)
    }

    /// Pulls whitespace-delimited tokens from the transport into `sink`.
    /// Returns the count of tokens read.
    pub fn read_tokens<W>(&mut self, sink: &mut W, opts: TokenRead<'_>) -> Result<usize>
    where
        W: fmt::Write + ?Sized,
    {
        self.read_tokens_with(sink, opts, |token| token)
    }

    /// The terminator is compared against each token as read, before `f` transforms it.
    pub fn read_tokens_with<W, F>(
        &mut self,
        sink: &mut W,
        opts: TokenRead<'_>,
        mut f: F,
    ) -> Result<usize>
    where
        W: fmt::Write + ?Sized,
        F: FnMut(String) -> String,
    {
        let mut r_ct = 0;
        while opts.max_count.map_or(true, |max_count| r_ct < max_count) {
            let Some(token) = self.read_token()? else {
                break;
            };
            if r_ct > 0 {
                sink.write_str(opts.separator)?;
            }
            let is_term = opts.terminator.map_or(false, |term| term == token);
            sink.write_str(&f(token))?;
            r_ct += 1;
            if is_term {
                break;
            }
        }
        Ok(r_ct)
    }

    /// Reads typed elements and formats each into `sink`, joined by `separator`.
    /// Stops at end-of-data, after `max_count` elements, or right after an element
    /// equal to `terminator`.
    pub fn read_elements_to_text<E, W>(
        &mut self,
        sink: &mut W,
        separator: &str,
        terminator: Option<&E>,
        max_count: Option<usize>,
    ) -> Result<usize>
    where
        E: Element + Default + Display,
        W: fmt::Write + ?Sized,
    {
        let mut r_ct = 0;
        while max_count.map_or(true, |max_count| r_ct < max_count) {
            let mut elem = E::default();
            if self.read(&mut elem)? == 0 {
                break;
            }
            if r_ct > 0 {
                sink.write_str(separator)?;
            }
            write!(sink, "{elem}")?;
            r_ct += 1;
            if terminator.map_or(false, |term| elem.wire_eq(term)) {
                break;
            }
        }
        Ok(r_ct)
    }

    /// Skips leading ASCII whitespace, then reads up to the next whitespace byte,
    /// which is consumed. `None` at end-of-data.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut bytes = vec![];
        let mut byte = [0u8; 1];
        while self.take(&mut byte)? == 1 {
            if !byte[0].is_ascii_whitespace() {
                bytes.push(byte[0]);
            } else if !bytes.is_empty() {
                break;
            }
        }
        if bytes.is_empty() {
            return Ok(None);
        }
        self.utf8(bytes).map(Some)
    }
}

//! LZ77-style back-references for fingerprints whose repeats are not
//! periodic. A token `(d,l)` copies `l` glyphs starting `d` glyphs back;
//! copies may overlap the output they produce.

use crate::error::{KeyWalkError, KwResult};

pub const TOKEN_OPEN: char = '(';
pub const TOKEN_CLOSE: char = ')';

/// Longest copy a single token may request when expanding.
pub const MAX_COPY_LENGTH: usize = 4096;

fn token(distance: usize, length: usize) -> String {
    format!("{}{},{}{}", TOKEN_OPEN, distance, length, TOKEN_CLOSE)
}

/// Greedy compression. A match is replaced only when its token is
/// shorter than the glyphs it stands for. Matches stop at
/// [`MAX_COPY_LENGTH`], so longer runs become several tokens.
pub fn compress(glyphs: &[char], window: usize) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < glyphs.len() {
        let mut best = (0, 0);
        let reach = (glyphs.len() - i).min(MAX_COPY_LENGTH);
        for distance in 1..=window.min(i) {
            let start = i - distance;
            let length = (0..reach)
                .take_while(|&k| glyphs[start + k] == glyphs[i + k])
                .count();
            if length > best.1 {
                best = (distance, length);
            }
        }

        let (distance, length) = best;
        if length > 0 {
            let encoded = token(distance, length);
            if encoded.chars().count() < length {
                out.push_str(&encoded);
                i += length;
                continue;
            }
        }
        out.push(glyphs[i]);
        i += 1;
    }
    out
}

/// Expands every token; other characters pass through untouched.
pub fn expand(text: &str) -> KwResult<Vec<char>> {
    let mut out: Vec<char> = Vec::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != TOKEN_OPEN {
            out.push(c);
            continue;
        }
        let mut body = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == TOKEN_CLOSE {
                closed = true;
                break;
            }
            body.push(c);
        }
        if !closed {
            return Err(KeyWalkError::MalformedBackReference(format!(
                "unterminated token ({}",
                body
            )));
        }
        let (distance, length) = parse_token(&body)?;
        if distance == 0 || distance > out.len() {
            return Err(KeyWalkError::MalformedBackReference(format!(
                "distance {} reaches before the start ({} glyphs decoded)",
                distance,
                out.len()
            )));
        }
        if length > MAX_COPY_LENGTH {
            return Err(KeyWalkError::MalformedBackReference(format!(
                "copy length {} exceeds {}",
                length, MAX_COPY_LENGTH
            )));
        }
        for _ in 0..length {
            let copied = out[out.len() - distance];
            out.push(copied);
        }
    }
    Ok(out)
}

fn parse_token(body: &str) -> KwResult<(usize, usize)> {
    let malformed = || KeyWalkError::MalformedBackReference(format!("({})", body));
    let (d, l) = body.split_once(',').ok_or_else(malformed)?;
    let distance = d.trim().parse().map_err(|_| malformed())?;
    let length = l.trim().parse().map_err(|_| malformed())?;
    Ok((distance, length))
}

use crate::text::Font;
use std::fmt::Write;

/// A maximal slice of text drawn with one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun<'a> {
    pub font: Font,
    pub text: &'a str,
}

fn is_latin(ch: char) -> bool {
    ch.is_ascii() && !ch.is_ascii_control()
}

/// Splits `text` into runs of Latin and non-Latin characters.
///
/// Spaces stay in the run they follow so mixed strings such as
/// `"94Cram 智慧補教"` produce two runs, not three.
pub fn split_runs(text: &str, bold: bool) -> Vec<TextRun<'_>> {
    let latin = Font::latin(bold);
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<Font> = None;

    for (i, ch) in text.char_indices() {
        let font = if ch == ' ' {
            match current {
                Some(font) => font,
                None => latin,
            }
        } else if is_latin(ch) {
            latin
        } else {
            Font::CjkSung
        };

        match current {
            Some(active) if active != font => {
                runs.push(TextRun {
                    font: active,
                    text: &text[start..i],
                });
                start = i;
                current = Some(font);
            }
            None => current = Some(font),
            _ => {}
        }
    }

    if let Some(font) = current {
        runs.push(TextRun {
            font,
            text: &text[start..],
        });
    }
    runs
}

/// Encodes a run as a content stream string operand.
///
/// Latin runs become literal strings, CID runs become UTF-16BE hex strings
/// matching the `UniCNS-UTF16-H` CMap.
pub fn encode_run(run: &TextRun<'_>) -> String {
    if run.font.is_cid() {
        utf16be_hex(run.text, false)
    } else {
        literal_string(run.text)
    }
}

/// `(...)` literal with PDF escapes. Non-ASCII bytes are written as octal.
pub fn literal_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for byte in text.bytes() {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(byte as char),
            _ => {
                let _ = write!(&mut out, "\\{byte:03o}");
            }
        }
    }
    out.push(')');
    out
}

/// `<...>` hex string of UTF-16BE code units, optionally with a byte order mark.
pub fn utf16be_hex(text: &str, with_bom: bool) -> String {
    let mut out = String::with_capacity(text.len() * 4 + 6);
    out.push('<');
    if with_bom {
        out.push_str("FEFF");
    }
    for unit in text.encode_utf16() {
        let _ = write!(&mut out, "{unit:04X}");
    }
    out.push('>');
    out
}

use crate::io::{Format, error::Error};
use std::io::BufRead;

/// One isotope-bearing statement of a network file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetEntry {
    Isotope(String),
    Include(String),
}

pub fn read<R: BufRead>(reader: R) -> Result<Vec<NetEntry>, Error> {
    let mut entries = Vec::new();
    let mut open_block: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = strip_comment(&line).trim();
        if line.is_empty() {
            continue;
        }

        if open_block.is_some() {
            let (body, closed) = match line.find(')') {
                Some(pos) => (&line[..pos], true),
                None => (line, false),
            };
            parse_block_line(body, line_no, &mut entries)?;
            if closed {
                open_block = None;
            }
        } else if line.contains("add_isos") {
            let Some(open) = line.find('(') else {
                continue;
            };
            match line.rfind(')') {
                Some(close) if close > open => {
                    entries.extend(split_list(&line[open + 1..close]).map(NetEntry::Isotope));
                }
                _ => {
                    parse_block_line(&line[open + 1..], line_no, &mut entries)?;
                    open_block = Some(line_no);
                }
            }
        } else if line.contains("add_iso") {
            if let (Some(open), Some(close)) = (line.find('('), line.rfind(')')) {
                if let Some(first) = split_list(&line[open + 1..close.max(open + 1)]).next() {
                    entries.push(NetEntry::Isotope(first));
                }
            }
        } else if line.starts_with("include") {
            let name = line
                .split_whitespace()
                .nth(1)
                .map(unquote)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| Error::parse(Format::Net, line_no, "include without a file name"))?;
            entries.push(NetEntry::Include(name.trim_end_matches(".net").to_string()));
        }
    }

    if let Some(start) = open_block {
        return Err(Error::parse(
            Format::Net,
            start,
            "add_isos block is never closed with ')'",
        ));
    }

    Ok(entries)
}

fn strip_comment(line: &str) -> &str {
    line.split_once('!').map_or(line, |(code, _)| code)
}

fn unquote(token: &str) -> &str {
    token.trim_matches(|c| c == '\'' || c == '"')
}

fn split_list(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split(',')
        .map(|t| unquote(t.trim()))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// A block line is either isotopes or `element first last`, an inclusive
/// range of mass numbers.
fn parse_block_line(body: &str, line_no: usize, entries: &mut Vec<NetEntry>) -> Result<(), Error> {
    let tokens: Vec<&str> = body
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(unquote)
        .filter(|t| !t.is_empty())
        .collect();

    if let [element, first, last] = tokens.as_slice() {
        if let (Ok(first), Ok(last)) = (first.parse::<u16>(), last.parse::<u16>()) {
            if first > last {
                return Err(Error::parse(
                    Format::Net,
                    line_no,
                    format!("empty mass-number range {element} {first} {last}"),
                ));
            }
            entries.extend((first..=last).map(|a| NetEntry::Isotope(format!("{element}{a}"))));
            return Ok(());
        }
    }

    entries.extend(tokens.into_iter().map(|t| NetEntry::Isotope(t.to_string())));
    Ok(())
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read, Stdin, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

pub fn open_input(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(p) => {
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        None => Ok(InputSource::Stdin(BufReader::new(io::stdin()))),
    }
}

pub fn read_input(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    open_input(path)?
        .read_to_string(&mut text)
        .context("Failed to read input")?;
    Ok(text)
}

/// Where the composition text and fold notices go.
///
/// Notices share stdout with the table only when the table goes to a file.
pub enum OutputTarget<'a> {
    File(&'a Path),
    Stdout,
}

impl<'a> OutputTarget<'a> {
    pub fn new(path: Option<&'a Path>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    pub fn write_text(&self, text: &str) -> Result<()> {
        match self {
            OutputTarget::File(p) => std::fs::write(p, text)
                .with_context(|| format!("Failed to write output file: {}", p.display())),
            OutputTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())
                    .and_then(|()| out.flush())
                    .context("Failed to write to stdout")
            }
        }
    }

    pub fn notice(&self, message: &str) {
        match self {
            OutputTarget::File(_) => println!("{message}"),
            OutputTarget::Stdout => eprintln!("{message}"),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OutputTarget::File(p) => p.display().to_string(),
            OutputTarget::Stdout => "stdout".to_string(),
        }
    }
}

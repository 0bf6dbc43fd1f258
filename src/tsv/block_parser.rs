use std::io::{self, BufRead};

use serde::Serialize;

use crate::error::CorpusError;

pub(crate) const DOCSTART: &str = "-DOCSTART-";

// One parsed sentence block: token rows of uniform width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // All values of one physical column, top to bottom. `index` must be
    // below the width the grid was validated against.
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.rows.iter().map(|row| row[index].as_str()).collect()
    }
}

// Parses one blank-line-delimited block into a Grid.
//
// Comment lines are dropped by looking at the original block text, so they
// never occupy a row slot. Returns Ok(None) for blocks that contain no token
// rows at all (empty, comment-only, or docstart-only blocks).
pub fn parse_grid_block(
    block: &str,
    words_column: usize,
    width: usize,
) -> Result<Option<Grid>, CorpusError> {
    let block = block.trim();
    if block.is_empty() {
        return Ok(None);
    }

    let mut rows: Vec<Vec<String>> = block
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect();

    if rows.is_empty() {
        return Ok(None);
    }

    // A document boundary marker is not token data.
    if rows[0].get(words_column).map(String::as_str) == Some(DOCSTART) {
        rows.remove(0);
    }
    if rows.is_empty() {
        return Ok(None);
    }

    for row in &rows {
        if row.len() != width {
            return Err(CorpusError::MalformedBlock {
                block: block.to_string(),
            });
        }
    }

    Ok(Some(Grid { rows }))
}

// Streams Grids out of a readable source, one per sentence block, parsing no
// further than the consumer pulls. Runs of consecutive blank lines collapse
// into a single separator.
pub struct GridReader<R> {
    reader: R,
    words_column: usize,
    width: usize,
    line: String,
}

impl<R: BufRead> GridReader<R> {
    pub fn new(reader: R, words_column: usize, width: usize) -> Self {
        Self {
            reader,
            words_column,
            width,
            line: String::new(),
        }
    }

    // Next run of non-blank lines, joined back into one block string.
    // Ok(None) means the source is exhausted.
    fn next_block(&mut self) -> io::Result<Option<String>> {
        let mut lines: Vec<String> = Vec::new();

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                break;
            }

            let line = self.line.trim_end_matches(|c| c == '\r' || c == '\n');
            if line.trim().is_empty() {
                if lines.is_empty() {
                    continue;
                }
                break;
            }

            lines.push(line.to_string());
        }

        Ok(if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        })
    }
}

impl<R: BufRead> Iterator for GridReader<R> {
    type Item = Result<Grid, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let block = match self.next_block() {
                Ok(Some(block)) => block,
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            };

            match parse_grid_block(&block, self.words_column, self.width) {
                Ok(Some(grid)) => return Some(Ok(grid)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

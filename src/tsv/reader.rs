use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;
use crate::tsv::block_parser::{Grid, GridReader};
use crate::tsv::column::{ColumnMap, ColumnRole};
use crate::tsv::iob::convert_iob_tags;

// Reader for WebAnno TSV / CoNLL-style column corpora with comments between
// sentences. Construction declares one role per physical column; queries
// project roles out of the lazily parsed sentence grids.
pub struct TsvCorpusReader {
    root: PathBuf,
    fileids: Vec<String>,
    columns: ColumnMap,
}

// One projected column: its physical index and whether its values are
// rewritten into IOB notation before assembly.
type Projection = Vec<(usize, bool)>;

impl TsvCorpusReader {
    // Fails on a role name outside the closed vocabulary before any file
    // is touched.
    pub fn new<P: AsRef<Path>>(
        root: P,
        fileids: &[&str],
        columntypes: &[&str],
    ) -> Result<Self, CorpusError> {
        let columns = ColumnMap::new(columntypes)?;

        Ok(Self {
            root: root.as_ref().to_path_buf(),
            fileids: fileids.iter().map(|s| s.to_string()).collect(),
            columns,
        })
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    // All sentence grids of the selected files, parsed on demand in fileid
    // order. Every call starts a fresh pass over the files.
    pub fn grids(&self, fileids: Option<&[&str]>) -> CorpusGrids {
        let files: Vec<PathBuf> = match fileids {
            Some(ids) => ids.iter().map(|id| self.root.join(id)).collect(),
            None => self.fileids.iter().map(|id| self.root.join(id)).collect(),
        };

        CorpusGrids {
            files: files.into_iter(),
            current: None,
            words_column: self.columns.words_column(),
            width: self.columns.width(),
        }
    }

    // Flattened token-level view: one value tuple per token, in document
    // order, with the columns named in `convert` rewritten into IOB notation
    // sentence by sentence. `columns` defaults to all non-ignore roles in
    // declaration order.
    pub fn iob_words(
        &self,
        fileids: Option<&[&str]>,
        columns: Option<&[&str]>,
        convert: &[&str],
    ) -> Result<impl Iterator<Item = Result<Vec<String>, CorpusError>>, CorpusError> {
        let projection = self.resolve_projection(columns, convert)?;

        Ok(self.grids(fileids).flat_map(move |grid| match grid {
            Ok(grid) => project_grid(&grid, &projection)
                .into_iter()
                .map(Ok)
                .collect::<Vec<Result<Vec<String>, CorpusError>>>()
                .into_iter(),
            Err(e) => vec![Err(e)].into_iter(),
        }))
    }

    // Sentence-level view: same extraction and conversion as iob_words, one
    // sequence of token tuples per sentence.
    pub fn iob_sents(
        &self,
        fileids: Option<&[&str]>,
        columns: Option<&[&str]>,
        convert: &[&str],
    ) -> Result<impl Iterator<Item = Result<Vec<Vec<String>>, CorpusError>>, CorpusError> {
        let projection = self.resolve_projection(columns, convert)?;

        Ok(self
            .grids(fileids)
            .map(move |grid| grid.map(|grid| project_grid(&grid, &projection))))
    }

    // Word forms only, flattened across sentences.
    pub fn words(
        &self,
        fileids: Option<&[&str]>,
    ) -> Result<impl Iterator<Item = Result<String, CorpusError>>, CorpusError> {
        let words = self.iob_words(fileids, Some(&["words"]), &[])?;
        Ok(words.map(|token| token.map(|mut values| values.remove(0))))
    }

    // Word forms only, one sequence per sentence.
    pub fn sents(
        &self,
        fileids: Option<&[&str]>,
    ) -> Result<impl Iterator<Item = Result<Vec<String>, CorpusError>>, CorpusError> {
        let sents = self.iob_sents(fileids, Some(&["words"]), &[])?;
        Ok(sents.map(|sent| {
            sent.map(|rows| rows.into_iter().map(|mut values| values.remove(0)).collect())
        }))
    }

    fn lookup(&self, name: &str) -> Result<(ColumnRole, usize), CorpusError> {
        let role: ColumnRole = name
            .parse()
            .map_err(|_| CorpusError::UnknownColumn(name.to_string()))?;
        let index = self
            .columns
            .index_of(role)
            .ok_or_else(|| CorpusError::UnknownColumn(name.to_string()))?;
        Ok((role, index))
    }

    fn resolve_projection(
        &self,
        columns: Option<&[&str]>,
        convert: &[&str],
    ) -> Result<Projection, CorpusError> {
        let mut convert_roles = HashSet::new();
        for name in convert {
            let (role, _) = self.lookup(name)?;
            convert_roles.insert(role);
        }

        let projected: Vec<(ColumnRole, usize)> = match columns {
            Some(names) => names
                .iter()
                .map(|name| self.lookup(name))
                .collect::<Result<_, _>>()?,
            None => self
                .columns
                .data_roles()
                .into_iter()
                .filter_map(|role| self.columns.index_of(role).map(|index| (role, index)))
                .collect(),
        };

        Ok(projected
            .into_iter()
            .map(|(role, index)| (index, convert_roles.contains(&role)))
            .collect())
    }
}

// Extracts the projected columns of one grid and transposes them back into
// per-token tuples, converting the flagged columns first.
fn project_grid(grid: &Grid, projection: &Projection) -> Vec<Vec<String>> {
    let columns: Vec<Vec<String>> = projection
        .iter()
        .map(|&(index, convert)| {
            let values = grid.column(index);
            if convert {
                convert_iob_tags(&values)
            } else {
                values.into_iter().map(str::to_string).collect()
            }
        })
        .collect();

    (0..grid.len())
        .map(|row| columns.iter().map(|column| column[row].clone()).collect())
        .collect()
}

// Lazy grid stream over a sequence of corpus files. Files are opened one at
// a time, the next only once the previous is exhausted.
pub struct CorpusGrids {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<GridReader<BufReader<File>>>,
    words_column: usize,
    width: usize,
}

impl Iterator for CorpusGrids {
    type Item = Result<Grid, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(reader) = &mut self.current {
                match reader.next() {
                    Some(item) => return Some(item),
                    None => self.current = None,
                }
            }

            let path = self.files.next()?;
            match File::open(&path) {
                Ok(file) => {
                    self.current = Some(GridReader::new(
                        BufReader::new(file),
                        self.words_column,
                        self.width,
                    ));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

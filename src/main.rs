use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use serde::Serialize;
use std::{env, fs, path::PathBuf};

use webanno_corpus::tsv::reader::TsvCorpusReader;

struct Args {
    corpus_path: String,
    output_path: Option<String>,
    columntypes: Vec<String>,
    columns: Option<Vec<String>>,
    convert: Vec<String>,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.reqopt(
        "c",
        "columns",
        "comma-separated role of every column, e.g. ignore,ignore,words,ne",
        "ROLES",
    );
    opts.optopt(
        "p",
        "project",
        "comma-separated roles to project (default: all non-ignore roles)",
        "ROLES",
    );
    opts.optopt(
        "i",
        "iob",
        "comma-separated roles to rewrite into IOB notation",
        "ROLES",
    );

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let corpus_path = matches
        .free
        .get(0)
        .context("path to corpus directory is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    let split_roles = |s: String| -> Vec<String> {
        s.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    };

    let columntypes = matches
        .opt_str("columns")
        .map(split_roles)
        .context("--columns is required")?;
    let columns = matches.opt_str("project").map(split_roles);
    let convert = matches.opt_str("iob").map(split_roles).unwrap_or_default();

    Ok(Args {
        corpus_path,
        output_path,
        columntypes,
        columns,
        convert,
    })
}

enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save_fileid(&self, fileid: &str, converted: &ConvertedFile) -> Result<()> {
        if let BuildOut::File { root } = &self {
            let stem = PathBuf::from(fileid)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| fileid.to_string());

            fs::write(
                root.join(format!("{}.json", stem)),
                serde_json::to_string(converted)?,
            )?;
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct ConvertedFile<'a> {
    fileid: &'a str,
    sentences: Vec<Vec<Vec<String>>>,
}

fn main() -> Result<()> {
    let args = get_args()?;

    let corpus_path = PathBuf::from(&args.corpus_path);
    ensure!(
        corpus_path.exists(),
        "File not found: {}",
        corpus_path.display()
    );

    let mut fileids = Vec::new();
    for entry in fs::read_dir(&corpus_path)? {
        let path = entry?.path();
        let is_corpus_file = path
            .extension()
            .map(|ext| ext == "tsv" || ext == "conll")
            .unwrap_or(false);
        if !is_corpus_file {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            fileids.push(name.to_string());
        }
    }
    fileids.sort();
    ensure!(
        !fileids.is_empty(),
        "No .tsv or .conll files in {}",
        corpus_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    let fileid_refs: Vec<&str> = fileids.iter().map(String::as_str).collect();
    let columntype_refs: Vec<&str> = args.columntypes.iter().map(String::as_str).collect();
    let reader = TsvCorpusReader::new(&corpus_path, &fileid_refs, &columntype_refs)?;

    let columns: Option<Vec<&str>> = args
        .columns
        .as_ref()
        .map(|c| c.iter().map(String::as_str).collect());
    let convert: Vec<&str> = args.convert.iter().map(String::as_str).collect();

    println!("Processing {} files...", fileids.len());

    let mut total_sentences = 0;
    let mut total_tokens = 0;

    let pb = create_progress_bar(fileids.len() as u64);
    for fileid in fileids.iter().progress_with(pb) {
        let sentences = reader
            .iob_sents(Some(&[fileid.as_str()]), columns.as_deref(), &convert)?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to read {}", fileid))?;

        total_sentences += sentences.len();
        total_tokens += sentences.iter().map(|s| s.len()).sum::<usize>();

        out.save_fileid(fileid, &ConvertedFile { fileid, sentences })?;
    }

    println!(
        "Finished. {} sentences, {} tokens.",
        total_sentences, total_tokens
    );

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}

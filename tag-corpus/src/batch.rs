use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use language_utils::ParsedDocument;
use lexicogrammar::config::OutputConfig;
use lexicogrammar::{IndexRecord, TaggingEngine, to_vertical, to_xml};
use log::{info, warn};

/// Where annotated copies of each document go, if anywhere.
#[derive(Clone, Debug)]
pub struct OutputDirs {
    pub xml: Option<PathBuf>,
    pub vertical: Option<PathBuf>,
    pub layout: lexicogrammar::VerticalLayout,
}

impl OutputDirs {
    /// `xml_output/` and `vertical_output/` beside the index file.
    pub fn beside(index_file: &Path, outputs: &OutputConfig) -> anyhow::Result<Self> {
        let root = index_file.parent().unwrap_or(Path::new("."));
        let make = |enabled: bool, name: &str| -> anyhow::Result<Option<PathBuf>> {
            if !enabled {
                return Ok(None);
            }
            let dir = root.join(name);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            Ok(Some(dir))
        };
        Ok(Self {
            xml: make(outputs.xml, "xml_output")?,
            vertical: make(outputs.vertical, "vertical_output")?,
            layout: outputs.vertical_layout,
        })
    }
}

/// Files directly inside `dir` with the given extension, sorted by name.
pub fn list_files(dir: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

pub fn progress_bar(len: usize, what: &str) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {what} ({{per_sec}}, {{eta}})"
            ))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Tags one parsed document, writes its annotated copies and returns its
/// index row.
pub fn tag_file(engine: &TaggingEngine, path: &Path, dirs: &OutputDirs) -> anyhow::Result<IndexRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut document = ParsedDocument::from_json(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    if document.name.is_empty() {
        document.name = file_stem(path);
    }

    let tagged = engine
        .tag_document(&document)
        .with_context(|| format!("Failed to tag {}", path.display()))?;

    if let Some(dir) = &dirs.xml {
        let out = dir.join(format!("{}.xml", file_stem(path)));
        let xml = to_xml(&tagged)?;
        std::fs::write(&out, xml).with_context(|| format!("Failed to write {}", out.display()))?;
    }
    if let Some(dir) = &dirs.vertical {
        let out = dir.join(format!("{}.tsv", file_stem(path)));
        std::fs::write(&out, to_vertical(&tagged, dirs.layout))
            .with_context(|| format!("Failed to write {}", out.display()))?;
    }

    Ok(IndexRecord::new(file_name(path), &tagged.indices))
}

#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    pub tagged: usize,
    pub failed: usize,
}

/// Tags every `.json` document in `input_dir` and writes one index row per
/// document to `index_file`, in file name order. A document that fails is
/// logged and left out; the rest of the batch still runs.
pub async fn tag_folder(
    engine: Arc<TaggingEngine>,
    input_dir: &Path,
    index_file: &Path,
    dirs: OutputDirs,
    concurrency: usize,
) -> anyhow::Result<BatchSummary> {
    let files = list_files(input_dir, "json")?;
    info!("tagging {} documents from {}", files.len(), input_dir.display());

    let pb = progress_bar(files.len(), "documents")?;
    let mut writer = csv::Writer::from_path(index_file)
        .with_context(|| format!("Failed to create {}", index_file.display()))?;
    writer.write_record(IndexRecord::header())?;

    let dirs = Arc::new(dirs);
    let mut results = futures::stream::iter(files)
        .map(|path| {
            let engine = engine.clone();
            let dirs = dirs.clone();
            async move {
                let outcome = tokio::task::spawn_blocking({
                    let path = path.clone();
                    move || tag_file(&engine, &path, &dirs)
                })
                .await;
                (path, outcome)
            }
        })
        .buffered(concurrency.max(1));

    let mut summary = BatchSummary::default();
    while let Some((path, outcome)) = results.next().await {
        pb.inc(1);
        match outcome {
            Ok(Ok(record)) => {
                writer.write_record(record.row())?;
                summary.tagged += 1;
            }
            Ok(Err(err)) => {
                warn!("skipping {}: {err:#}", path.display());
                summary.failed += 1;
            }
            Err(err) => {
                warn!("skipping {}: tagging task failed: {err}", path.display());
                summary.failed += 1;
            }
        }
    }
    pb.finish_and_clear();
    writer.flush().context("Failed to flush index file")?;

    info!(
        "tagged {} documents, skipped {}, indices in {}",
        summary.tagged,
        summary.failed,
        index_file.display()
    );
    Ok(summary)
}

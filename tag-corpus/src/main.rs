mod batch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, anyhow};
use batch::{OutputDirs, list_files, progress_bar, tag_folder};
use lexicogrammar::concordance::{find_examples_in_xml, sample_examples};
use lexicogrammar::recompute::{parse_xml, recompute};
use lexicogrammar::{
    IndexRecord, LexicalResources, LexiconConfig, RuleSet, Tag, TaggerConfig, TaggingEngine,
    VerticalLayout,
};
use log::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "tag" => {
            if args.len() < 4 {
                eprintln!("Error: 'tag' requires an input folder and an output file");
                eprintln!("Usage: tag-corpus tag <input_dir> <output.csv> [options]");
                return Err(anyhow!("Missing arguments for 'tag' command"));
            }
            let config = tag_config(&args[4..])?;
            tag(Path::new(&args[2]), Path::new(&args[3]), config).await?;
        }
        "recompute" => {
            if args.len() < 4 {
                eprintln!("Error: 'recompute' requires an xml folder and an output file");
                eprintln!("Usage: tag-corpus recompute <xml_dir> <output.csv>");
                return Err(anyhow!("Missing arguments for 'recompute' command"));
            }
            recompute_folder(Path::new(&args[2]), Path::new(&args[3]))?;
        }
        "examples" => {
            if args.len() < 5 {
                eprintln!("Error: 'examples' requires an xml folder, a tag and a count");
                eprintln!("Usage: tag-corpus examples <xml_dir> <tag> <count>");
                eprintln!("Example: tag-corpus examples out/xml_output that_verb_clause 20");
                return Err(anyhow!("Missing arguments for 'examples' command"));
            }
            let count: usize = args[4]
                .parse()
                .context("Failed to parse count as a number")?;
            print_examples(Path::new(&args[2]), &args[3], count)?;
        }
        "check-lexicon" => {
            check_lexicon(args.get(2).map(PathBuf::from))?;
        }
        _ => {
            eprintln!("Error: Unknown command '{command}'");
            print_usage();
            return Err(anyhow!("Unknown command"));
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: tag-corpus <command> [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tag <input_dir> <output.csv> [options]  Tag parsed documents and write indices");
    eprintln!("  recompute <xml_dir> <output.csv>        Recompute indices from (edited) xml files");
    eprintln!("  examples <xml_dir> <tag> <count>        Print example sentences for a tag");
    eprintln!("  check-lexicon [dir]                     Load lexical resources and report sizes");
    eprintln!();
    eprintln!("Options for 'tag':");
    eprintln!("  --config <file>      JSON configuration file");
    eprintln!("  --rule-set <name>    published, development or revised");
    eprintln!("  --lexicon <dir>      Directory with the resource files");
    eprintln!("  --xml                Write xml_output/ beside the index file");
    eprintln!("  --vertical           Write vertical_output/ beside the index file");
    eprintln!("  --layout <name>      Vertical layout: simple or full");
    eprintln!("  --concurrency <n>    Documents tagged at once");
    eprintln!();
    eprintln!("Set RUST_LOG=info (or debug) for progress details.");
}

/// Reads `--config` first so the other flags override the file.
fn tag_config(options: &[String]) -> anyhow::Result<TaggerConfig> {
    let mut config = match options.iter().position(|option| option == "--config") {
        Some(index) => {
            let path = options
                .get(index + 1)
                .ok_or_else(|| anyhow!("--config needs a file"))?;
            TaggerConfig::from_file(path).with_context(|| format!("Failed to load config {path}"))?
        }
        None => TaggerConfig::default(),
    };

    let mut options = options.iter();
    while let Some(option) = options.next() {
        let mut value = || {
            options
                .next()
                .ok_or_else(|| anyhow!("{option} needs a value"))
        };
        match option.as_str() {
            "--config" => {
                value()?;
            }
            "--rule-set" => {
                let name = value()?;
                config.rule_set = name
                    .parse::<RuleSet>()
                    .map_err(|_| anyhow!("Unknown rule set '{name}'"))?;
            }
            "--lexicon" => config.lexicon.directory = Some(PathBuf::from(value()?)),
            "--layout" => {
                let name = value()?;
                config.outputs.vertical_layout = name
                    .parse::<VerticalLayout>()
                    .map_err(|_| anyhow!("Unknown vertical layout '{name}'"))?;
            }
            "--concurrency" => {
                config.concurrency = value()?
                    .parse()
                    .context("Failed to parse concurrency as a number")?;
            }
            "--xml" => config.outputs.xml = true,
            "--vertical" => config.outputs.vertical = true,
            other => return Err(anyhow!("Unknown option '{other}'")),
        }
    }
    Ok(config)
}

async fn tag(input_dir: &Path, index_file: &Path, config: TaggerConfig) -> anyhow::Result<()> {
    let lexicon = LexicalResources::load(&config.lexicon).context("Failed to load lexicon")?;
    let engine = TaggingEngine::new(Arc::new(lexicon), config.rule_set)?;
    info!("rule set: {}", engine.rule_set());

    let dirs = OutputDirs::beside(index_file, &config.outputs)?;
    let summary = tag_folder(
        Arc::new(engine),
        input_dir,
        index_file,
        dirs,
        config.concurrency,
    )
    .await?;

    println!("Tagged {} documents", summary.tagged);
    if summary.failed > 0 {
        println!("Skipped {} documents (see log)", summary.failed);
    }
    println!("Indices written to: {}", index_file.display());
    Ok(())
}

fn recompute_folder(xml_dir: &Path, index_file: &Path) -> anyhow::Result<()> {
    let files = list_files(xml_dir, "xml")?;
    let pb = progress_bar(files.len(), "files")?;
    let mut writer = csv::Writer::from_path(index_file)
        .with_context(|| format!("Failed to create {}", index_file.display()))?;
    writer.write_record(IndexRecord::header())?;

    let mut unknown = 0;
    let mut skipped = 0;
    for path in &files {
        pb.inc(1);
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
            .and_then(|xml| parse_xml(&xml).with_context(|| format!("Failed to parse {name}")));
        let document = match document {
            Ok(document) => document,
            Err(err) => {
                warn!("skipping {}: {err:#}", path.display());
                skipped += 1;
                continue;
            }
        };
        let recomputed = recompute(&name, &document);
        unknown += recomputed.unknown_tags.len();
        writer.write_record(IndexRecord::new(name, &recomputed.indices).row())?;
    }
    pb.finish_and_clear();
    writer.flush().context("Failed to flush index file")?;

    println!("Recomputed {} files", files.len() - skipped);
    if unknown > 0 {
        println!("Ignored {unknown} unknown tag values (see log)");
    }
    if skipped > 0 {
        println!("Skipped {skipped} unreadable files");
    }
    println!("Indices written to: {}", index_file.display());
    Ok(())
}

fn print_examples(xml_dir: &Path, label: &str, count: usize) -> anyhow::Result<()> {
    if Tag::from_label(label).is_none() {
        warn!("'{label}' is not a registered tag, searching for it as text");
    }

    let mut examples = Vec::new();
    for path in list_files(xml_dir, "xml")? {
        let xml = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let document = parse_xml(&xml).with_context(|| format!("Failed to parse {}", path.display()))?;
        examples.extend(find_examples_in_xml(&document, label));
    }
    let found = examples.len();
    let sampled = sample_examples(examples, count, label);

    println!("Found {found} sentences with {label}, showing {}:\n", sampled.len());
    for example in sampled {
        println!("{example}");
    }
    Ok(())
}

fn check_lexicon(directory: Option<PathBuf>) -> anyhow::Result<()> {
    let config = LexiconConfig {
        directory,
        ..LexiconConfig::default()
    };
    let lexicon = LexicalResources::load(&config).context("Failed to load lexicon")?;

    println!("nouns:          {}", lexicon.nouns.len());
    println!("verbs:          {}", lexicon.verbs.len());
    println!("that-verbs:     {}", lexicon.that_verbs.len());
    println!("to-verbs:       {}", lexicon.to_verbs.len());
    println!("phrasal verbs:  {}", lexicon.phrasal_verbs.len());
    println!("adjectives:     {}", lexicon.adjectives.len());
    println!("adverbs:        {}", lexicon.adverbs.len());
    println!("stop words:     {}", lexicon.nominal_stop.len());
    Ok(())
}

use anyhow::{Context, Result, bail};
use markdown_blockpaste_config::{Config, ConvertConfig, OrderSetting};
use markdown_blockpaste_engine::{
    Block, BlockHost, BlockOrder, ClipboardPayload, ConvertOptions, Document, EditorSlot,
    PasteHandler, PasteOutcome, convert, io, parsing, splice,
};
use relative_path::RelativePathBuf;
use std::{
    env, fs,
    io::Read,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  {bin} init <DRAFTS_DIR>
  {bin} detect [FILE]
  {bin} convert [FILE] [--source-order]
  {bin} paste <DRAFT> [FILE] [--at N]

FILE defaults to stdin; '-' also reads stdin.
DRAFT is a JSON draft path relative to drafts_path in the config file.";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Init {
        drafts_path: PathBuf,
    },
    Detect {
        input: Option<PathBuf>,
    },
    Convert {
        input: Option<PathBuf>,
        source_order: bool,
    },
    Paste {
        draft: RelativePathBuf,
        input: Option<PathBuf>,
        at: Option<usize>,
    },
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((command, rest)) = args.split_first() else {
        bail!("missing command");
    };

    let mut positional = Vec::new();
    let mut source_order = false;
    let mut at = None;
    let mut rest = rest.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--source-order" => source_order = true,
            "--at" => {
                let value = rest.next().context("--at needs a block index")?;
                at = Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("invalid block index '{value}'"))?,
                );
            }
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            _ => positional.push(arg.as_str()),
        }
    }

    let input_at = |i: usize| {
        positional
            .get(i)
            .filter(|p| **p != "-")
            .map(PathBuf::from)
    };

    let parsed = match command.as_str() {
        "init" if positional.len() == 1 => Command::Init {
            drafts_path: PathBuf::from(positional[0]),
        },
        "detect" if positional.len() <= 1 => Command::Detect { input: input_at(0) },
        "convert" if positional.len() <= 1 => Command::Convert {
            input: input_at(0),
            source_order,
        },
        "paste" if (1..=2).contains(&positional.len()) => Command::Paste {
            draft: RelativePathBuf::from(positional[0]),
            input: input_at(1),
            at,
        },
        "init" | "detect" | "convert" | "paste" => bail!("wrong number of arguments for '{command}'"),
        other => bail!("unknown command '{other}'"),
    };

    if source_order && !matches!(parsed, Command::Convert { .. }) {
        bail!("--source-order only applies to 'convert'");
    }
    if at.is_some() && !matches!(parsed, Command::Paste { .. }) {
        bail!("--at only applies to 'paste'");
    }
    Ok(parsed)
}

fn convert_options(settings: &ConvertConfig) -> ConvertOptions {
    ConvertOptions {
        default_language: settings.default_language.clone(),
        line_break: settings.line_break.clone(),
        order: match settings.order {
            OrderSetting::ExtractedFirst => BlockOrder::ExtractedFirst,
            OrderSetting::SourceOrder => BlockOrder::SourceOrder,
        },
    }
}

/// Writes a default config pointing at `drafts_path`, creating the drafts
/// directory. An existing config is never overwritten.
fn init_config(config_path: &Path, drafts_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("config file {} already exists", config_path.display());
    }
    let drafts_path = Config::expand_path(drafts_path)
        .with_context(|| format!("cannot expand {}", drafts_path.display()))?;
    fs::create_dir_all(&drafts_path)
        .with_context(|| format!("failed to create {}", drafts_path.display()))?;
    Config::new(drafts_path).save_to_path(config_path)
}

fn place_cursor(document: &mut Document, at: Option<usize>) -> Result<()> {
    if let Some(n) = at {
        let len = document.len();
        if n >= len {
            bail!("block index {n} is out of range for a draft of {len} blocks");
        }
    }
    document.set_cursor(at);
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Pastes `text` into `document` the way an editor would: markdown is
/// converted to blocks, anything else lands as a single paragraph.
fn paste_into(
    document: Document,
    text: &str,
    options: ConvertOptions,
) -> Result<(Document, usize)> {
    let mut slot = EditorSlot::new();
    let editor = slot.mount(document);

    let outcome = PasteHandler::new(options).handle(&editor, &ClipboardPayload::plain(text));
    let mut document = slot.unmount().context("editor was still in use")?;

    let inserted = match outcome {
        PasteOutcome::Inserted(patch) => patch.len(),
        PasteOutcome::Failed(err) => return Err(err).context("paste failed"),
        PasteOutcome::NotIntercepted => {
            let text = text.trim();
            if text.is_empty() {
                0
            } else {
                log::info!("input is not markdown, pasting it as one paragraph");
                let cursor = document.current_cursor_index();
                splice(&mut document, cursor, &[Block::paragraph(text)])?.len()
            }
        }
    };
    Ok((document, inserted))
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { drafts_path } => {
            let config_path = Config::config_path();
            init_config(&config_path, &drafts_path)?;
            println!("wrote {}", config_path.display());
        }
        Command::Detect { input } => {
            let text = read_input(input.as_deref())?;
            match parsing::detect(&text) {
                Some(hint) => println!("markdown ({})", hint.as_str()),
                None => println!("plain"),
            }
        }
        Command::Convert {
            input,
            source_order,
        } => {
            let settings = Config::load()?.map(|c| c.convert).unwrap_or_default();
            let mut options = convert_options(&settings);
            if source_order {
                options.order = BlockOrder::SourceOrder;
            }
            let text = read_input(input.as_deref())?;
            let blocks = convert(&text, &options);
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Command::Paste { draft, input, at } => {
            let config_path = Config::config_path();
            let Some(config) = Config::load()? else {
                bail!(
                    "no config file found at {}; run 'init <DRAFTS_DIR>' first",
                    config_path.display()
                );
            };
            if let Err(e) = io::validate_drafts_dir(&config.drafts_path) {
                bail!(
                    "drafts path '{}' from config file '{}' is invalid: {e}",
                    config.drafts_path.display(),
                    config_path.display()
                );
            }

            let text = read_input(input.as_deref())?;
            let mut document = io::read_or_create_draft(&draft, &config.drafts_path)?;
            place_cursor(&mut document, at)?;

            let (document, inserted) =
                paste_into(document, &text, convert_options(&config.convert))?;
            io::write_draft(&draft, &config.drafts_path, &document)?;
            println!("inserted {inserted} block(s) into {draft}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let bin = args
        .first()
        .map(String::as_str)
        .unwrap_or("markdown-blockpaste-cli");

    let command = match parse_args(&args[1.min(args.len())..]) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", USAGE.replace("{bin}", bin));
            process::exit(1);
        }
    };

    run(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_blockpaste_engine::BlockKind;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_convert_with_flag() {
        let command = parse_args(&args(&["convert", "notes.md", "--source-order"])).unwrap();
        assert_eq!(
            command,
            Command::Convert {
                input: Some(PathBuf::from("notes.md")),
                source_order: true,
            }
        );
    }

    #[test]
    fn test_parse_dash_means_stdin() {
        let command = parse_args(&args(&["detect", "-"])).unwrap();
        assert_eq!(command, Command::Detect { input: None });
    }

    #[test]
    fn test_parse_paste_with_index() {
        let command = parse_args(&args(&["paste", "posts/a.json", "--at", "3"])).unwrap();
        assert_eq!(
            command,
            Command::Paste {
                draft: RelativePathBuf::from("posts/a.json"),
                input: None,
                at: Some(3),
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
        assert!(parse_args(&args(&["paste"])).is_err());
        assert!(parse_args(&args(&["paste", "a.json", "--at", "x"])).is_err());
        assert!(parse_args(&args(&["detect", "--source-order"])).is_err());
        assert!(parse_args(&args(&["convert", "--at", "1"])).is_err());
    }

    #[test]
    fn test_parse_init() {
        let command = parse_args(&args(&["init", "~/drafts"])).unwrap();
        assert_eq!(
            command,
            Command::Init {
                drafts_path: PathBuf::from("~/drafts"),
            }
        );
        assert!(parse_args(&args(&["init"])).is_err());
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config").join("config.toml");
        let drafts = temp_dir.path().join("drafts");

        init_config(&config_file, &drafts).unwrap();

        assert!(drafts.is_dir());
        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.drafts_path, drafts);
        assert_eq!(config.convert, ConvertConfig::default());
        assert!(init_config(&config_file, &drafts).is_err());
    }

    #[test]
    fn test_cursor_index_must_be_inside_draft() {
        let mut document =
            Document::from_blocks([Block::paragraph("a"), Block::paragraph("b")]);

        let err = place_cursor(&mut document, Some(99)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "block index 99 is out of range for a draft of 2 blocks"
        );
        assert!(place_cursor(&mut Document::new(), Some(0)).is_err());

        place_cursor(&mut document, Some(1)).unwrap();
        assert_eq!(document.current_cursor_index(), Some(1));
        place_cursor(&mut document, None).unwrap();
        assert_eq!(document.current_cursor_index(), None);
    }

    #[test]
    fn test_convert_options_follow_config() {
        let settings = ConvertConfig {
            default_language: "text".to_string(),
            line_break: "\n".to_string(),
            order: OrderSetting::SourceOrder,
        };
        let options = convert_options(&settings);
        assert_eq!(options.default_language, "text");
        assert_eq!(options.line_break, "\n");
        assert_eq!(options.order, BlockOrder::SourceOrder);
    }

    #[test]
    fn test_paste_markdown_into_draft_file() {
        let drafts = TempDir::new().unwrap();
        let draft = RelativePathBuf::from("post.json");
        let mut document = io::read_or_create_draft(&draft, drafts.path()).unwrap();
        document.set_cursor(None);

        let (document, inserted) = paste_into(
            document,
            "# Title\n\nBody text",
            ConvertOptions::default(),
        )
        .unwrap();
        io::write_draft(&draft, drafts.path(), &document).unwrap();

        assert_eq!(inserted, 2);
        let reloaded = io::read_draft(&draft, drafts.path()).unwrap();
        let kinds: Vec<_> = reloaded.blocks().map(Block::kind).collect();
        assert_eq!(kinds, vec![BlockKind::Header, BlockKind::Paragraph]);
    }

    #[test]
    fn test_plain_text_falls_back_to_one_paragraph() {
        let mut document = Document::from_blocks([Block::paragraph("first")]);
        document.set_cursor(Some(0));

        let (document, inserted) =
            paste_into(document, "just words\n", ConvertOptions::default()).unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(document.get(1), Some(&Block::paragraph("just words")));
    }

    #[test]
    fn test_empty_input_changes_nothing() {
        let (document, inserted) =
            paste_into(Document::new(), "  \n", ConvertOptions::default()).unwrap();
        assert_eq!(inserted, 0);
        assert!(document.is_empty());
    }
}

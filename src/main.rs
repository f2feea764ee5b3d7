use std::path::PathBuf;
use std::str::FromStr;

use clap::Command;
use fontsheet::{enrich, export, load, BlockClassifier, EnrichOptions, TableFormat};

fn main() {
    let command = Command::new("fontsheet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extracts a font's character repertoire into a table")
        .author("Fontsheet Developers")
        .arg(
            clap::Arg::new("font_path")
                .help("Path to the input font file (.ttf, .otf)")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("output")
                .help("Path to the output table file")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("format")
                .short('f')
                .long("format")
                .help("Table format: csv, xlsx, json, html or md (default: from the output extension)"),
        )
        .arg(
            clap::Arg::new("include_control_chars")
                .long("include-control-chars")
                .help("Include control characters (non-printable)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no_preview")
                .long("no-preview")
                .help("Replace control-character previews with a placeholder glyph")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .help("Set the level of verbosity")
                .action(clap::ArgAction::Count),
        );

    let args = command.get_matches();
    env_logger::Builder::new()
        .filter_level(match args.get_count("verbosity") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    let font_path = PathBuf::from(args.get_one::<String>("font_path").unwrap());
    let output_path = PathBuf::from(args.get_one::<String>("output").unwrap());

    let format = match args.get_one::<String>("format") {
        Some(name) => match TableFormat::from_str(name) {
            Ok(format) => format,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => match TableFormat::for_path(&output_path) {
            Some(format) => format,
            None => {
                log::error!(
                    "Cannot derive a table format from {:?}; pass one with --format",
                    output_path
                );
                std::process::exit(1);
            }
        },
    };

    log::info!("Loading {}", font_path.display());
    let character_map = match load(&font_path) {
        Ok(character_map) => character_map,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Font maps {} code points across {} glyphs",
        character_map.len(),
        character_map.glyph_count()
    );

    let options = EnrichOptions {
        include_control_chars: args.get_flag("include_control_chars"),
        show_preview: !args.get_flag("no_preview"),
    };
    let resolver = character_map.resolver();
    let mut observer = |processed: usize, total: usize| {
        if processed % 100 == 0 {
            log::info!("Processing characters: {processed}/{total}");
        }
    };
    let records = match enrich(
        character_map.mappings(),
        &options,
        BlockClassifier::bundled(),
        Some(&resolver),
        Some(&mut observer),
    ) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!("Successfully extracted {} characters", records.len());

    log::info!(
        "Saving as {} to {}",
        format.extension().to_uppercase(),
        output_path.display()
    );
    if let Err(e) = export::write_table(&records, format, &output_path) {
        log::error!("Conversion failed: {e}");
        std::process::exit(1);
    }

    println!(
        "Conversion complete! Extracted {} characters. File saved to: {}",
        records.len(),
        output_path.display()
    );
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad CLI entrypoint.
//!
//! By default this runs the interactive launcher strip against the user's
//! config file, seeding the default shortcuts on first run.
//!
//! Use `--import-bookmarks` to run a one-shot headless bookmark import
//! instead of the TUI.

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use naiad::import::{default_bookmarks_path, read_bookmarks_file, ImportError};
use naiad::store::{ConfigFile, ItemStore, StripSettings, WriteDurability};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<config-file>] [--durable-writes]\n  {program} [--config <file>] [--durable-writes]\n  {program} --demo\n  {program} [--config <file>] --import-bookmarks [<bookmarks-file>]\n\nIf config-file/--config is omitted, $NAIAD_CONFIG is used, falling back to\nthe platform config dir (e.g. $XDG_CONFIG_HOME/naiad/naiad.json).\n--demo runs against a throwaway config seeded with a sample strip and cannot\nbe combined with config-file/--config.\n\n--durable-writes opts into slower, best-effort durable persistence\n(fsync/sync where supported).\n\n--import-bookmarks flattens every url bookmark from the given file (or the\nbrowser's default bookmarks location) into top-level link entries and prints\nthe imported count."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    durable_writes: bool,
    demo: bool,
    import_bookmarks: Option<Option<String>>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.config_path = Some(path);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--import-bookmarks" => {
                if options.import_bookmarks.is_some() {
                    return Err(());
                }
                options.import_bookmarks = Some(None);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                // A positional argument names the bookmarks source when it
                // follows --import-bookmarks, otherwise the config file.
                match &mut options.import_bookmarks {
                    Some(source @ None) => *source = Some(arg),
                    _ => {
                        if options.config_path.is_some() {
                            return Err(());
                        }
                        options.config_path = Some(arg);
                    }
                }
            }
        }
    }

    if options.demo && (options.config_path.is_some() || options.import_bookmarks.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn default_config_path() -> PathBuf {
    if let Some(path) = env::var_os("NAIAD_CONFIG") {
        return PathBuf::from(path);
    }

    if cfg!(target_os = "windows") {
        if let Some(app_data) = env::var_os("APPDATA") {
            return PathBuf::from(app_data).join("naiad").join("naiad.json");
        }
    } else if let Some(config_dir) = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
    {
        return config_dir.join("naiad").join("naiad.json");
    }

    PathBuf::from("naiad.json")
}

fn demo_config_path() -> PathBuf {
    let now_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    env::temp_dir()
        .join(format!("naiad-demo-{}-{now_millis}", std::process::id()))
        .join("naiad.json")
}

fn run_headless_import(
    config: ConfigFile,
    source: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut store = ItemStore::open(config)?;

    let Some(path) = source.map(PathBuf::from).or_else(default_bookmarks_path) else {
        eprintln!("naiad: no default bookmarks location on this system; pass a file");
        return Ok(());
    };

    match read_bookmarks_file(&path) {
        Ok(root) => {
            let count = store.import_bookmarks(&root)?;
            println!("naiad: imported {count} bookmarks from {}", path.display());
        }
        Err(err @ ImportError::Missing { .. }) => {
            // A missing source is a reported condition, not a failure.
            eprintln!("naiad: {err}");
        }
        Err(err) => {
            eprintln!("naiad: {err} (nothing imported)");
        }
    }

    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "naiad".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config_path = if options.demo {
            demo_config_path()
        } else {
            options.config_path.clone().map(PathBuf::from).unwrap_or_else(default_config_path)
        };

        let config = if options.durable_writes {
            ConfigFile::new(config_path).with_durability(WriteDurability::Durable)
        } else {
            ConfigFile::new(config_path)
        };

        if let Some(source) = options.import_bookmarks {
            return run_headless_import(config, source);
        }

        let store = if options.demo {
            ItemStore::seed(config, naiad::tui::demo_strip(), StripSettings::default())?
        } else {
            ItemStore::open(config)?
        };

        naiad::tui::run_with_store(store)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("naiad: {err}");
        std::process::exit(1);
    }
}

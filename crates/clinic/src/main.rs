/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use clinic_content::{
    clean_markup, format_counter_value_with, io::load_bundle, io::load_config,
    normalize_phone_for_tel, resolve_api_suffix, tel_href, BundleView, ContentResolver,
};
use clinic_core::config::DEFAULT_CONFIG_FILE;
use clinic_core::{SiteConfig, SuffixPolicy};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug events (fallbacks, absorbed failures) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a content bundle for a UI language
    Render {
        /// Path to the content bundle (JSON or YAML)
        #[arg(index = 1)]
        bundle: PathBuf,

        /// UI language code (e.g. uz-latin, uz-cyrillic, ru, en, kz, ky, tg)
        #[arg(short, long, default_value = "uz-latin")]
        lang: String,

        /// Site configuration YAML file [default: ./clinic.yaml when present]
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clean upstream markup from a file, or stdin when no file is given
    Clean {
        path: Option<PathBuf>,
    },
    /// Show the API suffix read for a UI language code
    Suffix {
        code: String,

        /// Default for codes not in the language table
        #[arg(short, long, value_enum, default_value_t = Policy::Latin)]
        policy: Policy,
    },
    /// Format an animated counter frame
    Counter {
        current: u64,
        display: String,

        /// Thousands separator
        #[arg(short, long, default_value = ",")]
        separator: String,
    },
    /// Normalize a phone number for a tel: link
    Tel {
        phone: String,
    },
    /// Validate a content bundle and report record counts
    Validate {
        path: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Policy {
    Latin,
    Cyrillic,
}

impl From<Policy> for SuffixPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Latin => SuffixPolicy::Latin,
            Policy::Cyrillic => SuffixPolicy::Cyrillic,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            bundle,
            lang,
            config,
            json,
        } => {
            let site_config = match config {
                Some(ref path) => match load_config(path) {
                    Ok(c) => c,
                    Err(e) => {
                        tracing::error!(
                            path = %path.display(),
                            error = %e,
                            "failed to load site config"
                        );
                        eprintln!("Error loading config: {}", e);
                        std::process::exit(1);
                    }
                },
                None => SiteConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
            };

            let content = match load_bundle(&bundle) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };

            let resolver = ContentResolver::new(&site_config, lang);
            let view = resolver.bundle(&content);

            if json {
                match serde_json::to_string_pretty(&view) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Error serializing output: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_human(&view, &site_config);
            }
        }
        Commands::Clean { path } => {
            let raw = match read_input(path.as_deref()) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    std::process::exit(1);
                }
            };
            println!("{}", clean_markup(&raw));
        }
        Commands::Suffix { code, policy } => {
            println!("{}", resolve_api_suffix(&code, policy.into()));
        }
        Commands::Counter {
            current,
            display,
            separator,
        } => {
            println!("{}", format_counter_value_with(current, &display, &separator));
        }
        Commands::Tel { phone } => {
            println!("{}", normalize_phone_for_tel(&phone));
            if let Some(href) = tel_href(&phone) {
                println!("{}", href);
            }
        }
        Commands::Validate { path } => match load_bundle(&path) {
            Ok(content) => {
                println!("Content bundle is valid.");
                for (name, count) in content.counts() {
                    println!("  {:<14} {}", name, count);
                }
            }
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_section(title: &str, lines: Vec<String>) {
    if lines.is_empty() {
        return;
    }
    println!("{}:", title.to_uppercase());
    for line in lines {
        println!("  {}", line);
    }
    println!();
}

fn print_human(view: &BundleView, config: &SiteConfig) {
    println!("=== {} ===\n", view.language);

    if let Some(info) = &view.company_info {
        println!("{}", info.name);
        if !info.slogan.is_empty() {
            println!("{}", info.slogan);
        }
        println!();
    }

    print_section(
        "banners",
        view.banners
            .iter()
            .map(|b| format!("{} | {}", b.title, b.description))
            .collect(),
    );
    print_section(
        "services",
        view.services.iter().map(|s| s.title.clone()).collect(),
    );
    print_section(
        "faqs",
        view.faqs
            .iter()
            .map(|f| format!("{} -> {}", f.question, f.answer))
            .collect(),
    );
    print_section(
        "statistics",
        view.statistics
            .iter()
            .map(|s| {
                format!(
                    "{}: {}",
                    s.title,
                    format_counter_value_with(s.target, &s.display, config.counter_separator())
                )
            })
            .collect(),
    );
    print_section(
        "addresses",
        view.addresses.iter().map(|a| a.address.clone()).collect(),
    );
    print_section(
        "phones",
        view.phones
            .iter()
            .map(|p| match &p.tel {
                Some(tel) => format!("{} {} ({})", p.title, p.phone, tel),
                None => format!("{} {}", p.title, p.phone),
            })
            .collect(),
    );
    print_section(
        "work times",
        view.work_times
            .iter()
            .map(|w| format!("{} {}", w.days, w.hours))
            .collect(),
    );
    print_section(
        "videos",
        view.social_videos
            .iter()
            .map(|v| {
                let link = v.embed.as_deref().or(v.video.as_deref()).unwrap_or("");
                format!("{} {}", v.title, link)
            })
            .collect(),
    );
    print_section(
        "social",
        view.social_links
            .iter()
            .map(|l| {
                format!(
                    "{} {}",
                    l.name.as_deref().unwrap_or(""),
                    l.url.as_deref().unwrap_or("")
                )
            })
            .collect(),
    );
    print_section(
        "gallery",
        view.gallery
            .iter()
            .map(|g| format!("{} {}", g.image.as_deref().unwrap_or(""), g.alt))
            .collect(),
    );

    if let Some(about) = &view.about {
        print_section("about", vec![about.title.clone(), about.content.clone()]);
    }
}

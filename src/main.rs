use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ot_langtags::{
    LanguageTag, all_language_tags, by_tag, decode_tag, try_encode_tag, with_iso3_code,
};
use std::io::{self, Write};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ot-langtags")]
#[command(about = "Inspect OpenType language system tags")]
#[command(long_about = None)]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a tag given as text (`ENG`, `de`) or hex (`0x454E4720`)
    Lookup {
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// List every known tag in table order
    List {
        /// Only show deprecated tags
        #[arg(long)]
        deprecated: bool,
    },

    /// Show every tag covering an ISO 639-3 code
    Iso3 {
        #[arg(value_name = "CODE")]
        code: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ot_langtags=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Lookup { tag } => {
            let tag = parse_tag(&tag)?;
            debug!(tag, text = %decode_tag(tag), "looking up tag");
            let entry = by_tag(tag)?;
            print_entries(out, &[entry], cli.json)
        }
        Commands::List { deprecated } => {
            let entries: Vec<&LanguageTag> = all_language_tags()
                .iter()
                .filter(|e| !deprecated || e.is_deprecated())
                .collect();
            info!(count = entries.len(), "listing tags");
            print_entries(out, &entries, cli.json)
        }
        Commands::Iso3 { code } => {
            let entries: Vec<&LanguageTag> = with_iso3_code(&code).collect();
            if entries.is_empty() {
                bail!("no language tag covers ISO 639-3 code '{code}'");
            }
            print_entries(out, &entries, cli.json)
        }
    }
}

/// `0x`-prefixed hex, or 1 to 4 printable ASCII characters padded with spaces.
fn parse_tag(arg: &str) -> Result<u32> {
    if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).with_context(|| format!("invalid hex tag '{arg}'"));
    }

    try_encode_tag(arg)
        .with_context(|| format!("tag '{arg}' must be 1 to 4 printable ASCII characters"))
}

fn print_entries(out: &mut impl Write, entries: &[&LanguageTag], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    for e in entries {
        let iso639 = e.iso639_name().unwrap_or("-");
        let codes = e.iso3_codes().join(",");
        writeln!(
            out,
            "{:<4}  0x{:08X}  {:<40}  {:<30}  {}{}",
            e.identifier(),
            e.tag(),
            e.display_name(),
            iso639,
            if codes.is_empty() { "-" } else { codes.as_str() },
            if e.is_deprecated() { "  (deprecated)" } else { "" },
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ot_langtags::{LangTagError, encode_tag};

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parse_tag_pads_text() {
        assert_eq!(parse_tag("ENG").unwrap(), encode_tag("ENG"));
        assert_eq!(parse_tag("de").unwrap(), encode_tag("de"));
        assert_eq!(parse_tag("DFLT").unwrap(), encode_tag("DFLT"));
    }

    #[test]
    fn parse_tag_accepts_hex() {
        assert_eq!(parse_tag("0x454E4720").unwrap(), encode_tag("ENG"));
        assert_eq!(parse_tag("0X64652020").unwrap(), encode_tag("de"));
    }

    #[test]
    fn parse_tag_rejects_bad_input() {
        assert!(parse_tag("").is_err());
        assert!(parse_tag("ENGLISH").is_err());
        assert!(parse_tag("é").is_err());
        assert!(parse_tag("0xZZ").is_err());
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["ot-langtags", "--json", "lookup", "ENG"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Lookup { ref tag } if tag == "ENG"));

        let cli = Cli::try_parse_from(["ot-langtags", "list", "--deprecated"]).unwrap();
        assert!(matches!(cli.command, Commands::List { deprecated: true }));
    }

    #[test]
    fn lookup_prints_entry() {
        let out = run_args(&["ot-langtags", "lookup", "ENG"]).unwrap();
        assert!(out.starts_with("ENG   0x454E4720  English"), "{out}");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn lookup_miss_returns_not_found() {
        let err = run_args(&["ot-langtags", "lookup", "xyz"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown language tag 'xyz'");
        assert_eq!(
            err.downcast_ref::<LangTagError>(),
            Some(&LangTagError::NotFound {
                tag: encode_tag("xyz"),
                text: "xyz".to_string(),
            })
        );
    }

    #[test]
    fn list_deprecated_prints_only_dhv() {
        let out = run_args(&["ot-langtags", "list", "--deprecated"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("DHV "), "{out}");
        assert!(lines[0].ends_with("div  (deprecated)"), "{out}");
    }

    #[test]
    fn list_prints_every_entry_in_order() {
        let out = run_args(&["ot-langtags", "list"]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), all_language_tags().len());
        assert!(lines[0].starts_with("ABA "));
        assert!(lines[lines.len() - 1].starts_with("tmh "));
    }

    #[test]
    fn iso3_without_match_fails() {
        let err = run_args(&["ot-langtags", "iso3", "qqq"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no language tag covers ISO 639-3 code 'qqq'"
        );
    }

    #[test]
    fn iso3_lists_every_covering_entry() {
        let out = run_args(&["ot-langtags", "iso3", "div"]).unwrap();
        let ids: Vec<&str> = out
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["DHV", "DIV"]);
    }

    #[test]
    fn json_output_shape() {
        let out = run_args(&["ot-langtags", "--json", "iso3", "crx"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        let crr = &rows[1];
        assert_eq!(crr["identifier"], "CRR");
        assert_eq!(crr["tag"], encode_tag("CRR"));
        assert_eq!(crr["display_name"], "Carrier");
        assert_eq!(crr["iso639_name"], serde_json::Value::Null);
        assert_eq!(crr["iso3_codes"], serde_json::json!(["crx", "caf"]));
        assert_eq!(crr["deprecated"], false);
    }

    #[test]
    fn json_lookup_is_single_element_array() {
        let out = run_args(&["ot-langtags", "lookup", "--json", "0x64652020"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["identifier"], "de");
    }
}

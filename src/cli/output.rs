//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::args::{AutotagArgs, OutputFormat};
use crate::error::Result;
use crate::tagging::Tag;

/// Result structure for tag extraction.
#[derive(Debug, Serialize)]
pub struct TagReport {
    pub tags: Vec<Tag>,
    pub elapsed_ms: f64,
}

/// Output tags in the selected format.
pub fn output_tags(report: &TagReport, args: &AutotagArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => write_tags_human(&mut out, report, args),
        OutputFormat::Json => write_json(&mut out, report, args),
    }
}

/// Output any serializable result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &AutotagArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            write_generic_human(&mut out, &serde_json::to_value(result)?, "")
        }
        OutputFormat::Json => write_json(&mut out, result, args),
    }
}

fn write_tags_human<W: Write>(out: &mut W, report: &TagReport, args: &AutotagArgs) -> Result<()> {
    if report.tags.is_empty() && args.verbosity() > 0 {
        writeln!(out, "No tags found")?;
    }

    for tag in &report.tags {
        writeln!(out, "{:>8.3}  {}", tag.score, tag.value)?;
    }

    if args.verbosity() > 0 {
        writeln!(out)?;
        writeln!(out, "Analyzed in {:.3} ms", report.elapsed_ms)?;
    }
    Ok(())
}

fn write_generic_human<W: Write>(out: &mut W, value: &serde_json::Value, prefix: &str) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if val.is_object() {
                    write_generic_human(out, val, &format!("{prefix}{key}."))?;
                } else {
                    writeln!(out, "{prefix}{key}: {}", format_value(val))?;
                }
            }
        }
        _ => writeln!(out, "{}", format_value(value))?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &AutotagArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("{s:?}"),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::TermType;
    use clap::Parser;

    fn args(extra: &[&str]) -> AutotagArgs {
        let mut argv = vec!["autotag"];
        argv.extend_from_slice(extra);
        argv.push("config");
        AutotagArgs::try_parse_from(argv).unwrap()
    }

    fn report() -> TagReport {
        TagReport {
            tags: vec![
                Tag {
                    value: "new york".to_string(),
                    score: 3.5,
                    term_type: TermType::CapitalizedCompound,
                },
                Tag {
                    value: "york".to_string(),
                    score: 0.375,
                    term_type: TermType::Single,
                },
            ],
            elapsed_ms: 1.25,
        }
    }

    #[test]
    fn test_human_tags() {
        let mut buf = Vec::new();
        write_tags_human(&mut buf, &report(), &args(&[])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   3.500  new york");
        assert_eq!(lines[1], "   0.375  york");
        assert_eq!(lines[3], "Analyzed in 1.250 ms");
    }

    #[test]
    fn test_human_tags_quiet() {
        let mut buf = Vec::new();
        write_tags_human(&mut buf, &report(), &args(&["-q"])).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_json_tags() {
        let mut buf = Vec::new();
        write_json(&mut buf, &report(), &args(&["--format", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["tags"][0]["value"], "new york");
        assert_eq!(value["tags"][0]["term_type"], "capitalized_compound");
        assert_eq!(value["tags"][1]["score"], 0.375);
        assert_eq!(value["elapsed_ms"], 1.25);
    }

    #[test]
    fn test_generic_human_flattens_nested_objects() {
        let value = serde_json::json!({ "lowercase": true, "boosts": { "bigram": 2.5 } });
        let mut buf = Vec::new();
        write_generic_human(&mut buf, &value, "").unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("lowercase: true"));
        assert!(text.contains("boosts.bigram: 2.5"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&serde_json::Value::String("##!##".to_string())), "\"##!##\"");
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }
}

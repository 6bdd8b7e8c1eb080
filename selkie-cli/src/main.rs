//! Selkie CLI
//!
//! Builds a CSS selector from command-line steps and prints it.

mod steps;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use selkie_common::warning::{Warning, recorded_warnings, set_quiet};
use selkie_selector::SelectorFragment;
use serde::Serialize;

use steps::Step;

/// Selkie — build CSS selectors one checked part at a time
#[derive(Parser, Debug)]
#[command(name = "selkie")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"STEPS:
    element:<name>  id:<name>  class:<name>  attr:<expr>
    pseudo-class:<name>  pseudo-element:<name>
    +  >  ~  descendant  child  next-sibling  subsequent-sibling
    combinator:<symbol>      (any other symbol, used verbatim)

EXAMPLES:
    # Compound selector
    selkie id:main class:container class:editable

    # Attribute values are written verbatim between brackets
    selkie element:a 'attr:href$=".png"' pseudo-class:focus

    # Combinators join compounds left to right (quote > and ~ for the shell)
    selkie element:div id:main + element:p
    selkie element:nav '>' element:ul '~' element:li class:active

    # Inspect the builder's bookkeeping
    selkie --json element:a pseudo-element:after
"#)]
struct Cli {
    /// Selector parts and combinators, in order
    #[arg(value_name = "STEP", required = true)]
    steps: Vec<Step>,

    /// Print the selector, its bookkeeping and any warnings as JSON
    #[arg(long)]
    json: bool,

    /// Do not print warnings to stderr
    #[arg(short, long)]
    quiet: bool,
}

/// JSON output of `--json`.
#[derive(Serialize)]
struct Report<'a> {
    selector: &'a str,
    fragment: &'a SelectorFragment,
    warnings: Vec<Warning>,
}

/// Build the selector and render what gets printed on stdout.
fn render(cli: &Cli) -> Result<String> {
    set_quiet(cli.quiet || cli.json);

    let selector = steps::build(&cli.steps)?;

    if cli.json {
        let report = Report {
            selector: selector.as_str(),
            fragment: &selector,
            warnings: recorded_warnings(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(selector.to_string())
    }
}

fn main() {
    let cli = Cli::parse();

    match render(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use selkie_common::warning::{clear_warnings, is_quiet};
    use serde_json::Value;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("selkie").chain(args.iter().copied())).unwrap()
    }

    // The warning registry is process-wide, so every case that inspects it
    // runs in this one test.
    #[test]
    fn test_render_modes_and_warnings() {
        clear_warnings();

        // Plain output is just the selector text
        let plain = render(&cli(&["-q", "element:div", "id:main", "+", "element:p"])).unwrap();
        assert_eq!(plain, "div#main + p");
        assert!(is_quiet());

        // JSON report with an unrecognized combinator
        let json = render(&cli(&["--json", "element:a", "combinator:||", "element:b"])).unwrap();
        assert!(is_quiet(), "--json keeps stderr free of warnings");
        let report: Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = report.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        for key in ["selector", "fragment", "warnings"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(report["selector"], "a || b");
        assert_eq!(report["fragment"]["text"], "a || b");
        assert_eq!(report["fragment"]["combined"], true);
        assert_eq!(report["fragment"]["stage"], 0);

        let warnings = report["warnings"].as_array().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0]["component"], "selector");
        assert!(warnings[0]["message"].as_str().unwrap().contains(r#""||""#));

        // Known combinators add nothing to the report
        clear_warnings();
        let json = render(&cli(&["--json", "element:ul", ">", "element:li"])).unwrap();
        let report: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(report["warnings"], Value::Array(Vec::new()));

        set_quiet(false);
    }

    #[test]
    fn test_render_propagates_builder_errors() {
        let err = render(&cli(&["-q", "class:x", "id:y"])).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "id selector cannot follow class selector"
        );
    }

    #[test]
    fn test_steps_are_required() {
        assert!(Cli::try_parse_from(["selkie", "--json"]).is_err());
        assert!(Cli::try_parse_from(["selkie", "bogus"]).is_err());
    }
}

use anyhow::{bail, Context, Result};
use tracing::info;

use hexdrill::{
    init_logging, parse_measurement, FitSearch, HexDrillGenerator, HexDrillParameters, HexPattern,
    HexPatternParams, PatternReport, BUILD_DATE, VERSION,
};

const USAGE: &str = "\
Usage: hexdrill [HEX_SIZE] [OPTIONS]

Finds the best-fit corner drill size for a hex hole of the given
flat-to-flat size (default 0.5) and prints the resulting pattern.
Sizes accept decimal (0.75), fractional (3/8), or mixed (1-1/2) form.

Options:
  --relief SIZE   Add a relief hole pair of the given diameter per corner
  --ratio R       Target over/under-drill ratio for the sweep (default 1.0)
  --json          Print the report as JSON to stdout
  --gcode         Print a drilling G-code program to stdout
  --version       Print version information
  -h, --help      Print this help text";

struct CliArgs {
    hex_size: f64,
    relief_diameter: f64,
    target_ratio: f64,
    json: bool,
    gcode: bool,
}

fn parse_args(args: &[String]) -> Result<Option<CliArgs>> {
    let mut parsed = CliArgs {
        hex_size: 0.5,
        relief_diameter: 0.0,
        target_ratio: 1.0,
        json: false,
        gcode: false,
    };

    let mut iter = args.iter();
    let mut positional = 0;
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(None);
            }
            "--version" => {
                println!("hexdrill {} ({})", VERSION, BUILD_DATE);
                return Ok(None);
            }
            "--relief" => {
                let value = iter.next().context("--relief requires a size argument")?;
                parsed.relief_diameter =
                    parse_measurement(value).with_context(|| format!("bad relief size {value:?}"))?;
            }
            "--ratio" => {
                let value = iter.next().context("--ratio requires a number argument")?;
                parsed.target_ratio = value
                    .parse::<f64>()
                    .with_context(|| format!("bad ratio {value:?}"))?;
            }
            "--json" => parsed.json = true,
            "--gcode" => parsed.gcode = true,
            other if other.starts_with('-') && other.len() > 1 => {
                bail!("unknown option {other:?}\n{USAGE}");
            }
            other => {
                if positional > 0 {
                    bail!("unexpected argument {other:?}\n{USAGE}");
                }
                parsed.hex_size = parse_measurement(other)
                    .with_context(|| format!("bad hex size {other:?}"))?;
                positional += 1;
            }
        }
    }

    if !(parsed.hex_size.is_finite() && parsed.hex_size > 0.0) {
        bail!("hex size must be positive, got {}", parsed.hex_size);
    }
    if parsed.relief_diameter < 0.0 {
        bail!("relief size must not be negative");
    }
    Ok(Some(parsed))
}

fn main() -> Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(cli) = parse_args(&args)? else {
        return Ok(());
    };

    info!("Calculating initial best fit...");
    let fit = FitSearch::new(cli.hex_size)
        .with_target_ratio(cli.target_ratio)
        .run();

    // The sweep sizes the primary drill alone; relief holes are applied to
    // the selected size afterwards.
    let pattern = if cli.relief_diameter > 0.0 {
        HexPattern::new(
            HexPatternParams::new(cli.hex_size, fit.pattern.drill_diameter())
                .with_relief(cli.relief_diameter),
        )
    } else {
        fit.pattern
    };

    let report = PatternReport::from_pattern(&pattern);
    for line in report.render_lines() {
        info!("{line}");
    }

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    }

    if cli.gcode {
        let params = HexDrillParameters::new(
            pattern.hex_size(),
            pattern.drill_diameter(),
            pattern.relief_diameter(),
        );
        let program = HexDrillGenerator::new(params)
            .generate()
            .context("generating drill program")?;
        print!("{program}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cli = parse_args(&args(&[])).unwrap().unwrap();
        assert_eq!(cli.hex_size, 0.5);
        assert_eq!(cli.relief_diameter, 0.0);
        assert_eq!(cli.target_ratio, 1.0);
        assert!(!cli.json);
        assert!(!cli.gcode);
    }

    #[test]
    fn test_fractional_sizes() {
        let cli = parse_args(&args(&["1-1/2", "--relief", "1/16"]))
            .unwrap()
            .unwrap();
        assert_eq!(cli.hex_size, 1.5);
        assert_eq!(cli.relief_diameter, 0.0625);
    }

    #[test]
    fn test_flags() {
        let cli = parse_args(&args(&["0.5", "--json", "--gcode", "--ratio", "1.5"]))
            .unwrap()
            .unwrap();
        assert!(cli.json);
        assert!(cli.gcode);
        assert_eq!(cli.target_ratio, 1.5);
    }

    #[test]
    fn test_rejects_unknown_option() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["0.5", "0.25"])).is_err());
        assert!(parse_args(&args(&["0"])).is_err());
    }
}

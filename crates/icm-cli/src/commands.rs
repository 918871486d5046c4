use std::io::{self, BufRead, BufWriter, IsTerminal};

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use icm_cli::output::{validation_json, write_csv, write_text};
use icm_core::{GeneratorConfig, SerialRange, generate};
use icm_model::{EquipCatId, OwnerCode, OwnerLookup, Separators, SerialNumber};
use icm_standards::Registry;
use icm_validate::{Pattern, PatternKind, ValidationResult, canonical_patterns, validate};

use crate::cli::{GenerateArgs, ListArgs, PatternArg, ValidateArgs, ValidateOutputArg};
use crate::summary::{print_list, print_validation};

/// Counts at or above this draw a progress bar.
const PROGRESS_THRESHOLD: usize = 10_000;

/// Returns whether every input was valid.
pub fn run_validate(args: &ValidateArgs, registry: &Registry) -> Result<bool> {
    let inputs = if args.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        args.inputs.clone()
    };
    if inputs.is_empty() {
        bail!("nothing to validate, pass markings as arguments or on stdin");
    }

    let decoders = registry.decoders();
    let patterns: Vec<Pattern<'_>> = match args.pattern {
        PatternArg::Auto => canonical_patterns(decoders),
        PatternArg::ContainerCode => vec![
            PatternKind::ContainerCodeWithSizeType.build(decoders),
            PatternKind::ContainerCode.build(decoders),
        ],
        PatternArg::Owner => vec![PatternKind::Owner.build(decoders)],
        PatternArg::SizeType => vec![PatternKind::SizeType.build(decoders)],
    };

    let results: Vec<(String, ValidationResult)> = inputs
        .into_iter()
        .map(|input| {
            let result = validate(&input, &patterns);
            (input, result)
        })
        .collect();
    let all_valid = results.iter().all(|(_, result)| result.is_valid());
    info!(
        inputs = results.len(),
        invalid = results.iter().filter(|(_, result)| !result.is_valid()).count(),
        "validation finished"
    );

    match args.output {
        ValidateOutputArg::Table => {
            for (input, result) in &results {
                print_validation(input, result);
            }
        }
        ValidateOutputArg::Json => println!("{}", validation_json(&results)?),
    }
    Ok(all_valid)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

pub fn run_generate(args: &GenerateArgs, registry: &Registry) -> Result<()> {
    let owners = owner_pool(args, registry)?;
    let category = EquipCatId::parse(&args.category)
        .with_context(|| format!("invalid equipment category id '{}'", args.category))?;

    let mut config = GeneratorConfig::new(owners)
        .with_category(category)
        .exclude_check_digit_10(args.exclude_check_digit_10)
        .exclude_transposition_errors(args.exclude_transposition_errors);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let (Some(start), Some(end)) = (&args.start, &args.end) {
        let start = SerialNumber::parse(start).context("invalid --start serial number")?;
        let end = SerialNumber::parse(end).context("invalid --end serial number")?;
        config = config.with_range(SerialRange::new(start, end));
    }
    let count = match args.count {
        Some(count) => count,
        None if config.range().is_some() => config.capacity(),
        None => 1,
    };

    let generator = generate(config.with_count(count)).context("cannot generate codes")?;
    let progress = progress_bar(count)?;
    let codes = generator.inspect(|_| progress.inc(1));
    let stdout = BufWriter::new(io::stdout().lock());
    let written = if args.csv {
        write_csv(stdout, codes)?
    } else {
        write_text(stdout, codes, &separators(args))?
    };
    progress.finish_and_clear();
    info!(count = written, "codes generated");
    Ok(())
}

fn owner_pool(args: &GenerateArgs, registry: &Registry) -> Result<Vec<OwnerCode>> {
    if args.owners.is_empty() {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let picked = registry.random_codes(1, &mut rng);
        if picked.is_empty() {
            bail!("no registered owner codes to choose from, pass --owner");
        }
        return picked
            .iter()
            .map(|code| OwnerCode::parse(code).with_context(|| format!("registry owner '{code}'")))
            .collect();
    }
    args.owners
        .iter()
        .map(|code| {
            let owner =
                OwnerCode::parse(code).with_context(|| format!("invalid owner code '{code}'"))?;
            if OwnerLookup::decode(registry, owner.as_str()).is_none() {
                warn!(owner = %owner, "owner code is not registered");
            }
            Ok(owner)
        })
        .collect()
}

fn separators(args: &GenerateArgs) -> Separators {
    Separators {
        owner_equip: args.sep_owner_equip.clone(),
        equip_serial: args.sep_equip_serial.clone(),
        serial_check: args.sep_serial_check.clone(),
        check_size: args.sep_check_size.clone(),
        size_type: args.sep_size_type.clone(),
    }
}

fn progress_bar(count: usize) -> Result<ProgressBar> {
    if count < PROGRESS_THRESHOLD || !io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} codes ({eta})")
        .context("progress bar template")?;
    let bar = ProgressBar::new(count as u64);
    bar.set_style(style);
    Ok(bar)
}

pub fn run_list(args: &ListArgs, registry: &Registry) {
    print_list(registry, args.table);
}

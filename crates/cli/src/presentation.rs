// crates/cli/src/presentation.rs
use crate::config::OutputSettings;
use crate::error::Result;
use crate::options::OutputFormat;
use lexstat_engine::report::{Report, TokenCount};
use std::fs::File;
use std::io::{self, BufWriter, Write};

const METRIC_WIDTH: usize = 19;

/// Render `reports` to the configured destination.
///
/// # Errors
/// Fails when the output file cannot be created or written.
pub fn write_results(reports: &[Report], settings: &OutputSettings) -> Result<()> {
    log::debug!("rendering {} report(s) as {:?}", reports.len(), settings.format);
    match &settings.path {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            render(&mut out, reports, settings.format)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render(&mut out, reports, settings.format)?;
            out.flush()?;
        }
    }
    Ok(())
}

/// # Errors
/// Fails on write or serialisation errors.
pub fn render(out: &mut dyn Write, reports: &[Report], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, reports)?,
        OutputFormat::Csv => write_sv(out, reports, ',')?,
        OutputFormat::Tsv => write_sv(out, reports, '\t')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => out.write_all(serde_yaml::to_string(reports)?.as_bytes())?,
        OutputFormat::Md => write_markdown(out, reports)?,
    }
    Ok(())
}

fn metrics(report: &Report) -> [(&'static str, String); 3] {
    [
        ("Total Words", report.total_count.to_string()),
        ("Unique Words", report.unique_count.to_string()),
        ("Lexical Diversity", report.diversity.to_string()),
    ]
}

/// Ranked sections in display order: (title, entries).
fn sections(report: &Report) -> Vec<(String, &[TokenCount])> {
    let mut out = vec![(format!("Top {} Words", report.top_k.len()), report.top_k.as_slice())];
    if let Some(bottom) = &report.bottom_k {
        out.push((format!("Bottom {} Words", bottom.len()), bottom.as_slice()));
    }
    if let Some(ranking) = &report.ranking {
        out.push(("Ranking".to_string(), ranking.as_slice()));
    }
    out
}

fn write_table(out: &mut dyn Write, reports: &[Report]) -> io::Result<()> {
    let multi = reports.len() > 1;
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if multi {
            writeln!(out, "== {} ==", report.source)?;
        }
        writeln!(out, "{:<METRIC_WIDTH$}{}", "Metric", "Value")?;
        for (metric, value) in metrics(report) {
            writeln!(out, "{metric:<METRIC_WIDTH$}{value}")?;
        }
        for (title, entries) in sections(report) {
            writeln!(out)?;
            writeln!(out, "{title}:")?;
            for e in entries {
                writeln!(out, "{}: {}", e.token, e.count)?;
            }
        }
    }
    Ok(())
}

fn escape_field(field: &str, delimiter: char) -> String {
    if delimiter == ',' && (field.contains(',') || field.contains('"') || field.contains('\n')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else if delimiter == '\t' {
        field.replace(['\t', '\n'], " ")
    } else {
        field.to_string()
    }
}

fn write_row(out: &mut dyn Write, fields: &[String], delimiter: char) -> io::Result<()> {
    let row: Vec<String> = fields.iter().map(|f| escape_field(f, delimiter)).collect();
    writeln!(out, "{}", row.join(&delimiter.to_string()))
}

fn prefixed(source: Option<&str>, rest: &[&str]) -> Vec<String> {
    source
        .into_iter()
        .chain(rest.iter().copied())
        .map(str::to_string)
        .collect()
}

fn top_entries(report: &Report) -> Option<&[TokenCount]> {
    Some(report.top_k.as_slice())
}

fn bottom_entries(report: &Report) -> Option<&[TokenCount]> {
    report.bottom_k.as_deref()
}

fn ranking_entries(report: &Report) -> Option<&[TokenCount]> {
    report.ranking.as_deref()
}

fn write_sv(out: &mut dyn Write, reports: &[Report], delimiter: char) -> io::Result<()> {
    let multi = reports.len() > 1;
    let header_prefix = multi.then_some("source");
    let source_of = |report: &Report| multi.then(|| report.source.clone());

    write_row(out, &prefixed(header_prefix, &["metric", "value"]), delimiter)?;
    for report in reports {
        let source = source_of(report);
        for (metric, value) in metrics(report) {
            write_row(out, &prefixed(source.as_deref(), &[metric, value.as_str()]), delimiter)?;
        }
    }

    let blocks: [(&str, fn(&Report) -> Option<&[TokenCount]>); 3] = [
        ("token", top_entries),
        ("bottom", bottom_entries),
        ("ranking", ranking_entries),
    ];
    for (label, select) in blocks {
        if !reports.iter().any(|r| select(r).is_some()) {
            continue;
        }
        writeln!(out)?;
        write_row(out, &prefixed(header_prefix, &[label, "count"]), delimiter)?;
        for report in reports {
            let source = source_of(report);
            for e in select(report).unwrap_or_default() {
                let count = e.count.to_string();
                write_row(out, &prefixed(source.as_deref(), &[e.token.as_str(), count.as_str()]), delimiter)?;
            }
        }
    }
    Ok(())
}

fn write_markdown(out: &mut dyn Write, reports: &[Report]) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "### {}", report.source.replace('|', "\\|"))?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|:---|---:|")?;
        for (metric, value) in metrics(report) {
            writeln!(out, "| {metric} | {value} |")?;
        }
        for (title, entries) in sections(report) {
            writeln!(out)?;
            writeln!(out, "**{title}**")?;
            writeln!(out)?;
            for (rank, e) in entries.iter().enumerate() {
                writeln!(out, "{}. {}: {}", rank + 1, e.token, e.count)?;
            }
        }
    }
    Ok(())
}

// Result writer for per-station uptime
use crate::domain::fleet::UptimeResult;
use crate::infrastructure::config::OutputFormat;
use std::io::Write;

/// Write `results` in the order given.
///
/// Text output is one `<station_id> <percentage>` line per station; JSON output
/// is a single array of `{"station_id", "uptime"}` objects.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[UptimeResult],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{} {}", result.station_id, result.percentage)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

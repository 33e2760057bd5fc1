use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use log::{info, warn};

/// Reads keywords from `path`.
///
/// `.csv` files use the `keyword` column (first column when no header
/// matches). Anything else is one keyword per line; blank lines and
/// `#` comments are ignored.
pub fn load_keywords<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let keywords = if is_csv { load_csv(path)? } else { load_lines(path)? };
    if keywords.is_empty() {
        warn!("Keyword file {:?} contains no keywords", path);
    } else {
        info!("Loaded {} keywords from {:?}", keywords.len(), path);
    }
    Ok(keywords)
}

fn load_lines(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Could not read keyword file {:?}: {}", path, e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn load_csv(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let file = File::open(path)
        .map_err(|e| format!("Could not open CSV file {:?}: {}", path, e))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.eq_ignore_ascii_case("keyword"))
        .unwrap_or(0);

    let mut keywords = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(record) => {
                if let Some(keyword) = record.get(column).filter(|k| !k.is_empty()) {
                    keywords.push(keyword.to_string());
                }
            }
            Err(e) => warn!("Error parsing CSV record: {}", e),
        }
    }
    Ok(keywords)
}

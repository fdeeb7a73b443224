//! JSON output writer

use crate::error::{OutputError, Result};
use crate::generate::ProvidersDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the document to `path` as pretty-printed JSON (2-space indentation)
pub fn write_document(doc: &ProvidersDocument, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::FileCreate {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| OutputError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_multi;
    use crate::provider::ProviderSpec;

    #[test]
    fn test_write_and_reparse() {
        let specs: Vec<ProviderSpec> = vec!["infura:TOK".parse().unwrap()];
        let doc = generate_multi(&specs, &["ethereum".to_string()], &["mainnet".to_string()]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.json");
        write_document(&doc, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        // 2-space indentation
        assert!(content.contains("\n  \"chains\""));

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["chains"][0]["chainId"], 1);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let specs: Vec<ProviderSpec> = vec!["infura:TOK".parse().unwrap()];
        let doc = generate_multi(&specs, &["ethereum".to_string()], &["mainnet".to_string()]);

        let err = write_document(&doc, Path::new("/nonexistent/dir/providers.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/providers.json"));
    }
}

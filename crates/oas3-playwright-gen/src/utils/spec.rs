use std::{
  ffi::OsStr,
  fmt,
  path::{Path, PathBuf},
};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Where the OpenAPI document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  File(PathBuf),
  Url(String),
}

impl SpecSource {
  /// Inputs starting with `http://` or `https://` are fetched, everything else
  /// is treated as a local path.
  #[must_use]
  pub fn parse(input: &str) -> Self {
    if input.starts_with("http://") || input.starts_with("https://") {
      Self::Url(input.to_string())
    } else {
      Self::File(PathBuf::from(input))
    }
  }

  fn format(&self) -> SpecFormat {
    match self {
      Self::File(path) => SpecFormat::from_path(path),
      Self::Url(url) => {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        SpecFormat::from_path(Path::new(path))
      }
    }
  }
}

impl fmt::Display for SpecSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Url(url) => f.write_str(url),
    }
  }
}

enum SpecBytes {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

pub struct SpecLoader {
  bytes: SpecBytes,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(source: &SpecSource) -> anyhow::Result<Self> {
    let bytes = match source {
      SpecSource::File(path) => SpecBytes::Mapped(
        AsyncMmapFile::open(path)
          .await
          .with_context(|| format!("failed to open {}", path.display()))?,
      ),
      SpecSource::Url(url) => SpecBytes::Fetched(fetch(url).await?),
    };

    Ok(Self {
      bytes,
      format: source.format(),
    })
  }

  fn as_slice(&self) -> &[u8] {
    match &self.bytes {
      SpecBytes::Mapped(file) => file.as_slice(),
      SpecBytes::Fetched(bytes) => bytes,
    }
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    parse_document(self.as_slice(), self.format)
  }
}

async fn fetch(url: &str) -> anyhow::Result<Vec<u8>> {
  let response = reqwest::get(url)
    .await
    .with_context(|| format!("failed to fetch {url}"))?
    .error_for_status()?;
  Ok(response.bytes().await?.to_vec())
}

pub(crate) fn parse_document(bytes: &[u8], format: SpecFormat) -> anyhow::Result<Document> {
  match format {
    SpecFormat::Json => serde_json::from_slice(bytes).context("invalid OpenAPI JSON document"),
    SpecFormat::Yaml => {
      let content = std::str::from_utf8(bytes)?;
      serde_yaml::from_str(content).context("invalid OpenAPI YAML document")
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  const YAML_SPEC: &str = r"
openapi: 3.0.0
info:
  title: Yaml API
  version: 1.0.0
paths:
  /health:
    get:
      summary: Health check
      responses:
        200:
          description: ok
";

  #[test]
  fn test_spec_format_from_extension() {
    assert_eq!(SpecFormat::from_extension("yaml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("yml"), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_extension("json"), SpecFormat::Json);
    assert_eq!(SpecFormat::from_extension("txt"), SpecFormat::Json);
  }

  #[test]
  fn test_spec_source_parse() {
    assert_eq!(
      SpecSource::parse("https://example.com/openapi.yaml"),
      SpecSource::Url("https://example.com/openapi.yaml".to_string())
    );
    assert_eq!(
      SpecSource::parse("specs/openapi.json"),
      SpecSource::File(PathBuf::from("specs/openapi.json"))
    );
  }

  #[test]
  fn test_url_format_ignores_query() {
    let source = SpecSource::parse("https://example.com/openapi.yml?version=2");
    assert_eq!(source.format(), SpecFormat::Yaml);
    let source = SpecSource::parse("http://localhost:8080/v3/api-docs");
    assert_eq!(source.format(), SpecFormat::Json);
  }

  #[test]
  fn test_parse_yaml_document_with_numeric_status_keys() {
    let document = parse_document(YAML_SPEC.as_bytes(), SpecFormat::Yaml).unwrap();
    let item = document.paths.get("/health").unwrap();
    let operation = item.operations.values().next().unwrap();
    assert_eq!(operation.summary.as_deref(), Some("Health check"));
    assert!(operation.responses.contains_key("200"));
  }

  #[test]
  fn test_parse_invalid_json_reports_context() {
    let err = parse_document(b"{ not json", SpecFormat::Json).unwrap_err();
    assert!(err.to_string().contains("invalid OpenAPI JSON document"));
  }

  #[tokio::test]
  async fn test_loader_reads_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(YAML_SPEC.as_bytes()).unwrap();

    let source = SpecSource::File(file.path().to_path_buf());
    let document = SpecLoader::open(&source).await.unwrap().parse().unwrap();

    assert_eq!(document.info.unwrap().title, "Yaml API");
    assert_eq!(document.paths.len(), 1);
  }
}

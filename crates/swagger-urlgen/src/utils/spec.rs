use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use thiserror::Error;

use crate::document::SwaggerDocument;

#[derive(Debug, Error)]
pub enum SpecLoadError {
  #[error("Could not find swagger spec file {}", path.display())]
  NotFound { path: PathBuf },
  #[error("Could not read swagger spec file {}: {message}", path.display())]
  Unreadable { path: PathBuf, message: String },
  #[error("Swagger spec is not valid UTF-8: {0}")]
  Utf8(#[from] std::str::Utf8Error),
  #[error("Invalid JSON swagger spec: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Invalid YAML swagger spec: {0}")]
  Yaml(#[from] serde_yaml::Error),
}

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

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }

  pub fn parse(self, content: &[u8]) -> Result<SwaggerDocument, SpecLoadError> {
    match self {
      Self::Json => Ok(serde_json::from_slice(content)?),
      Self::Yaml => {
        let content = std::str::from_utf8(content)?;
        Ok(serde_yaml::from_str(content)?)
      }
    }
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> Result<Self, SpecLoadError> {
    if !path.is_file() {
      return Err(SpecLoadError::NotFound {
        path: path.to_path_buf(),
      });
    }

    let file = AsyncMmapFile::open(path)
      .await
      .map_err(|e| SpecLoadError::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
      })?;

    Ok(Self {
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn parse(&self) -> Result<SwaggerDocument, SpecLoadError> {
    self.format.parse(self.file.as_slice())
  }
}

use strum::{Display, EnumString};

/// One concrete request shape to exercise.
///
/// Ordering compares `url`, then `http_method`, then `media_type` (`None`
/// first), so it agrees with equality and a `BTreeSet` of descriptors
/// collapses true duplicates while listing URLs in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestDescriptor {
  pub url: String,
  pub http_method: String,
  pub media_type: Option<String>,
}

impl RequestDescriptor {
  #[must_use]
  pub fn new(url: impl Into<String>, http_method: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      http_method: http_method.into(),
      media_type: None,
    }
  }

  #[must_use]
  pub fn with_media_type(&self, media_type: impl Into<String>) -> Self {
    Self {
      media_type: Some(media_type.into()),
      ..self.clone()
    }
  }

  #[must_use]
  pub fn with_url(&self, url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      ..self.clone()
    }
  }

  /// Empty string when no media type is attached.
  #[must_use]
  pub fn media_type_str(&self) -> &str {
    self.media_type.as_deref().unwrap_or_default()
  }

  #[must_use]
  pub fn render(&self, template: &LineTemplate) -> String {
    template.render(self)
  }
}

/// Descriptor fields a line template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum TemplateField {
  #[strum(serialize = "produces")]
  Produces,
  #[strum(serialize = "httpMethod")]
  HttpMethod,
  #[strum(serialize = "url")]
  Url,
}

impl TemplateField {
  fn value<'a>(self, descriptor: &'a RequestDescriptor) -> &'a str {
    match self {
      Self::Produces => descriptor.media_type_str(),
      Self::HttpMethod => &descriptor.http_method,
      Self::Url => &descriptor.url,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplatePart {
  Literal(String),
  Field(TemplateField),
}

/// A parsed output line template such as `{produces} {httpMethod} {url}`.
///
/// Brace-delimited text that is not a known field stays literal. Rendering is
/// a single pass, so substituted values are never scanned for tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
  parts: Vec<TemplatePart>,
}

impl LineTemplate {
  pub const DEFAULT: &'static str = "{produces} {httpMethod} {url}";

  #[must_use]
  pub fn parse(template: &str) -> Self {
    let mut parts = vec![];
    let mut literal = String::new();
    let mut rest = template;

    while let Some(open_pos) = rest.find('{') {
      let after_open = &rest[open_pos + 1..];
      let field = after_open
        .find('}')
        .and_then(|close_pos| after_open[..close_pos].parse::<TemplateField>().ok().map(|f| (f, close_pos)));

      match field {
        Some((field, close_pos)) => {
          literal.push_str(&rest[..open_pos]);
          if !literal.is_empty() {
            parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
          }
          parts.push(TemplatePart::Field(field));
          rest = &after_open[close_pos + 1..];
        }
        None => {
          literal.push_str(&rest[..=open_pos]);
          rest = after_open;
        }
      }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
      parts.push(TemplatePart::Literal(literal));
    }

    Self { parts }
  }

  #[must_use]
  pub fn render(&self, descriptor: &RequestDescriptor) -> String {
    self.parts.iter().fold(String::new(), |mut line, part| {
      match part {
        TemplatePart::Literal(text) => line.push_str(text),
        TemplatePart::Field(field) => line.push_str(field.value(descriptor)),
      }
      line
    })
  }

  #[cfg(test)]
  pub fn fields(&self) -> impl Iterator<Item = TemplateField> + '_ {
    self.parts.iter().filter_map(|part| match part {
      TemplatePart::Field(field) => Some(*field),
      TemplatePart::Literal(_) => None,
    })
  }
}

impl Default for LineTemplate {
  fn default() -> Self {
    Self::parse(Self::DEFAULT)
  }
}

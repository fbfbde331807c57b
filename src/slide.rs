use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "text")]
    pub primary_text: String,
    #[serde(rename = "image")]
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Slide {
    pub fn new(primary_text: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            title: None,
            primary_text: primary_text.into(),
            image_ref: image_ref.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    // Selector items show the title when present, the text otherwise
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.primary_text)
    }
}

// --- Store ---

// Fixed, ordered and non-empty. Index arithmetic wraps modulo count().
#[derive(Debug, Clone)]
pub struct SlideStore {
    slides: Vec<Slide>,
}

impl SlideStore {
    pub fn new(slides: Vec<Slide>) -> Option<Self> {
        if slides.is_empty() {
            None
        } else {
            Some(Self { slides })
        }
    }

    pub fn get(&self, index: usize) -> &Slide {
        &self.slides[index % self.slides.len()]
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn next(&self, index: usize) -> usize {
        (index % self.count() + 1) % self.count()
    }

    pub fn prev(&self, index: usize) -> usize {
        (index % self.count() + self.count() - 1) % self.count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

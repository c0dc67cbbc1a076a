pub mod content;

use serde::Serialize;
use thiserror::Error;

use crate::theme::{ThemeName, ThemeStyle, theme_style};

/// Data-integrity violations of a slide table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck contains no slides")]
    EmptyDeck,

    #[error("slide at position {position} has id {id}, expected {expected}")]
    IdMismatch {
        position: usize,
        id: u32,
        expected: u32,
    },

    #[error("slide {id} has no title")]
    MissingTitle { id: u32 },

    #[error("slide {id} has no image")]
    MissingImage { id: u32 },

    #[error("missing theme: {0}")]
    MissingTheme(String),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bullet {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Insight {
    pub headline: &'static str,
    pub highlight: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SlideImage {
    pub src: &'static str,
    pub alt: &'static str,
}

/// One immutable unit of narrative content.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Slide {
    pub id: u32,
    pub theme: ThemeName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<&'static str>,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub bullets: &'static [Bullet],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub insights: &'static [Insight],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    pub image: SlideImage,
}

impl Slide {
    /// Starting point for table entries; `title` and `image` must be filled in.
    pub const BLANK: Slide = Slide {
        id: 0,
        theme: ThemeName::Emerald,
        eyebrow: None,
        title: "",
        subtitle: None,
        description: None,
        bullets: &[],
        insights: &[],
        quote: None,
        metric: None,
        footer_note: None,
        cta: None,
        image: SlideImage { src: "", alt: "" },
    };

    pub fn style(&self) -> ThemeStyle {
        self.theme.style()
    }
}

/// The ordered, validated slide table.
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    title: &'static str,
    slides: &'static [Slide],
}

impl Deck {
    /// Wrap a slide table, rejecting it if any invariant is violated.
    pub fn new(title: &'static str, slides: &'static [Slide]) -> Result<Self, DeckError> {
        let deck = Self { title, slides };
        deck.validate()?;
        Ok(deck)
    }

    /// The built-in Eco Vibe Bottles pitch.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::new(content::DECK_TITLE, &content::SLIDES)
    }

    /// Check the table once: ids follow positions, every slide has a title and an image.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for (position, slide) in self.slides.iter().enumerate() {
            let expected = position as u32 + 1;
            if slide.id != expected {
                return Err(DeckError::IdMismatch {
                    position,
                    id: slide.id,
                    expected,
                });
            }
            if slide.title.trim().is_empty() {
                return Err(DeckError::MissingTitle { id: slide.id });
            }
            if slide.image.src.trim().is_empty() {
                return Err(DeckError::MissingImage { id: slide.id });
            }
            theme_style(slide.theme.as_str())?;
        }
        Ok(())
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Slide at `index`. Callers guarantee `index < len()`.
    pub fn get_slide(&self, index: usize) -> &'static Slide {
        assert!(
            index < self.slides.len(),
            "slide index {index} out of range for a deck of {}",
            self.slides.len()
        );
        &self.slides[index]
    }

    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }
}

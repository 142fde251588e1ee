use serde::{Deserialize, Serialize};

/// Image shown in place of a slide image that cannot be resolved.
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/800x450/a16207/fff7ed?text=Bild+nicht+gefunden";

/// One slideshow card: image, headline, short caption and the long text shown on hover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub caption: String,
    pub full_text: String,
}

impl Slide {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        caption: impl Into<String>,
        full_text: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            caption: caption.into(),
            full_text: full_text.into(),
        }
    }

    pub fn image_or_placeholder(&self) -> &str {
        if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image
        }
    }
}

/// The four landing page slides.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "https://placehold.co/800x450/a16207/fff7ed?text=Reetro+Idee+1",
            "Klassiker Neu Interpretiert",
            "Alte Geschichten, neue Formate.",
            "Wir nehmen zeitlose Erzählstrukturen und transformieren sie in immersive digitale \
             Erlebnisse, die die nächste Generation begeistern.",
        ),
        Slide::new(
            "https://placehold.co/800x450/7c2d12/fff7ed?text=Reetro+Idee+2",
            "Design von Gestern für Heute",
            "Retro-Ästhetik trifft moderne Usability.",
            "Entdecke Benutzeroberflächen, die den Charme vergangener Jahrzehnte bewahren und \
             gleichzeitig intuitiv und hochfunktional sind.",
        ),
        Slide::new(
            "https://placehold.co/800x450/b45309/fff7ed?text=Reetro+Idee+3",
            "Technologie mit Seele",
            "Innovationen, die sich vertraut anfühlen.",
            "Unsere Produkte integrieren die neuesten Technologien auf eine Weise, die sich \
             organisch anfühlt und an traditionelle Interaktionen erinnert.",
        ),
        Slide::new(
            "https://placehold.co/800x450/d97706/fff7ed?text=Reetro+Idee+4",
            "Nachhaltige Innovationen",
            "Zukunft bauen, Vergangenheit ehren.",
            "Wir entwickeln nachhaltige Lösungen, die nicht nur zukunftsorientiert sind, sondern \
             auch die Langlebigkeit und Qualität klassischer Produkte widerspiegeln.",
        ),
    ]
}

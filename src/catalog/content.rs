use serde::Deserialize;

/// Structured content of one slide, drawn by the generic stage templates.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SlideContent {
    pub kicker: Option<String>,
    pub title: Option<String>,
    pub lead: Option<String>,
    pub blocks: Vec<Block>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Block {
    Text {
        text: String,
    },
    Bullets {
        #[serde(default)]
        heading: Option<String>,
        items: Vec<String>,
    },
    Tags {
        items: Vec<String>,
    },
    Cards {
        cards: Vec<Card>,
    },
    Steps {
        steps: Vec<Step>,
    },
    Metrics {
        items: Vec<Metric>,
    },
    Code {
        lines: Vec<String>,
    },
    Callout {
        text: String,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl SlideContent {
    /// Content shown when a renderer has no entry for a slide id.
    pub fn placeholder(slide_id: &str, position: usize) -> Self {
        Self {
            title: Some(slide_id.to_string()),
            blocks: vec![Block::Callout {
                text: format!("Missing slide: {slide_id} (index {position})"),
            }],
            ..Self::default()
        }
    }

    /// Every piece of visible copy in reading order.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        lines.extend(self.kicker.iter().cloned());
        lines.extend(self.title.iter().cloned());
        lines.extend(self.lead.iter().cloned());
        for block in &self.blocks {
            match block {
                Block::Text { text } | Block::Callout { text } => lines.push(text.clone()),
                Block::Bullets { heading, items } => {
                    lines.extend(heading.iter().cloned());
                    lines.extend(items.iter().cloned());
                }
                Block::Tags { items } | Block::Code { lines: items } => {
                    lines.extend(items.iter().cloned())
                }
                Block::Cards { cards } => {
                    for card in cards {
                        lines.push(card.title.clone());
                        lines.extend(card.points.iter().cloned());
                    }
                }
                Block::Steps { steps } => {
                    for step in steps {
                        lines.push(step.title.clone());
                        lines.extend(step.detail.iter().cloned());
                    }
                }
                Block::Metrics { items } => {
                    lines.extend(items.iter().map(|m| format!("{} {}", m.label, m.value)))
                }
            }
        }
        lines.extend(self.footer.iter().cloned());
        lines
    }
}

//! Transport-agnostic replies.

use tarot_render::Section;

/// Accent color of an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Spread listings.
    Purple,
    /// Readings and help.
    DarkPurple,
    /// Major arcana cards.
    Gold,
    /// Minor arcana cards.
    Blue,
    /// Deck listing.
    DarkGreen,
    /// Daily card.
    DarkBlue,
}

impl Accent {
    /// 24-bit RGB value.
    pub fn rgb(self) -> u32 {
        match self {
            Self::Purple => 0x9B59B6,
            Self::DarkPurple => 0x71368A,
            Self::Gold => 0xF1C40F,
            Self::Blue => 0x3498DB,
            Self::DarkGreen => 0x1F8B4C,
            Self::DarkBlue => 0x206694,
        }
    }

    /// Red, green, blue components.
    pub fn components(self) -> (u8, u8, u8) {
        let rgb = self.rgb();
        ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

/// A rich message: title, body, fields, footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    /// Title line.
    pub title: String,
    /// Main body.
    pub description: Option<String>,
    /// Accent color.
    pub accent: Accent,
    /// Titled fields in display order.
    pub fields: Vec<Section>,
    /// Footer line.
    pub footer: Option<String>,
}

impl Embed {
    /// An embed with only a title.
    pub fn new(title: impl Into<String>, accent: Accent) -> Self {
        Self {
            title: title.into(),
            description: None,
            accent,
            fields: Vec::new(),
            footer: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, section: Section) -> Self {
        self.fields.push(section);
        self
    }

    /// Append several fields.
    pub fn fields(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.fields.extend(sections);
        self
    }

    /// Set the footer.
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

/// A file sent along with a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown to users.
    pub filename: String,
    /// File contents.
    pub data: Vec<u8>,
}

/// One outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Plain text content.
    pub content: Option<String>,
    /// Rich content.
    pub embed: Option<Embed>,
    /// Attached files.
    pub attachments: Vec<Attachment>,
}

impl Reply {
    /// A plain text reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A reply carrying one embed.
    pub fn embed(embed: Embed) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    /// A reply carrying one file.
    pub fn file(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            attachments: vec![Attachment {
                filename: filename.into(),
                data,
            }],
            ..Self::default()
        }
    }
}

/// Cut `text` to at most `limit` characters, on a character boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

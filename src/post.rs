use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

use crate::Error;

/// The `type` discriminant of a post.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Text,
    Photo,
    Quote,
    Link,
    Chat,
    Audio,
    Video,
    Answer,
}

impl PostType {
    pub const ALL: [PostType; 8] = [
        PostType::Text,
        PostType::Photo,
        PostType::Quote,
        PostType::Link,
        PostType::Chat,
        PostType::Audio,
        PostType::Video,
        PostType::Answer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PostType::Text => "text",
            PostType::Photo => "photo",
            PostType::Quote => "quote",
            PostType::Link => "link",
            PostType::Chat => "chat",
            PostType::Audio => "audio",
            PostType::Video => "video",
            PostType::Answer => "answer",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownPostType(s.to_string()))
    }
}

/// Fields shared by every kind of post.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BasePost {
    #[serde(default)]
    pub blog_name: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub post_url: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub reblog_key: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bookmarklet: bool,
    #[serde(default)]
    pub mobile: bool,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_title: Option<String>,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub note_count: u64,
}

/// A post, decoded according to its `type` field.
///
/// Types this client does not know decode to `Unknown` rather than failing
/// the whole response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Post {
    Text(TextPost),
    Photo(PhotoPost),
    Quote(QuotePost),
    Link(LinkPost),
    Chat(ChatPost),
    Audio(AudioPost),
    Video(VideoPost),
    Answer(AnswerPost),
    #[serde(other)]
    Unknown,
}

impl Post {
    pub fn kind(&self) -> Option<PostType> {
        Some(match self {
            Post::Text(_) => PostType::Text,
            Post::Photo(_) => PostType::Photo,
            Post::Quote(_) => PostType::Quote,
            Post::Link(_) => PostType::Link,
            Post::Chat(_) => PostType::Chat,
            Post::Audio(_) => PostType::Audio,
            Post::Video(_) => PostType::Video,
            Post::Answer(_) => PostType::Answer,
            Post::Unknown => return None,
        })
    }

    pub fn base(&self) -> Option<&BasePost> {
        match self {
            Post::Text(p) => Some(&p.base),
            Post::Photo(p) => Some(&p.base),
            Post::Quote(p) => Some(&p.base),
            Post::Link(p) => Some(&p.base),
            Post::Chat(p) => Some(&p.base),
            Post::Audio(p) => Some(&p.base),
            Post::Video(p) => Some(&p.base),
            Post::Answer(p) => Some(&p.base),
            Post::Unknown => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TextPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub alt_sizes: Vec<PhotoSize>,
    #[serde(default)]
    pub original_size: Option<PhotoSize>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QuotePost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LinkPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One line of a chat post.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Dialogue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub phrase: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub dialogue: Vec<Dialogue>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AudioPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub plays: u64,
    #[serde(default)]
    pub album_art: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub track_number: Option<u32>,
    #[serde(default)]
    pub year: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VideoPlayer {
    #[serde(default)]
    pub width: u32,
    /// `None` when the video is no longer embeddable.
    #[serde(default, deserialize_with = "string_or_false")]
    pub embed_code: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VideoPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub player: Vec<VideoPlayer>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnswerPost {
    #[serde(flatten)]
    pub base: BasePost,
    #[serde(default)]
    pub asking_name: String,
    #[serde(default)]
    pub asking_url: Option<String>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

// the API sends `false` in place of a missing embed code
fn string_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Embed {
        Code(String),
        Flag(bool),
    }

    Ok(match Option::<Embed>::deserialize(deserializer)? {
        Some(Embed::Code(code)) => Some(code),
        Some(Embed::Flag(false)) | None => None,
        Some(Embed::Flag(true)) => return Err(de::Error::custom("embed code can not be `true`")),
    })
}

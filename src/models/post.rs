/// A rendered rich-text field as the content API delivers it: HTML with
/// entity-encoded text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// One blog post record owned by the external content collaborator.
///
/// The core only reads this; canonical identity is never derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub date: Option<String>,
    pub slug: String,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub content: Rendered,
    #[serde(default)]
    pub author: u64,
    #[serde(default)]
    pub featured_media: u64,
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub author: Vec<EmbeddedAuthor>,
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<EmbeddedMedia>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedMedia {
    pub source_url: String,
    #[serde(default)]
    pub alt_text: String,
}

impl Post {
    pub fn author_name(&self) -> Option<&str> {
        self.embedded
            .as_ref()
            .and_then(|embedded| embedded.author.first())
            .map(|author| author.name.as_str())
    }

    pub fn featured_image(&self) -> Option<&EmbeddedMedia> {
        self.embedded
            .as_ref()
            .and_then(|embedded| embedded.featured_media.first())
    }

    #[cfg(test)]
    pub fn sample(slug: &str, title: &str, excerpt: &str) -> Self {
        Self {
            id: 99,
            date: Some("2024-06-01T09:30:00".to_string()),
            slug: slug.to_string(),
            title: Rendered {
                rendered: title.to_string(),
            },
            excerpt: Rendered {
                rendered: excerpt.to_string(),
            },
            content: Rendered {
                rendered: format!("<p>{excerpt}</p>"),
            },
            author: 1,
            featured_media: 0,
            embedded: Some(Embedded {
                author: vec![EmbeddedAuthor {
                    name: "Pest Control 99".to_string(),
                }],
                featured_media: Vec::new(),
            }),
        }
    }
}

actor_message!(GetPost(slug: String) -> Option<Post>);

#[cfg(test)]
actor_message!(SeedPost(post: Post) -> Post);

#[cfg(test)]
actor_message!(SetUnavailable(unavailable: bool) -> ());

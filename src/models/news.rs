//! News provider and article types.

use serde::Deserialize;

/// A news outlet CryptoCompare syndicates from.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsProvider {
    /// Provider key used in feed filters.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Language code of the feed.
    pub lang: String,
    /// Provider logo URL.
    #[serde(default)]
    pub img: Option<String>,
}

/// A syndicated news article.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsStory {
    /// Article id, served as a string.
    pub id: String,
    /// Globally unique article id, usually the source URL.
    #[serde(default)]
    pub guid: Option<String>,
    /// Unix timestamp of publication.
    pub published_on: i64,
    /// Cover image URL.
    #[serde(rename = "imageurl", default)]
    pub image_url: Option<String>,
    /// Article headline.
    pub title: String,
    /// Link to the article.
    pub url: String,
    /// Provider key of the source.
    pub source: String,
    /// Article body, truncated by the API.
    #[serde(default)]
    pub body: String,
    /// Pipe separated list of tags.
    #[serde(default)]
    pub tags: String,
    /// Language code of the article.
    #[serde(default)]
    pub lang: String,
    /// Details about the publishing outlet.
    #[serde(default)]
    pub source_info: Option<ShortNewsProvider>,
}

/// Abbreviated provider details attached to each article.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortNewsProvider {
    /// Display name.
    pub name: String,
    /// Language code of the feed.
    #[serde(default)]
    pub lang: String,
    /// Provider logo URL.
    #[serde(default)]
    pub img: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_list_is_a_bare_array() {
        let body = r#"[
            {
                "id": "85721",
                "guid": "https://www.cryptoglobe.com/latest/2018/12/news-1",
                "published_on": 1545080400,
                "imageurl": "https://images.cryptocompare.com/news/cryptoglobe/1.jpeg",
                "title": "Bitcoin Holds Above $4,000",
                "url": "https://www.cryptoglobe.com/latest/2018/12/news-1",
                "source": "cryptoglobe",
                "body": "Bitcoin held above the $4,000 mark on Monday...",
                "tags": "Exchanges|Trading",
                "lang": "EN",
                "source_info": {
                    "name": "CryptoGlobe",
                    "lang": "en",
                    "img": "https://images.cryptocompare.com/news/default/cryptoglobe.png"
                }
            }
        ]"#;

        let stories: Vec<NewsStory> = serde_json::from_str(body).unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].id, "85721");
        assert_eq!(stories[0].published_on, 1545080400);
        assert_eq!(stories[0].source_info.as_ref().unwrap().name, "CryptoGlobe");
    }

    #[test]
    fn test_provider_without_logo() {
        let body = r#"{"key": "coindesk", "name": "CoinDesk", "lang": "EN"}"#;

        let provider: NewsProvider = serde_json::from_str(body).unwrap();
        assert_eq!(provider.key, "coindesk");
        assert!(provider.img.is_none());
    }
}

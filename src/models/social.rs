//! Community and developer activity types.

use serde::Deserialize;

/// Social statistics for one coin, fetched by id.
#[derive(Debug, Clone, Deserialize)]
pub struct SocialStats {
    /// Response status, "Success" on a good reply.
    #[serde(rename = "Response")]
    pub response: String,
    /// Human readable status message.
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Numeric response code.
    #[serde(rename = "Type", default)]
    pub response_type: i64,
    /// Per-network statistics.
    #[serde(rename = "Data")]
    pub data: SocialData,
}

/// Statistics grouped by network.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SocialData {
    /// Identity of the coin the statistics belong to.
    #[serde(default)]
    pub general: Option<SocialGeneral>,
    /// Activity on CryptoCompare itself.
    #[serde(default)]
    pub crypto_compare: Option<CryptoCompareStats>,
    /// Twitter account statistics.
    #[serde(default)]
    pub twitter: Option<Twitter>,
    /// Subreddit statistics.
    #[serde(default)]
    pub reddit: Option<Reddit>,
    /// Facebook page statistics.
    #[serde(default)]
    pub facebook: Option<Facebook>,
    /// Source repository statistics.
    #[serde(default)]
    pub code_repository: Option<CodeRepository>,
}

/// Coin identity attached to a social statistics reply.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SocialGeneral {
    /// Short name, usually the symbol.
    pub name: String,
    /// Coin name.
    #[serde(default)]
    pub coin_name: Option<String>,
    /// Page document type.
    #[serde(rename = "Type", default)]
    pub page_type: Option<String>,
    /// Total social points across all networks.
    #[serde(default)]
    pub points: i64,
}

/// Activity of a coin on CryptoCompare.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CryptoCompareStats {
    /// Coins followed by a similar audience.
    #[serde(default)]
    pub similar_items: Vec<SimilarItem>,
    /// Users following the coin.
    #[serde(default)]
    pub cryptopian_followers: Vec<CryptopianFollower>,
    /// Social points on CryptoCompare.
    #[serde(default)]
    pub points: i64,
    /// Follower count.
    #[serde(default)]
    pub followers: i64,
    /// Forum post count.
    #[serde(default)]
    pub posts: i64,
    /// Comment count.
    #[serde(default)]
    pub comments: i64,
    /// Page views broken down by page section.
    #[serde(default)]
    pub page_views_split: Option<PageViewsSplit>,
    /// Total page views.
    #[serde(default)]
    pub page_views: i64,
}

/// A coin followed by a similar audience.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimilarItem {
    /// Internal CryptoCompare id.
    pub id: i64,
    /// Short name, usually the symbol.
    pub name: String,
    /// Display name, e.g. "Bitcoin (BTC)".
    #[serde(default)]
    pub full_name: Option<String>,
    /// Relative URL of the coin logo.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Relative URL of the coin page.
    #[serde(default)]
    pub url: Option<String>,
    /// How the audiences overlap.
    #[serde(default)]
    pub following_type: i64,
}

/// A CryptoCompare user following the coin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CryptopianFollower {
    /// User id.
    pub id: i64,
    /// User name.
    pub name: String,
    /// Avatar URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Relative URL of the user profile.
    #[serde(default)]
    pub url: Option<String>,
    /// Account type, e.g. "Cryptopian".
    #[serde(rename = "Type", default)]
    pub follower_type: Option<String>,
}

/// Page views per section of the coin page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageViewsSplit {
    #[serde(default)]
    pub overview: i64,
    #[serde(default)]
    pub markets: i64,
    #[serde(default)]
    pub analysis: i64,
    #[serde(default)]
    pub charts: i64,
    #[serde(default)]
    pub trades: i64,
    #[serde(default)]
    pub orderbook: i64,
    #[serde(default)]
    pub forum: i64,
    #[serde(default)]
    pub influence: i64,
}

/// Statistics of the coin's Twitter account.
#[derive(Debug, Clone, Deserialize)]
pub struct Twitter {
    /// Accounts the coin's account follows.
    #[serde(default)]
    pub following: i64,
    /// Unix timestamp of account creation.
    #[serde(default)]
    pub account_creation: i64,
    /// Account handle.
    pub name: String,
    /// Lists the account appears on.
    #[serde(default)]
    pub lists: i64,
    /// Tweet count.
    #[serde(default)]
    pub statuses: i64,
    /// Favourites count.
    #[serde(default)]
    pub favourites: i64,
    /// Follower count.
    #[serde(default)]
    pub followers: i64,
    /// Link to the account.
    #[serde(default)]
    pub link: String,
    /// Social points contributed by Twitter.
    #[serde(rename = "Points", default)]
    pub points: i64,
}

/// Statistics of the coin's subreddit.
#[derive(Debug, Clone, Deserialize)]
pub struct Reddit {
    /// Average posts per hour.
    #[serde(default)]
    pub posts_per_hour: f64,
    /// Average comments per hour.
    #[serde(default)]
    pub comments_per_hour: f64,
    /// Average posts per day.
    #[serde(default)]
    pub posts_per_day: f64,
    /// Average comments per day.
    #[serde(default)]
    pub comments_per_day: f64,
    /// Subreddit name.
    pub name: String,
    /// Link to the subreddit.
    #[serde(default)]
    pub link: String,
    /// Currently active users.
    #[serde(default)]
    pub active_users: i64,
    /// Unix timestamp of subreddit creation.
    #[serde(default)]
    pub community_creation: i64,
    /// Subscriber count.
    #[serde(default)]
    pub subscribers: i64,
    /// Social points contributed by Reddit.
    #[serde(rename = "Points", default)]
    pub points: i64,
}

/// Statistics of the coin's Facebook page.
#[derive(Debug, Clone, Deserialize)]
pub struct Facebook {
    /// Page like count.
    #[serde(default)]
    pub likes: i64,
    /// Link to the page.
    #[serde(default)]
    pub link: String,
    /// Whether the page is closed.
    #[serde(default)]
    pub is_closed: bool,
    /// Users talking about the page.
    #[serde(default)]
    pub talking_about: i64,
    /// Page name.
    pub name: String,
    /// Social points contributed by Facebook.
    #[serde(rename = "Points", default)]
    pub points: i64,
}

/// Source repository statistics for a coin.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeRepository {
    /// Tracked repositories.
    #[serde(rename = "List", default)]
    pub list: Vec<CodeEntry>,
    /// Social points contributed by development activity.
    #[serde(rename = "Points", default)]
    pub points: i64,
}

/// Statistics for one tracked repository.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeEntry {
    /// Unix timestamp of repository creation.
    #[serde(default)]
    pub created_at: i64,
    /// Open issues including pull requests.
    #[serde(default)]
    pub open_total_issues: i64,
    /// Repository this one was forked from.
    #[serde(rename = "Parent", default)]
    pub parent: Option<RepoLink>,
    /// Repository size in kilobytes.
    #[serde(default)]
    pub size: i64,
    /// Closed issues including pull requests.
    #[serde(default)]
    pub closed_total_issues: i64,
    /// Star count.
    #[serde(default)]
    pub stars: i64,
    /// Unix timestamp of the last statistics update.
    #[serde(default)]
    pub last_update: i64,
    /// Fork count.
    #[serde(default)]
    pub forks: i64,
    /// Link to the repository.
    pub url: String,
    /// Closed issue count.
    #[serde(default)]
    pub closed_issues: i64,
    /// Closed pull request count.
    #[serde(default)]
    pub closed_pull_issues: i64,
    /// Whether this repository is itself a fork.
    #[serde(default)]
    pub fork: bool,
    /// Unix timestamp of the last push.
    #[serde(default)]
    pub last_push: i64,
    /// Root repository of the fork network.
    #[serde(default)]
    pub source: Option<RepoLink>,
    /// Open pull request count.
    #[serde(default)]
    pub open_pull_issues: i64,
    /// Primary language.
    #[serde(default)]
    pub language: Option<String>,
    /// Watcher count.
    #[serde(default)]
    pub subscribers: i64,
    /// Open issue count.
    #[serde(default)]
    pub open_issues: i64,
}

/// Reference to a related repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepoLink {
    /// Repository name.
    pub name: String,
    /// Link to the repository.
    pub url: String,
    /// Internal CryptoCompare id.
    #[serde(default)]
    pub internal_id: i64,
}

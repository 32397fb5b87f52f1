use serde::Deserialize;

use crate::Post;

/// General information about a blog.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BlogInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub updated: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ask: bool,
    #[serde(default)]
    pub ask_anon: bool,
    #[serde(default)]
    pub likes: u64,
}

/// A blog owned by the authenticated user.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OwnedBlog {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub tweet: String,
    #[serde(default)]
    pub facebook: String,
    /// `public` or `private`.
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub default_post_format: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub blogs: Vec<OwnedBlog>,
}

/// A user following a blog.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Follower {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub updated: i64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LikesResponse {
    pub liked_posts: Vec<Post>,
    #[serde(default)]
    pub liked_count: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FollowingResponse {
    #[serde(default)]
    pub total_blogs: u64,
    pub blogs: Vec<BlogInfo>,
}

/// Posts of the dashboard, a queue, the drafts or the submissions.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostList {
    pub posts: Vec<Post>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PostsResponse {
    #[serde(default)]
    pub blog: BlogInfo,
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_posts: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BlogInfoResponse {
    pub blog: BlogInfo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FollowersResponse {
    #[serde(default)]
    pub total_users: u64,
    pub users: Vec<Follower>,
}

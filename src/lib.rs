/*!
tumblr-api: a Tumblr API v2 client, signing requests with OAuth 1.0a.

# Overview

Requests are signed with HMAC-SHA1 through [oauth1-request](https://crates.io/crates/oauth1-request)
and sent with [reqwest](https://crates.io/crates/reqwest). Every answer of the
API is wrapped in a `{meta, response}` envelope; [`TumblrClient`] unwraps it,
checks `meta.status` and decodes `response` into a typed result.

# How to use

## Reading and posting

```no_run
use tumblr_api::{ClientConfig, Options, PostType, TumblrClient};

# async fn run() -> tumblr_api::Result<()> {
let config = ClientConfig::new(
    "[CONSUMER_KEY]",
    "[CONSUMER_SECRET]",
    "[OAUTH_TOKEN]",
    "[OAUTH_SECRET]",
);
let client = TumblrClient::new(&config)?;

let info = client.info().await?;
println!("hello, {}", info.user.name);

let photos = client
    .posts("staff.tumblr.com", Some(PostType::Photo), Options::new().set("limit", 5))
    .await?;
println!("{} posts", photos.total_posts);

client
    .create_text("myblog.tumblr.com", Options::new().set("body", "Hello, Tumblr!"))
    .await?;
# Ok(())
# }
```

The token pair is obtained by the embedding application; this crate only
signs with it. Any [`Transport`] can stand in for [`HttpTransport`], see
[`TumblrClient::with_transport`].
*/
mod client;
mod config;
mod envelope;
mod error;
mod options;
mod post;
mod request;
mod response;
mod secrets;
mod signer;
mod transport;
mod tumblr;

// exposed to external program
pub use client::{Client, OAuthClientProvider};
pub use config::{ClientConfig, DEFAULT_HOST};
pub use envelope::{Envelope, Meta};
pub use error::{Error, Result};
pub use options::{Options, Params};
pub use post::{
    AnswerPost, AudioPost, BasePost, ChatPost, Dialogue, LinkPost, Photo, PhotoPost, PhotoSize,
    Post, PostType, QuotePost, TextPost, VideoPlayer, VideoPost,
};
pub use request::RequestBuilder;
pub use response::{
    AvatarResponse, BlogInfo, BlogInfoResponse, Follower, FollowersResponse, FollowingResponse,
    LikesResponse, OwnedBlog, PostList, PostsResponse, UserInfo, UserInfoResponse,
};
pub use secrets::{Credentials, SecretsProvider};
pub use signer::{OAuthParameters, Signer};
pub use transport::{ApiRequest, Auth, HttpTransport, Transport};
pub use tumblr::{TumblrClient, AVATAR_SIZES};

// crate-private constant variables
pub(crate) const OAUTH_KEY_PREFIX: &str = "oauth_";

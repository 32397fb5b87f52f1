use serde::de::DeserializeOwned;

use crate::options::Endpoint;
use crate::{
    ApiRequest, AvatarResponse, BlogInfoResponse, ClientConfig, Envelope, Error,
    FollowersResponse, FollowingResponse, HttpTransport, LikesResponse, Options, Params, Post,
    PostList, PostType, PostsResponse, Result, Transport, UserInfoResponse,
};

const STATUS_OK: u16 = 200;
const STATUS_CREATED: u16 = 201;

/// Sizes the avatar endpoint can render.
pub const AVATAR_SIZES: [u32; 9] = [16, 24, 30, 40, 48, 64, 96, 128, 512];

const INFO: Endpoint = Endpoint::new("info", &[], &[]);
const LIKES: Endpoint = Endpoint::new("likes", &["limit", "offset", "before", "after"], &[]);
const FOLLOWING: Endpoint = Endpoint::new("following", &["limit", "offset"], &[]);
const DASHBOARD: Endpoint = Endpoint::new(
    "dashboard",
    &[
        "limit",
        "offset",
        "type",
        "since_id",
        "reblog_info",
        "notes_info",
    ],
    &[],
);
const TAGGED: Endpoint = Endpoint::new("tagged", &["before", "limit", "filter"], &[]);
const POSTS: Endpoint = Endpoint::new(
    "posts",
    &[
        "id",
        "tag",
        "limit",
        "offset",
        "filter",
        "reblog_info",
        "notes_info",
    ],
    &[],
);
const BLOG_INFO: Endpoint = Endpoint::new("blog info", &[], &[]);
const FOLLOWERS: Endpoint = Endpoint::new("followers", &["limit", "offset"], &[]);
const BLOG_LIKES: Endpoint = Endpoint::new(
    "blog likes",
    &["limit", "offset", "before", "after"],
    &[],
);
const QUEUE: Endpoint = Endpoint::new("queue", &["limit", "offset", "filter"], &[]);
const DRAFTS: Endpoint = Endpoint::new("drafts", &["before_id", "filter"], &[]);
const SUBMISSION: Endpoint = Endpoint::new("submission", &["offset", "filter"], &[]);
const FOLLOW: Endpoint = Endpoint::new("follow", &[], &[]);
const UNFOLLOW: Endpoint = Endpoint::new("unfollow", &[], &[]);
const LIKE: Endpoint = Endpoint::new("like", &[], &[]);
const UNLIKE: Endpoint = Endpoint::new("unlike", &[], &[]);
const CREATE_PHOTO: Endpoint = Endpoint::new(
    "create photo",
    &[
        "state", "tags", "tweet", "date", "format", "slug", "caption", "link", "source",
    ],
    &["source"],
);
const CREATE_TEXT: Endpoint = Endpoint::new(
    "create text",
    &["state", "tags", "tweet", "date", "format", "slug", "title", "body"],
    &["body"],
);
const CREATE_QUOTE: Endpoint = Endpoint::new(
    "create quote",
    &["state", "tags", "tweet", "date", "format", "slug", "quote", "source"],
    &["quote"],
);
const CREATE_LINK: Endpoint = Endpoint::new(
    "create link",
    &[
        "state",
        "tags",
        "tweet",
        "date",
        "format",
        "slug",
        "title",
        "url",
        "description",
    ],
    &["url"],
);
const CREATE_CHAT: Endpoint = Endpoint::new(
    "create chat",
    &[
        "state",
        "tags",
        "tweet",
        "date",
        "format",
        "slug",
        "title",
        "conversation",
    ],
    &["conversation"],
);
const CREATE_AUDIO: Endpoint = Endpoint::new(
    "create audio",
    &[
        "state",
        "tags",
        "tweet",
        "date",
        "format",
        "slug",
        "caption",
        "external_url",
    ],
    &["external_url"],
);
const CREATE_VIDEO: Endpoint = Endpoint::new(
    "create video",
    &["state", "tags", "tweet", "date", "format", "slug", "caption", "embed"],
    &["embed"],
);
const REBLOG: Endpoint = Endpoint::new(
    "reblog",
    &[
        "id",
        "reblog_key",
        "comment",
        "state",
        "tags",
        "tweet",
        "date",
        "format",
        "slug",
    ],
    &["id", "reblog_key"],
);
const DELETE_POST: Endpoint = Endpoint::new("delete post", &[], &[]);
const EDIT_POST: Endpoint = Endpoint::new(
    "edit post",
    &[
        "id",
        "state",
        "tags",
        "tweet",
        "date",
        "format",
        "slug",
        "title",
        "body",
        "caption",
        "link",
        "source",
        "quote",
        "url",
        "description",
        "conversation",
        "external_url",
        "embed",
    ],
    &["id"],
);

/// Client for the Tumblr API v2.
///
/// Each method issues exactly one request through the transport; nothing is
/// shared between calls except the transport itself.
///
/// Read methods decode `response` only when `meta.status` is 2xx and fail
/// with [`Error::Api`] otherwise. Mutating methods return `()` on the one
/// status they expect and [`Error::Api`] with `meta.msg` on any other.
#[derive(Debug, Clone)]
pub struct TumblrClient<T = HttpTransport> {
    transport: T,
    api_key: String,
}

impl TumblrClient<HttpTransport> {
    /// Constructs a client talking to `config.host` over reqwest.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.check()?;
        let mut transport = HttpTransport::new(&config.host, config.credentials())?;
        if let Some(timeout) = config.request_timeout() {
            transport = transport.timeout(timeout);
        }
        Ok(TumblrClient::with_transport(
            transport,
            config.consumer_key.as_str(),
        ))
    }
}

impl<T: Transport> TumblrClient<T> {
    /// Constructs a client on top of any transport.
    ///
    /// `api_key` is the application's consumer key, sent as `api_key` to the
    /// endpoints that want one.
    pub fn with_transport<K: Into<String>>(transport: T, api_key: K) -> Self {
        TumblrClient {
            transport,
            api_key: api_key.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ------------------------------------------------------------------------
    // User

    /// Retrieves the information of the authenticated user.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn info(&self) -> Result<UserInfoResponse> {
        let params = INFO.params(Options::new(), &[])?;
        self.read("/v2/user/info", params).await
    }

    /// Retrieves the posts the user liked.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `limit`, `offset`, `before`, `after`.
    pub async fn likes(&self, options: Options) -> Result<LikesResponse> {
        let params = LIKES.params(options, &[])?;
        self.read("/v2/user/likes", params).await
    }

    /// Retrieves the blogs the user follows.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `limit`, `offset`.
    pub async fn following(&self, options: Options) -> Result<FollowingResponse> {
        let params = FOLLOWING.params(options, &[])?;
        self.read("/v2/user/following", params).await
    }

    /// Retrieves the user's dashboard.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `limit`, `offset`, `type`, `since_id`, `reblog_info`,
    /// `notes_info`.
    pub async fn dashboard(&self, options: Options) -> Result<PostList> {
        let params = DASHBOARD.params(options, &[])?;
        self.read("/v2/user/dashboard", params).await
    }

    /// Follow the blog at `blog_url`.
    pub async fn follow(&self, blog_url: &str) -> Result<()> {
        let params = FOLLOW.params(Options::new(), &[("url", blog_url)])?;
        self.mutate("/v2/user/follow", params, STATUS_OK).await
    }

    /// Stop following the blog at `blog_url`.
    pub async fn unfollow(&self, blog_url: &str) -> Result<()> {
        let params = UNFOLLOW.params(Options::new(), &[("url", blog_url)])?;
        self.mutate("/v2/user/unfollow", params, STATUS_OK).await
    }

    pub async fn like(&self, id: &str, reblog_key: &str) -> Result<()> {
        let params = LIKE.params(Options::new(), &[("id", id), ("reblog_key", reblog_key)])?;
        self.mutate("/v2/user/like", params, STATUS_OK).await
    }

    pub async fn unlike(&self, id: &str, reblog_key: &str) -> Result<()> {
        let params = UNLIKE.params(Options::new(), &[("id", id), ("reblog_key", reblog_key)])?;
        self.mutate("/v2/user/unlike", params, STATUS_OK).await
    }

    // ------------------------------------------------------------------------
    // Tagged

    /// Retrieves posts tagged with `tag`.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `before`, `limit`, `filter`.
    pub async fn tagged(&self, tag: &str, options: Options) -> Result<Vec<Post>> {
        let params = TAGGED.params(options, &[("tag", tag), ("api_key", self.api_key.as_str())])?;
        self.read("/v2/tagged", params).await
    }

    // ------------------------------------------------------------------------
    // Blog

    /// Retrieves the avatar url of `blog`. Sent unsigned.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is neither 2xx nor 3xx.
    pub async fn avatar(&self, blog: &str, size: u32) -> Result<AvatarResponse> {
        if !AVATAR_SIZES.contains(&size) {
            return Err(Error::InvalidAvatarSize(size));
        }
        let path = format!("/v2/blog/{}/avatar/{}", blog, size);
        let envelope = self.call(ApiRequest::get(path, Params::new()).anonymous()).await?;
        // the url comes back with a redirect status
        if !(200..400).contains(&envelope.meta.status) {
            return Err(Error::Api {
                status: envelope.meta.status,
                msg: envelope.meta.msg,
            });
        }
        envelope.decode()
    }

    /// Retrieves posts of `blog`, all types unless `post_type` is given.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `id`, `tag`, `limit`, `offset`, `filter`, `reblog_info`,
    /// `notes_info`.
    pub async fn posts(
        &self,
        blog: &str,
        post_type: Option<PostType>,
        options: Options,
    ) -> Result<PostsResponse> {
        let path = match post_type {
            Some(post_type) => format!("/v2/blog/{}/posts/{}", blog, post_type),
            None => format!("/v2/blog/{}/posts", blog),
        };
        let params = POSTS.params(options, &[("api_key", self.api_key.as_str())])?;
        self.read(path, params).await
    }

    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn blog_info(&self, blog: &str) -> Result<BlogInfoResponse> {
        let params = BLOG_INFO.params(Options::new(), &[("api_key", self.api_key.as_str())])?;
        self.read(format!("/v2/blog/{}/info", blog), params).await
    }

    /// options: `limit`, `offset`.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn followers(&self, blog: &str, options: Options) -> Result<FollowersResponse> {
        let params = FOLLOWERS.params(options, &[])?;
        self.read(format!("/v2/blog/{}/followers", blog), params)
            .await
    }

    /// Retrieves the posts `blog` liked.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    ///
    /// options: `limit`, `offset`, `before`, `after`.
    pub async fn blog_likes(&self, blog: &str, options: Options) -> Result<LikesResponse> {
        let params = BLOG_LIKES.params(options, &[("api_key", self.api_key.as_str())])?;
        self.read(format!("/v2/blog/{}/likes", blog), params).await
    }

    /// options: `limit`, `offset`, `filter`.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn queue(&self, blog: &str, options: Options) -> Result<PostList> {
        let params = QUEUE.params(options, &[])?;
        self.read(format!("/v2/blog/{}/posts/queue", blog), params)
            .await
    }

    /// options: `before_id`, `filter`.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn drafts(&self, blog: &str, options: Options) -> Result<PostList> {
        let params = DRAFTS.params(options, &[])?;
        self.read(format!("/v2/blog/{}/posts/draft", blog), params)
            .await
    }

    /// options: `offset`, `filter`.
    ///
    /// Fails with [`Error::Api`] when `meta.status` is not 2xx.
    pub async fn submission(&self, blog: &str, options: Options) -> Result<PostList> {
        let params = SUBMISSION.params(options, &[])?;
        self.read(format!("/v2/blog/{}/posts/submission", blog), params)
            .await
    }

    // ------------------------------------------------------------------------
    // Posting
    //
    // Every create accepts `state`, `tags`, `tweet`, `date`, `format` and
    // `slug` besides the fields of its type. `type` is always overwritten.

    /// Create a photo post from a `source` url; `caption` and `link` optional.
    pub async fn create_photo(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_PHOTO, PostType::Photo, options)
            .await
    }

    /// Create a text post with a `body`; `title` optional.
    pub async fn create_text(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_TEXT, PostType::Text, options)
            .await
    }

    /// Create a quote post with a `quote`; `source` optional.
    pub async fn create_quote(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_QUOTE, PostType::Quote, options)
            .await
    }

    /// Create a link post to `url`; `title` and `description` optional.
    pub async fn create_link(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_LINK, PostType::Link, options)
            .await
    }

    /// Create a chat post from a `conversation`; `title` optional.
    pub async fn create_chat(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_CHAT, PostType::Chat, options)
            .await
    }

    /// Create an audio post from an `external_url`; `caption` optional.
    pub async fn create_audio(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_AUDIO, PostType::Audio, options)
            .await
    }

    /// Create a video post from an `embed` code; `caption` optional.
    pub async fn create_video(&self, blog: &str, options: Options) -> Result<()> {
        self.create(blog, &CREATE_VIDEO, PostType::Video, options)
            .await
    }

    /// Reblog the post given by the `id` and `reblog_key` options to `blog`.
    pub async fn reblog(&self, blog: &str, options: Options) -> Result<()> {
        let params = REBLOG.params(options, &[])?;
        self.mutate(
            format!("/v2/blog/{}/post/reblog", blog),
            params,
            STATUS_CREATED,
        )
        .await
    }

    pub async fn delete_post(&self, blog: &str, id: &str) -> Result<()> {
        let params = DELETE_POST.params(Options::new(), &[("id", id)])?;
        self.mutate(format!("/v2/blog/{}/post/delete", blog), params, STATUS_OK)
            .await
    }

    /// Edit the post given by the `id` option. Takes the options of any
    /// create call.
    pub async fn edit_post(&self, blog: &str, options: Options) -> Result<()> {
        let params = EDIT_POST.params(options, &[])?;
        self.mutate(format!("/v2/blog/{}/post/edit", blog), params, STATUS_OK)
            .await
    }

    // ------------------------------------------------------------------------
    // Plumbing

    async fn create(
        &self,
        blog: &str,
        endpoint: &Endpoint,
        post_type: PostType,
        options: Options,
    ) -> Result<()> {
        let params = endpoint.params(options, &[("type", post_type.as_str())])?;
        self.mutate(format!("/v2/blog/{}/post", blog), params, STATUS_CREATED)
            .await
    }

    async fn call(&self, request: ApiRequest) -> Result<Envelope> {
        let method = request.method.clone();
        let path = request.path.clone();
        let body = self.transport.execute(request).await?;
        let envelope = Envelope::parse(&body)?;
        if !envelope.meta.is_success() {
            log::warn!(
                "{} {} reported {} {}",
                method,
                path,
                envelope.meta.status,
                envelope.meta.msg
            );
        }
        Ok(envelope)
    }

    async fn read<R, P>(&self, path: P, params: Params) -> Result<R>
    where
        R: DeserializeOwned,
        P: Into<String>,
    {
        self.call(ApiRequest::get(path, params))
            .await?
            .check_success()?
            .decode()
    }

    async fn mutate<P: Into<String>>(&self, path: P, params: Params, expected: u16) -> Result<()> {
        self.call(ApiRequest::post(path, params))
            .await?
            .check(expected)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use http::Method;

    use super::*;
    use crate::Auth;

    /// Answers with canned bodies and remembers what it was asked.
    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<ApiRequest>>,
        bodies: Mutex<VecDeque<&'static str>>,
    }

    impl RecordingTransport {
        fn answering(body: &'static str) -> Self {
            let transport = RecordingTransport::default();
            transport.bodies.lock().unwrap().push_back(body);
            transport
        }

        fn last(&self) -> ApiRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }

        fn count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(request);
            let body = self.bodies.lock().unwrap().pop_front().unwrap_or(OK);
            Ok(body.as_bytes().to_vec())
        }
    }

    const OK: &str = r#"{"meta": {"status": 200, "msg": "OK"}, "response": []}"#;
    const CREATED: &str = r#"{"meta": {"status": 201, "msg": "Created"}, "response": {"id": 1}}"#;
    const NOT_FOUND: &str = r#"{"meta": {"status": 404, "msg": "Not Found"}, "response": []}"#;
    const EMPTY_POSTS: &str =
        r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"blog": {"name": "staff"}, "posts": [], "total_posts": 0}}"#;
    const EMPTY_LIST: &str = r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"posts": []}}"#;

    fn client(body: &'static str) -> TumblrClient<RecordingTransport> {
        TumblrClient::with_transport(RecordingTransport::answering(body), "consumer-key")
    }

    fn param<'r>(request: &'r ApiRequest, key: &str) -> Option<&'r str> {
        request
            .params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[tokio::test]
    async fn info() {
        let client = client(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"user": {"name": "mgterzieva", "likes": 3}}}"#,
        );
        let info = client.info().await.unwrap();
        assert_eq!(info.user.name, "mgterzieva");
        assert_eq!(info.user.likes, 3);

        let request = client.transport().last();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/v2/user/info");
        assert!(request.params.is_empty());
        assert_eq!(request.auth, Auth::Signed);
    }

    #[tokio::test]
    async fn read_reports_api_failure() {
        let client = client(
            r#"{"meta": {"status": 401, "msg": "Not Authorized"}, "response": []}"#,
        );
        let err = client.info().await.unwrap_err();
        assert_eq!(err.to_string(), "Not Authorized");
        assert_eq!(err.api_status(), Some(401));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let html = client("<html>oops</html>");
        assert!(matches!(html.info().await, Err(Error::Decode(_))));

        let no_meta = client(r#"{"response": {"user": {"name": "x"}}}"#);
        assert!(matches!(no_meta.info().await, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn posts_path_with_and_without_type() {
        let client = client(EMPTY_POSTS);
        let posts = client
            .posts("staff.tumblr.com", None, Options::new())
            .await
            .unwrap();
        assert_eq!(posts.blog.name, "staff");
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff.tumblr.com/posts");
        assert_eq!(param(&request, "api_key"), Some("consumer-key"));

        client.transport().bodies.lock().unwrap().push_back(EMPTY_POSTS);
        client
            .posts(
                "staff.tumblr.com",
                Some(PostType::Photo),
                Options::new().set("limit", 5),
            )
            .await
            .unwrap();
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff.tumblr.com/posts/photo");
        assert_eq!(param(&request, "limit"), Some("5"));
    }

    #[tokio::test]
    async fn api_key_cannot_be_spoofed() {
        let client = client(EMPTY_POSTS);
        client
            .posts("staff", None, Options::new().set("api_key", "other"))
            .await
            .unwrap();
        assert_eq!(param(&client.transport().last(), "api_key"), Some("consumer-key"));
    }

    #[tokio::test]
    async fn unknown_option_never_reaches_the_wire() {
        let client = client(EMPTY_POSTS);
        let err = client
            .posts("staff", None, Options::new().set("colour", "red"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownOption { endpoint: "posts", .. }));
        assert_eq!(client.transport().count(), 0);
    }

    #[tokio::test]
    async fn tagged_forces_tag_and_key() {
        let client = client(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": [{"type": "text", "id": 9, "body": "hi"}]}"#,
        );
        let posts = client
            .tagged("gif", Options::new().set("limit", 1))
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].kind(), Some(PostType::Text));

        let request = client.transport().last();
        assert_eq!(request.path, "/v2/tagged");
        assert_eq!(param(&request, "tag"), Some("gif"));
        assert_eq!(param(&request, "api_key"), Some("consumer-key"));
        assert_eq!(param(&request, "limit"), Some("1"));
    }

    #[tokio::test]
    async fn user_collections() {
        let client = client(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"liked_posts": [], "liked_count": 12}}"#,
        );
        assert_eq!(client.likes(Options::new()).await.unwrap().liked_count, 12);
        assert_eq!(client.transport().last().path, "/v2/user/likes");

        client.transport().bodies.lock().unwrap().push_back(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"total_blogs": 1, "blogs": [{"name": "david"}]}}"#,
        );
        let following = client.following(Options::new()).await.unwrap();
        assert_eq!(following.blogs[0].name, "david");
        assert_eq!(client.transport().last().path, "/v2/user/following");

        client.transport().bodies.lock().unwrap().push_back(EMPTY_LIST);
        client
            .dashboard(Options::new().set("type", "photo"))
            .await
            .unwrap();
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/user/dashboard");
        assert_eq!(param(&request, "type"), Some("photo"));
    }

    #[tokio::test]
    async fn blog_collections() {
        let client = client(EMPTY_LIST);
        client.queue("staff", Options::new()).await.unwrap();
        assert_eq!(client.transport().last().path, "/v2/blog/staff/posts/queue");

        client.transport().bodies.lock().unwrap().push_back(EMPTY_LIST);
        client.drafts("staff", Options::new()).await.unwrap();
        assert_eq!(client.transport().last().path, "/v2/blog/staff/posts/draft");

        client.transport().bodies.lock().unwrap().push_back(EMPTY_LIST);
        client.submission("staff", Options::new()).await.unwrap();
        assert_eq!(
            client.transport().last().path,
            "/v2/blog/staff/posts/submission"
        );

        client.transport().bodies.lock().unwrap().push_back(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"total_users": 1, "users": [{"name": "ben"}]}}"#,
        );
        let followers = client.followers("staff", Options::new()).await.unwrap();
        assert_eq!(followers.users[0].name, "ben");
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff/followers");
        assert_eq!(param(&request, "api_key"), None);

        client.transport().bodies.lock().unwrap().push_back(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"liked_posts": [], "liked_count": 0}}"#,
        );
        client.blog_likes("staff", Options::new()).await.unwrap();
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff/likes");
        assert_eq!(param(&request, "api_key"), Some("consumer-key"));

        client.transport().bodies.lock().unwrap().push_back(
            r#"{"meta": {"status": 200, "msg": "OK"}, "response": {"blog": {"title": "Staff", "name": "staff"}}}"#,
        );
        let info = client.blog_info("staff").await.unwrap();
        assert_eq!(info.blog.title, "Staff");
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff/info");
        assert_eq!(param(&request, "api_key"), Some("consumer-key"));
    }

    #[tokio::test]
    async fn avatar_is_unsigned_and_accepts_redirect() {
        let client = client(
            r#"{"meta": {"status": 301, "msg": "Moved Permanently"}, "response": {"avatar_url": "https://64.media.tumblr.com/avatar_64.png"}}"#,
        );
        let avatar = client.avatar("staff.tumblr.com", 64).await.unwrap();
        assert_eq!(avatar.avatar_url, "https://64.media.tumblr.com/avatar_64.png");

        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/staff.tumblr.com/avatar/64");
        assert_eq!(request.auth, Auth::Anonymous);
    }

    #[tokio::test]
    async fn avatar_rejects_odd_sizes() {
        let client = client(OK);
        let err = client.avatar("staff", 100).await.unwrap_err();
        assert!(matches!(err, Error::InvalidAvatarSize(100)));
        assert_eq!(client.transport().count(), 0);
    }

    #[tokio::test]
    async fn follow_not_found() {
        let client = client(NOT_FOUND);
        let err = client
            .follow("thehungergames.tumblr.com")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not Found");

        let request = client.transport().last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/v2/user/follow");
        assert_eq!(
            request.params,
            vec![("url".to_string(), "thehungergames.tumblr.com".to_string())]
        );
    }

    #[tokio::test]
    async fn social_actions() {
        let client = client(OK);
        client.follow("staff.tumblr.com").await.unwrap();

        client.transport().bodies.lock().unwrap().push_back(OK);
        client.unfollow("staff.tumblr.com").await.unwrap();
        assert_eq!(client.transport().last().path, "/v2/user/unfollow");

        client.transport().bodies.lock().unwrap().push_back(OK);
        client.like("123", "abc").await.unwrap();
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/user/like");
        assert_eq!(param(&request, "id"), Some("123"));
        assert_eq!(param(&request, "reblog_key"), Some("abc"));

        client.transport().bodies.lock().unwrap().push_back(NOT_FOUND);
        let err = client.unlike("123", "abc").await.unwrap_err();
        assert_eq!(err.api_status(), Some(404));
        assert_eq!(client.transport().last().path, "/v2/user/unlike");
    }

    #[tokio::test]
    async fn create_photo_forces_type() {
        let client = client(CREATED);
        client
            .create_photo(
                "myblog",
                Options::new()
                    .set("type", "text")
                    .set("source", "https://example.com/cat.jpg"),
            )
            .await
            .unwrap();

        let request = client.transport().last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/v2/blog/myblog/post");
        assert_eq!(param(&request, "type"), Some("photo"));
        assert_eq!(param(&request, "source"), Some("https://example.com/cat.jpg"));
    }

    #[tokio::test]
    async fn create_every_type() {
        let client = client(CREATED);
        let cases: Vec<(PostType, Options)> = vec![
            (PostType::Text, Options::from([("body", "hello")])),
            (PostType::Quote, Options::from([("quote", "to be")])),
            (PostType::Link, Options::from([("url", "https://www.tumblr.com")])),
            (PostType::Chat, Options::from([("conversation", "a: hi")])),
            (PostType::Audio, Options::from([("external_url", "https://example.com/a.mp3")])),
            (PostType::Video, Options::from([("embed", "<iframe></iframe>")])),
        ];
        for (kind, options) in cases {
            client.transport().bodies.lock().unwrap().push_back(CREATED);
            let result = match kind {
                PostType::Text => client.create_text("myblog", options).await,
                PostType::Quote => client.create_quote("myblog", options).await,
                PostType::Link => client.create_link("myblog", options).await,
                PostType::Chat => client.create_chat("myblog", options).await,
                PostType::Audio => client.create_audio("myblog", options).await,
                PostType::Video => client.create_video("myblog", options).await,
                _ => unreachable!(),
            };
            result.unwrap();
            assert_eq!(param(&client.transport().last(), "type"), Some(kind.as_str()));
        }
    }

    #[tokio::test]
    async fn create_requires_its_content() {
        let client = client(CREATED);
        let err = client
            .create_text("myblog", Options::new().set("title", "no body"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingOption {
                endpoint: "create text",
                key: "body"
            }
        ));
        assert_eq!(client.transport().count(), 0);
    }

    #[tokio::test]
    async fn create_expects_201() {
        let client = client(OK);
        let err = client
            .create_text("myblog", Options::new().set("body", "hi"))
            .await
            .unwrap_err();
        assert_eq!(err.api_status(), Some(200));
        assert_eq!(err.to_string(), "OK");
    }

    #[tokio::test]
    async fn reblog_delete_edit() {
        let client = client(CREATED);
        client
            .reblog(
                "myblog",
                Options::new()
                    .set("id", 42)
                    .set("reblog_key", "k")
                    .set("comment", "nice"),
            )
            .await
            .unwrap();
        assert_eq!(client.transport().last().path, "/v2/blog/myblog/post/reblog");

        client.transport().bodies.lock().unwrap().push_back(OK);
        client.delete_post("myblog", "42").await.unwrap();
        let request = client.transport().last();
        assert_eq!(request.path, "/v2/blog/myblog/post/delete");
        assert_eq!(request.params, vec![("id".to_string(), "42".to_string())]);

        client.transport().bodies.lock().unwrap().push_back(OK);
        client
            .edit_post("myblog", Options::new().set("id", 42).set("body", "edited"))
            .await
            .unwrap();
        assert_eq!(client.transport().last().path, "/v2/blog/myblog/post/edit");

        client.transport().bodies.lock().unwrap().push_back(CREATED);
        let err = client.delete_post("myblog", "42").await.unwrap_err();
        assert_eq!(err.api_status(), Some(201));
    }

    #[test]
    fn new_validates_config() {
        let config = ClientConfig::new("ck", "", "ot", "os");
        assert!(matches!(TumblrClient::new(&config), Err(Error::Config(_))));

        let config = ClientConfig::new("ck", "cs", "ot", "os").timeout(std::time::Duration::from_secs(3));
        let client = TumblrClient::new(&config).unwrap();
        assert_eq!(client.transport().host().as_str(), "https://api.tumblr.com/");
        assert_eq!(client.api_key, "ck");
    }
}

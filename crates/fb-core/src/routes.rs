//! UI navigation targets. Not used by the store itself.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Posts,
    PostDetail(i64),
    Profile,
    Board(String),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Posts => "Posts",
            Route::PostDetail(_) => "PostDetail",
            Route::Profile => "Profile",
            Route::Board(_) => "Board",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Posts => "/posts".to_string(),
            Route::PostDetail(id) => format!("/posts/{id}"),
            Route::Profile => "/profile".to_string(),
            Route::Board(topic) => format!("/board/{topic}"),
        }
    }

    /// Matches a URL path against the route table. A trailing slash is ignored.
    pub fn parse(path: &str) -> Option<Route> {
        if !path.starts_with('/') {
            return None;
        }
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] => Some(Route::Home),
            ["posts"] => Some(Route::Posts),
            ["posts", id] => id.parse().ok().map(Route::PostDetail),
            ["profile"] => Some(Route::Profile),
            ["board", topic] if !topic.is_empty() => Some(Route::Board((*topic).to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

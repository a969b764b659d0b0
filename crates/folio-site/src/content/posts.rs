use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// A blog post. Bodies are markdown-lite, parsed at render time.
#[derive(Debug, Clone)]
pub struct Post {
    /// URL slug, the `:postId` capture.
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO date, e.g. `2025-11-03`.
    pub date: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

impl Post {
    /// Parsed publication date, `None` if the literal is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Human-readable date for display; falls back to the raw literal.
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.date.to_string(),
        }
    }
}

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post {
            slug: "retiring-the-cleverness",
            title: "Retiring the cleverness",
            date: "2026-03-09",
            summary: "Notes from deleting a caching layer nobody could explain.",
            body: "\
# Retiring the cleverness

Every system I have inherited had one load-bearing piece of cleverness. \
At Fernwood it was a hand-rolled cache with **four** invalidation paths.

## What we did

- Measured the hit rate. It was 31%.
- Replaced it with a `HashMap` behind a mutex.
- Watched p99 latency drop.

The lesson is not *never cache*. The lesson is that cleverness has a \
carrying cost, and somebody pays it every on-call shift.

```
before: 412ms p99
after:  188ms p99
```

If you cannot explain a component to the new hire in five minutes, \
[schedule its funeral](https://en.wikipedia.org/wiki/Chesterton%27s_fence) \
properly: understand it first, then delete it.",
        },
        Post {
            slug: "boring-deploys",
            title: "Boring deploys are a feature",
            date: "2025-11-14",
            summary: "Why my deploy script has not changed in two years.",
            body: "\
# Boring deploys are a feature

My deploy pipeline is a single `rsync` and a systemd restart. People \
laugh, then they ask why their Friday deploys are scary and mine are not.

## The actual requirements

- Rollback in under a minute
- A log line that says *what* changed
- No shared mutable state with the last deploy

Everything else is accidental complexity wearing a lanyard.",
        },
        Post {
            slug: "rust-for-the-unglamorous",
            title: "Rust for the unglamorous parts",
            date: "2025-06-02",
            summary: "The case for Rust in plumbing code, not just hot paths.",
            body: "\
# Rust for the unglamorous parts

The pitch for Rust is usually performance. The reason I keep choosing it \
is different: *totality*. The compiler keeps asking what happens on the \
path you forgot.

A parser that handles the happy path is a demo. A parser that handles \
`None` everywhere is a tool you can hand to a colleague.",
        },
    ]
});

/// All posts, newest first.
pub fn posts() -> &'static [Post] {
    &POSTS
}

/// Looks up a post by its slug.
pub fn post_by_slug(slug: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_sorted_newest_first() {
        let dates: Vec<_> = posts().iter().filter_map(Post::parsed_date).collect();
        assert_eq!(dates.len(), posts().len());
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_lookup_by_slug() {
        assert!(post_by_slug("boring-deploys").is_some());
        assert!(post_by_slug("nope").is_none());
    }

    #[test]
    fn test_display_date() {
        let post = post_by_slug("boring-deploys").unwrap();
        assert_eq!(post.display_date(), "November 14, 2025");
    }
}

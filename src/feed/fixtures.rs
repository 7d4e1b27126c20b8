use crate::models::post::Post;

/// Built-in posts used whenever the feed cannot be fetched or parsed.
///
/// Keeps the widget demonstrable offline and during local development.
/// Exactly three entries, deterministic in content and order.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Setting Up a Static Blog with Hexo".to_string(),
            content: "A walkthrough of building a personal technical blog with the Hexo \
                      static site generator, from installation and scaffolding through \
                      writing the first post and deploying the generated site."
                .to_string(),
            url: "/2025/08/22/hexo-blog-setup/".to_string(),
            date: "2025-08-22".to_string(),
            tags: vec![
                "Hexo".to_string(),
                "Blogging".to_string(),
                "Static Sites".to_string(),
                "Tutorial".to_string(),
            ],
            categories: vec!["Guides".to_string()],
        },
        Post {
            title: "Modern JavaScript Features Explained".to_string(),
            content: "A tour of the language features introduced since ES6 and how they \
                      change day-to-day frontend work: block-scoped bindings, arrow \
                      functions, template literals and friends."
                .to_string(),
            url: "/2025/08/22/javascript-es6-features/".to_string(),
            date: "2025-08-22".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "ES6".to_string(),
                "Frontend".to_string(),
            ],
            categories: vec!["Frontend".to_string()],
        },
        Post {
            title: "Node.js Performance Tuning in Practice".to_string(),
            content: "Strategies for keeping server-side JavaScript fast under load, \
                      covering memory management, event-loop hygiene and async \
                      programming pitfalls."
                .to_string(),
            url: "/2025/08/22/nodejs-performance-optimization/".to_string(),
            date: "2025-08-22".to_string(),
            tags: vec![
                "Node.js".to_string(),
                "Performance".to_string(),
                "Backend".to_string(),
            ],
            categories: vec!["Backend".to_string()],
        },
    ]
}

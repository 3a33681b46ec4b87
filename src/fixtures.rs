//! src/fixtures.rs
//!
//! The fixed seed records loaded by `seed_fixtures` and the testing reset
//! route.

use crate::{
    domain::{Blog, NewUser, ObjectId, User},
    error::Result,
};

const BLOGS: [(&str, &str, &str, u64); 6] = [
    ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
    (
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
        5,
    ),
    (
        "Canonical string reduction",
        "Edsger W. Dijkstra",
        "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
        12,
    ),
    (
        "First class tests",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
        10,
    ),
    (
        "TDD harms architecture",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html",
        0,
    ),
    (
        "Type wars",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
        2,
    ),
];

pub fn initial_blogs() -> Vec<Blog> {
    BLOGS
        .iter()
        .map(|&(title, author, url, likes)| Blog {
            id: ObjectId::new(),
            title: title.to_string(),
            author: Some(author.to_string()),
            url: url.to_string(),
            likes,
        })
        .collect()
}

pub fn initial_users() -> Result<Vec<User>> {
    let root = NewUser {
        username: Some("root".to_string()),
        name: Some("root".to_string()),
        password: Some("sekret".to_string()),
    };
    Ok(vec![root.into_user(ObjectId::new())?])
}

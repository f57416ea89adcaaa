//! Synapse test utilities.
//!
//! Helpers for integration testing: record builders, catalog fixtures, and
//! the reference blog catalog used by listing tests.

use chrono::NaiveDate;
use synapse_kernel::catalog::{Catalog, CatalogError};
use synapse_kernel::models::{Author, ContentKind, ItemRecord, MediaRef, SortKey, Tag};

/// Create a test record dated 2024-01-01 with no optional fields set.
pub fn test_record(id: &str, title: &str) -> TestRecord {
    TestRecord {
        record: ItemRecord::new(id, title, date(2024, 1, 1)),
    }
}

/// Date sort key. Invalid dates fall back to `NaiveDate::MIN`.
pub fn date(year: i32, month: u32, day: u32) -> SortKey {
    SortKey::Date(NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN))
}

/// A record builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub record: ItemRecord,
}

impl TestRecord {
    /// Set a date sort key.
    pub fn dated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.record.sort_key = date(year, month, day);
        self
    }

    /// Set a numeric sort key.
    pub fn year(mut self, year: i64) -> Self {
        self.record.sort_key = SortKey::Number(year);
        self
    }

    /// Set categories.
    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.record.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Set status.
    pub fn with_status(mut self, status: &str) -> Self {
        self.record.status = Some(status.to_string());
        self
    }

    /// Mark as important.
    pub fn important(mut self) -> Self {
        self.record.important = true;
        self
    }

    /// Set the media list (may be empty, to exercise validation).
    pub fn with_media(mut self, media: &[&str]) -> Self {
        self.record.media = Some(MediaRef::Many(media.iter().map(|m| m.to_string()).collect()));
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.record.tags.push(tag);
        self
    }

    /// Set the author.
    pub fn with_author(mut self, name: &str, avatar: Option<&str>) -> Self {
        self.record.author = Some(Author {
            name: name.to_string(),
            avatar: avatar.map(str::to_string),
        });
        self
    }

    pub fn into_record(self) -> ItemRecord {
        self.record
    }
}

/// Build a catalog from test records.
pub fn build_catalog(kind: ContentKind, records: Vec<TestRecord>) -> Result<Catalog, CatalogError> {
    Catalog::new(kind, records.into_iter().map(TestRecord::into_record).collect())
}

/// Titles of the two quantum posts in [`sample_blog_records`].
pub const QUANTUM_TITLES: [&str; 2] = [
    "Introduction to Quantum Computing: Qubits, Gates and Beyond",
    "Quantum Computing: Unlocking the Next Frontier",
];

/// The nine-post reference blog.
///
/// Exactly one post is tagged "Web Development" and exactly two titles
/// contain "quantum".
pub fn sample_blog_records() -> Vec<TestRecord> {
    vec![
        test_record("introduction-to-quantum-computing", QUANTUM_TITLES[0])
            .dated(2024, 2, 10)
            .with_categories(&["Quantum Computing"])
            .with_media(&["blog/qubits.jpg"])
            .with_author("Priya Raman", Some("team/priya.jpg")),
        test_record("quantum-computing-unlocking", QUANTUM_TITLES[1])
            .dated(2024, 8, 22)
            .with_categories(&["Quantum Computing", "AI"])
            .with_media(&["blog/frontier.jpg"]),
        test_record("building-modern-web-apps", "Building Modern Web Apps with React")
            .dated(2024, 5, 3)
            .with_categories(&["Web Development"]),
        test_record("neural-networks-from-scratch", "Neural Networks from Scratch")
            .dated(2024, 9, 15)
            .with_categories(&["AI", "Machine Learning"])
            .important(),
        test_record("ethics-of-ai", "The Ethics of Artificial Intelligence")
            .dated(2024, 3, 28)
            .with_categories(&["AI", "Ethics"]),
        test_record("computer-vision-in-practice", "Computer Vision in Practice")
            .dated(2024, 7, 1)
            .with_categories(&["AI", "Computer Vision"])
            .important(),
        test_record("large-language-models-explained", "Large Language Models Explained")
            .dated(2024, 10, 5)
            .with_categories(&["AI", "NLP"]),
        test_record(
            "reinforcement-learning-games",
            "Teaching Agents to Play: Reinforcement Learning",
        )
        .dated(2024, 4, 14)
        .with_categories(&["Machine Learning"]),
        test_record("data-science-toolkit", "A Student's Data Science Toolkit")
            .dated(2024, 6, 18)
            .with_categories(&["Data Science"]),
    ]
}

/// The reference blog as a catalog.
pub fn sample_blog_catalog() -> Result<Catalog, CatalogError> {
    build_catalog(ContentKind::Blog, sample_blog_records())
}

/// A small events catalog with multi-image galleries.
pub fn sample_events_catalog() -> Result<Catalog, CatalogError> {
    build_catalog(
        ContentKind::Event,
        vec![
            test_record("spring-hackathon", "Spring Hackathon")
                .dated(2025, 4, 12)
                .with_status("upcoming")
                .with_media(&["events/hack-1.jpg", "events/hack-2.jpg"]),
            test_record("ml-workshop", "Intro to ML Workshop")
                .dated(2024, 11, 2)
                .with_status("past")
                .with_media(&["events/ml-1.jpg", "events/ml-2.jpg", "events/ml-3.jpg"]),
            test_record("welcome-social", "Welcome Social")
                .dated(2024, 9, 6)
                .with_status("past"),
        ],
    )
}

/// A projects catalog mixing plain and colored tags.
pub fn sample_projects_catalog() -> Result<Catalog, CatalogError> {
    build_catalog(
        ContentKind::Project,
        vec![
            test_record("campus-chatbot", "Campus Chatbot")
                .year(2023)
                .with_status("completed")
                .with_categories(&["NLP"])
                .with_tag(Tag::plain("Python")),
            test_record("sign-language-translator", "Sign Language Translator")
                .year(2024)
                .with_status("in-progress")
                .with_categories(&["Computer Vision"])
                .with_tag(Tag::colored("PyTorch", "#ee4c2c"))
                .important(),
            test_record("study-planner", "AI Study Planner")
                .year(2025)
                .with_status("planned")
                .with_categories(&["NLP", "Web Development"]),
        ],
    )
}

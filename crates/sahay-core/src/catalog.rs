//! The fixed content catalogs shown on the Home and Categories tabs:
//! category cards, trending topics, and suggestion prompts.
//!
//! All static data — the reply tables that pair with these categories live
//! in `sahay-replies`.

/// A category card: stable ID, display name, blurb, and example topics.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

impl Category {
    /// Case-insensitive match of a search query against name or description
    /// (the Categories tab's search box).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "emotional",
        name: "Emotional Support",
        description: "Mental health, stress management, and emotional wellness",
        examples: &["Anxiety relief", "Stress management", "Mindfulness", "Self-care tips"],
    },
    Category {
        id: "agriculture",
        name: "Agriculture",
        description: "Farming techniques, crop management, and sustainable agriculture",
        examples: &["Crop rotation", "Pest control", "Soil health", "Organic farming"],
    },
    Category {
        id: "health",
        name: "Health & Medical",
        description: "General health, wellness, and medical information",
        examples: &["Nutrition", "Exercise", "Sleep health", "Preventive care"],
    },
    Category {
        id: "tech",
        name: "Tech",
        description: "Technology, programming, and digital tools",
        examples: &["Coding tips", "Software tools", "Web development", "AI & ML"],
    },
    Category {
        id: "all",
        name: "All",
        description: "General questions and multi-category topics",
        examples: &["General advice", "Mixed topics", "Quick questions", "Exploration"],
    },
];

/// A trending topic card on the Home tab. Tapping one starts a conversation
/// in `category` titled `title`.
#[derive(Debug, Clone, Copy)]
pub struct TrendingTopic {
    pub title: &'static str,
    pub category: &'static str,
}

pub const TRENDING_TOPICS: &[TrendingTopic] = &[
    TrendingTopic { title: "Stress Management", category: "Emotional Support" },
    TrendingTopic { title: "Crop Disease Detection", category: "Agriculture" },
    TrendingTopic { title: "Sleep Health Tips", category: "Health & Medical" },
    TrendingTopic { title: "Coding Best Practices", category: "Tech" },
];

/// Suggestion prompts on the Home tab. Tapping one starts an "All"
/// conversation with the prompt as both title and first message.
pub const SUGGESTIONS: &[&str] = &[
    "How can I manage anxiety?",
    "What are the best practices for organic farming?",
    "How do I improve my sleep quality?",
    "Explain machine learning basics",
];

/// Look up a category card by its stable ID.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Filter the catalog by a search query; an empty query returns everything.
pub fn search_categories(query: &str) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.matches(query)).collect()
}

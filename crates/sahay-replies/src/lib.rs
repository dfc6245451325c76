//! sahay-replies
//!
//! The simulated assistant. Responses are canned strings chosen uniformly
//! at random by conversation category — there is no model behind this, and
//! the "thinking" delay exists only so the UI spinner looks honest.
//!
//! # Category matching
//!
//! [`generate`] case-folds the category and matches it against four known
//! keys: `emotional`, `agriculture`, `health`, and `tech`. Note that these
//! are the short keys, not the display names — a conversation categorized
//! as "Emotional Support" or "Health & Medical" falls through to the
//! generic list, and only "Agriculture" and "Tech" hit their tables
//! exactly. This mirrors the shipped behavior and is pinned by tests.

pub mod task;

pub use task::PendingReplies;

use rand::seq::SliceRandom;
use std::time::Duration;

// ── Canned response tables ───────────────────────────────────────────────────

pub const EMOTIONAL: &[&str] = &[
    "I understand how you're feeling. It's completely normal to experience these emotions. Let's work through this together. Have you tried any breathing exercises?",
    "Your feelings are valid. Remember that it's okay to take things one step at a time. What specific aspect would you like to focus on first?",
    "Thank you for sharing that with me. Emotional wellness is a journey. Here are some strategies that might help...",
];

pub const AGRICULTURE: &[&str] = &[
    "Based on current agricultural best practices, I'd recommend crop rotation to maintain soil health. What's your current growing season?",
    "For sustainable farming, consider implementing integrated pest management. This approach combines biological, cultural, and chemical methods...",
    "Organic farming techniques can significantly improve your yield. Let me explain the key principles...",
];

pub const HEALTH: &[&str] = &[
    "Your health is important. While I can provide general information, please consult a healthcare professional for personalized advice. That said, here's what I can share...",
    "Maintaining a balanced lifestyle involves proper nutrition, regular exercise, and adequate sleep. Let's break this down...",
    "Prevention is key to good health. Here are some evidence-based recommendations...",
];

pub const TECH: &[&str] = &[
    "That's a great question about technology! Let me explain the concept step by step...",
    "In modern software development, best practices include clean code, proper documentation, and thorough testing. Here's how to apply this...",
    "The technology landscape is constantly evolving. Here's what you need to know about this topic...",
];

pub const GENERAL: &[&str] = &[
    "That's an interesting question! Let me provide you with a comprehensive answer based on the latest information...",
    "I'm here to help! Here's what I can tell you about that...",
    "Great question! Let me break this down for you in a clear and helpful way...",
];

// ── Generation ───────────────────────────────────────────────────────────────

/// The candidate list for a category. Unknown categories (including the
/// catalog display names — see the module docs) get the generic list.
pub fn candidates(category: &str) -> &'static [&'static str] {
    match category.to_lowercase().as_str() {
        "emotional" => EMOTIONAL,
        "agriculture" => AGRICULTURE,
        "health" => HEALTH,
        "tech" => TECH,
        _ => GENERAL,
    }
}

/// Pick a response for the category, uniformly at random.
///
/// Pure selection — the cosmetic delay is separate ([`thinking_delay`]) so
/// callers that don't want it (tests, scripted runs) can skip it.
pub fn generate(category: &str) -> &'static str {
    let pool = candidates(category);
    pool.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GENERAL[0])
}

/// How long the assistant pretends to think: uniform in 1–3 seconds.
pub fn thinking_duration() -> Duration {
    use rand::Rng;
    Duration::from_millis(rand::thread_rng().gen_range(1000..3000))
}

/// Suspend for a randomized 1–3 s. Cosmetic only; carries no retry or
/// correctness contract.
pub async fn thinking_delay() {
    tokio::time::sleep(thinking_duration()).await;
}

//! History search: the History tab's search box filters conversations by
//! title or category, case-insensitively.

use sahay_core::models::Conversation;

/// Conversations whose title or category contains `query`. An empty query
/// matches everything; relative (newest-first) order is preserved.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    query: &str,
) -> Vec<&'a Conversation> {
    let query = query.to_lowercase();
    conversations
        .iter()
        .filter(|c| {
            c.title.to_lowercase().contains(&query) || c.category.to_lowercase().contains(&query)
        })
        .collect()
}

use std::collections::VecDeque;
use std::sync::Mutex;

/// Bounded, oldest-evicted log of the most recent replies.
///
/// Reading the last reply, producing the next one and appending it all
/// happen under one lock in [`RecentReplies::record`], so concurrent chats
/// see a consistent history and appends land in call order.
#[derive(Debug)]
pub struct RecentReplies {
    capacity: usize,
    entries: Mutex<VecDeque<String>>,
}

impl RecentReplies {
    /// A capacity of zero keeps nothing, so the last reply is always empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Run `produce` with the most recent reply (empty if none) and append
    /// what it returns. Nothing is appended on error.
    pub fn record<E>(&self, produce: impl FnOnce(&str) -> Result<String, E>) -> Result<String, E> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let last = entries.back().map_or("", String::as_str);
        let reply = produce(last)?;

        if self.capacity > 0 {
            entries.push_back(reply.clone());
            while entries.len() > self.capacity {
                entries.pop_front();
            }
        }
        Ok(reply)
    }

    pub fn last(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .back()
            .cloned()
    }

    /// Oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Rule based candidate lookup behind the HR talent assistant.
//!
//! There is no language understanding here. Known skill keywords found in
//! the query expand to track or course names and trainees are matched on
//! those.

use tracing::{debug, instrument};

use crate::{const_config::assistant::ASSISTANT_MAX_CANDIDATES, roster::Trainee};

pub const GREETING: &str = "Hello! I'm your AI Talent Assistant. Ask me to find candidates with specific skills like 'Show me React developers' or 'Find candidates with Python skills'.";

pub const NO_MATCH_REPLY: &str = "I couldn't find any candidates matching your criteria. Try searching for skills like React, Python, Node.js, AI/ML, or Data Structures.";

/// Ordered keyword table. Every keyword contained in the query contributes
/// its tracks
pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("react", &["React Development", "Full Stack"]),
    ("python", &["Python Backend", "Core Stack"]),
    ("node", &["Node.js Backend", "Full Stack"]),
    ("ai", &["Machine Learning", "Deep Learning", "AI-ML"]),
    ("ml", &["Machine Learning", "Deep Learning", "AI-ML"]),
    ("machine learning", &["Machine Learning", "AI-ML"]),
    ("deep learning", &["Deep Learning", "AI-ML"]),
    ("data", &["Data Structures", "Core Stack"]),
    ("frontend", &["React Development", "Full Stack"]),
    ("backend", &["Python Backend", "Node.js Backend"]),
    (
        "full stack",
        &["Full Stack", "React Development", "Node.js Backend"],
    ),
];

/// Tracks for every keyword found in the query, in table order. May contain
/// duplicates
pub fn matched_tracks(query: &str) -> Vec<&'static str> {
    let query = query.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|(keyword, _)| query.contains(keyword))
        .flat_map(|(_, tracks)| tracks.iter().copied())
        .collect()
}

/// Trainees matching the query, in roster order.
///
/// Without any keyword the raw query is matched against track, course and
/// name. Otherwise a trainee matches if its track or course contains any of
/// the matched tracks. All comparisons ignore case
pub fn find_candidates<'a>(query: &str, trainees: &'a [Trainee]) -> Vec<&'a Trainee> {
    let lower_query = query.to_lowercase();
    let tracks = matched_tracks(query);
    if tracks.is_empty() {
        return trainees
            .iter()
            .filter(|t| {
                [&t.track, &t.course, &t.name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&lower_query))
            })
            .collect();
    }

    let tracks: Vec<String> = tracks.into_iter().map(str::to_lowercase).collect();
    trainees
        .iter()
        .filter(|t| {
            let track = t.track.to_lowercase();
            let course = t.course.to_lowercase();
            tracks
                .iter()
                .any(|wanted| track.contains(wanted) || course.contains(wanted))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReply {
    pub text: String,
    /// Best first, at most [`ASSISTANT_MAX_CANDIDATES`]
    pub candidates: Vec<Trainee>,
}

impl SearchReply {
    #[instrument(skip(trainees), fields(roster_len = trainees.len()))]
    pub fn for_query(query: &str, trainees: &[Trainee]) -> Self {
        let mut candidates = find_candidates(query, trainees);
        debug!(found = candidates.len());
        if candidates.is_empty() {
            return Self {
                text: NO_MATCH_REPLY.to_string(),
                candidates: Vec::new(),
            };
        }
        let text = format!(
            "I found {} candidate(s) matching your criteria. Here are the top performers:",
            candidates.len()
        );
        // Stable, so equal scores keep roster order
        candidates.sort_by(|a, b| b.avg_score.cmp(&a.avg_score));
        Self {
            text,
            candidates: candidates
                .into_iter()
                .take(ASSISTANT_MAX_CANDIDATES)
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: usize,
    pub speaker: Speaker,
    pub content: String,
    pub candidates: Vec<Trainee>,
}

/// Message history of one assistant conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Starts with the assistant's greeting
    pub fn new() -> Self {
        let mut result = Self {
            messages: Vec::new(),
        };
        result.push(Speaker::Assistant, GREETING.to_string(), Vec::new());
        result
    }

    /// Appends the user's message. Blank input is ignored and `None` returned,
    /// otherwise the query to answer
    pub fn push_user_message(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(Speaker::User, input.to_string(), Vec::new());
        Some(input.to_string())
    }

    pub fn push_reply(&mut self, reply: SearchReply) {
        self.push(Speaker::Assistant, reply.text, reply.candidates);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    fn push(&mut self, speaker: Speaker, content: String, candidates: Vec<Trainee>) {
        let id = self.messages.len() + 1;
        self.messages.push(ChatMessage {
            id,
            speaker,
            content,
            candidates,
        });
    }
}

use futures::channel::oneshot;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::instrument;
use trainhub_shared::{
    const_config::assistant::ASSISTANT_RESPONSE_DELAY,
    roster::Trainee,
    talent_search::{ChatMessage, Conversation, SearchReply},
};

use super::{send_result, UiCallBack};

/// Chat front end to the talent search. Replies arrive after a simulated
/// processing delay
#[derive(Debug, Clone)]
pub struct TalentAssistant {
    roster: Arc<[Trainee]>,
    response_delay: Duration,
    inner: Arc<Mutex<AssistantInner>>,
}

#[derive(Debug, Default)]
struct AssistantInner {
    conversation: Conversation,
    pending_replies: usize,
}

impl TalentAssistant {
    pub fn new(roster: Vec<Trainee>) -> Self {
        Self::with_response_delay(roster, ASSISTANT_RESPONSE_DELAY)
    }

    pub fn with_response_delay(roster: Vec<Trainee>, response_delay: Duration) -> Self {
        Self {
            roster: roster.into(),
            response_delay,
            inner: Default::default(),
        }
    }

    /// Sends a message to the assistant.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the message is
    /// added to the conversation straight away and the reply is added (and
    /// sent on the returned channel) once the response delay has passed
    #[instrument(skip(self, ui_notify))]
    pub fn send<F: UiCallBack>(
        &self,
        input: &str,
        ui_notify: F,
    ) -> Option<oneshot::Receiver<SearchReply>> {
        let query = {
            let mut guard = self.inner.lock().expect("mutex poisoned");
            let query = guard.conversation.push_user_message(input)?;
            guard.pending_replies += 1;
            query
        };
        let (tx, rx) = oneshot::channel();
        let assistant = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(assistant.response_delay).await;
            let reply = SearchReply::for_query(&query, &assistant.roster);
            {
                let mut guard = assistant.inner.lock().expect("mutex poisoned");
                guard.conversation.push_reply(reply.clone());
                guard.pending_replies -= 1;
            }
            send_result(tx, reply);
            ui_notify();
        });
        Some(rx)
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .conversation
            .messages()
            .to_vec()
    }

    /// True while at least one reply has not arrived yet
    pub fn is_thinking(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").pending_replies > 0
    }
}

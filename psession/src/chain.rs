//! One chat model paired with one bounded conversation window.

use std::sync::Arc;

use pprovider::{ChatModel, Message, ProviderError};

use crate::ConversationWindow;

pub struct ConversationChain {
    model: Arc<dyn ChatModel>,
    window: ConversationWindow,
    system_prompt: Option<String>,
}

impl ConversationChain {
    pub fn new(model: Arc<dyn ChatModel>, window: ConversationWindow) -> Self {
        Self {
            model,
            window,
            system_prompt: None,
        }
    }

    /// Sets a system turn sent ahead of every call. It is never stored in the window.
    pub fn with_system_prompt(mut self, system_prompt: Option<String>) -> Self {
        self.system_prompt = system_prompt.filter(|prompt| !prompt.trim().is_empty());
        self
    }

    /// Sends the window as history plus `input`.
    ///
    /// On success the user and assistant turns are appended to the window. On
    /// failure the window is left untouched.
    pub async fn execute(&mut self, input: &str) -> Result<String, ProviderError> {
        let mut history = Vec::with_capacity(self.window.len() + 1);
        if let Some(system_prompt) = &self.system_prompt {
            history.push(Message::system(system_prompt.clone()));
        }
        history.extend(self.window.iter().cloned());

        let reply = self.model.complete(&history, input).await?;

        self.window.push(Message::user(input));
        self.window.push(Message::assistant(reply.clone()));
        Ok(reply)
    }

    pub fn window(&self) -> &ConversationWindow {
        &self.window
    }

    pub fn model(&self) -> &Arc<dyn ChatModel> {
        &self.model
    }
}

impl std::fmt::Debug for ConversationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationChain")
            .field("provider", &self.model.provider())
            .field("model", &self.model.model_name())
            .field("window", &self.window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::{Arc, Mutex};
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    use pprovider::{ChatModel, Message, Provider, ProviderError, ProviderFuture, Role};

    use super::ConversationChain;
    use crate::ConversationWindow;

    #[derive(Default)]
    struct RecordingModel {
        histories: Mutex<Vec<Vec<Message>>>,
    }

    impl ChatModel for RecordingModel {
        fn provider(&self) -> Provider {
            Provider::MistralAi
        }

        fn model_name(&self) -> &str {
            "recording"
        }

        fn complete<'a>(
            &'a self,
            history: &'a [Message],
            input: &'a str,
        ) -> ProviderFuture<'a, Result<String, ProviderError>> {
            Box::pin(async move {
                self.histories
                    .lock()
                    .expect("history lock")
                    .push(history.to_vec());

                if input == "fail" {
                    return Err(ProviderError::other("boom"));
                }

                Ok(format!("re: {input}"))
            })
        }
    }

    #[test]
    fn successful_exchange_is_appended_and_replayed_as_history() {
        let model = Arc::new(RecordingModel::default());
        let mut chain = ConversationChain::new(model.clone(), ConversationWindow::new(10));

        let first = block_on(chain.execute("one")).expect("first call should succeed");
        assert_eq!(first, "re: one");
        block_on(chain.execute("two")).expect("second call should succeed");

        let histories = model.histories.lock().expect("history lock");
        assert!(histories[0].is_empty());
        assert_eq!(
            histories[1],
            vec![Message::user("one"), Message::assistant("re: one")]
        );
        assert_eq!(chain.window().len(), 4);
    }

    #[test]
    fn failed_exchange_leaves_window_untouched() {
        let model = Arc::new(RecordingModel::default());
        let mut chain = ConversationChain::new(model, ConversationWindow::new(10));

        let error = block_on(chain.execute("fail")).expect_err("call should fail");
        assert_eq!(error.message, "boom");
        assert!(chain.window().is_empty());
    }

    #[test]
    fn system_prompt_leads_history_without_entering_window() {
        let model = Arc::new(RecordingModel::default());
        let mut chain = ConversationChain::new(model.clone(), ConversationWindow::new(10))
            .with_system_prompt(Some("Answer in one sentence.".to_string()));

        block_on(chain.execute("one")).expect("call should succeed");
        block_on(chain.execute("two")).expect("call should succeed");

        let histories = model.histories.lock().expect("history lock");
        assert_eq!(histories[0].len(), 1);
        assert_eq!(histories[0][0].role, Role::System);
        assert_eq!(histories[1].len(), 3);
        assert!(chain.window().iter().all(|message| message.role != Role::System));
    }

    #[test]
    fn blank_system_prompt_is_ignored() {
        let model = Arc::new(RecordingModel::default());
        let mut chain = ConversationChain::new(model.clone(), ConversationWindow::new(10))
            .with_system_prompt(Some("  ".to_string()));

        block_on(chain.execute("one")).expect("call should succeed");
        assert!(model.histories.lock().expect("history lock")[0].is_empty());
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = std::pin::pin!(future);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        loop {
            match future.as_mut().poll(&mut cx) {
                Poll::Ready(value) => return value,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn noop_waker() -> Waker {
        unsafe fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        unsafe fn noop(_: *const ()) {}

        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);

        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }
}
